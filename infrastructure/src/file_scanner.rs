use crate::document_loader;
use rayon::prelude::*;
use shared::types::Result;
use shared::utils::is_supported_document;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const MAX_CHUNK_SIZE: usize = 2000;
const MIN_CHUNK_SIZE: usize = 500;
const FALLBACK_CHUNK_SIZE: usize = 1000;
const FALLBACK_OVERLAP: usize = 200;

#[derive(Debug, Clone)]
pub struct FileChunk {
    pub path: String,
    pub text: String,
    pub start_offset: usize,
}

#[derive(Debug, Clone)]
pub struct FileScanResult {
    pub path: String,
    pub hash: String,
    pub chunks: Vec<FileChunk>,
}

pub struct FileScanner {
    root_path: PathBuf,
    max_file_bytes: u64,
}

impl FileScanner {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            // Cap per-file extraction to keep ingestion responsive.
            max_file_bytes: 16 * 1024 * 1024,
        }
    }

    /// Walk the source directory, extract text from every supported
    /// document and chunk it. A document that fails extraction is logged
    /// and skipped rather than aborting the whole scan.
    pub fn scan_files(&self) -> Result<Vec<FileScanResult>> {
        let files = self.collect_files()?;
        let results: Vec<FileScanResult> = files
            .par_iter()
            .filter_map(|path| match self.load_and_chunk(path) {
                Ok(scan) => Some(scan),
                Err(err) => {
                    tracing::error!(path = %path.display(), "failed to load document: {err:#}");
                    None
                }
            })
            .collect();
        Ok(results)
    }

    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.collect_files_recursive(&self.root_path, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn collect_files_recursive(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with('.'))
                .unwrap_or(false);
            if hidden {
                continue;
            }
            if path.is_dir() {
                self.collect_files_recursive(&path, files)?;
            } else if is_supported_document(&path) {
                files.push(path);
            }
        }
        Ok(())
    }

    fn load_and_chunk(&self, path: &Path) -> Result<FileScanResult> {
        let path_str = path.to_string_lossy().to_string();
        if let Ok(meta) = path.metadata() {
            if meta.len() > self.max_file_bytes {
                tracing::warn!(path = %path_str, size = meta.len(), "skipping oversized document");
                return Ok(FileScanResult {
                    path: path_str,
                    hash: String::new(),
                    chunks: Vec::new(),
                });
            }
        }
        let content = document_loader::load_document(path)?;
        let hash = format!("{:x}", md5::compute(content.as_bytes()));
        let chunks = chunk_text(&content, &path_str);
        Ok(FileScanResult {
            path: path_str,
            hash,
            chunks,
        })
    }
}

/// Paragraph-based chunking: accumulate blank-line-separated paragraphs
/// into chunks of roughly MIN..MAX bytes, deduplicated by content hash.
/// Text without paragraph structure falls back to fixed-size windows.
fn chunk_text(text: &str, path: &str) -> Vec<FileChunk> {
    let mut chunks = Vec::new();
    let mut seen = HashSet::new();
    let mut current = String::new();
    let mut chunk_start = 0;
    let mut cursor = 0;

    for paragraph in text.split("\n\n") {
        let paragraph_start = cursor;
        cursor += paragraph.len() + 2;

        if !current.is_empty() && current.len() + paragraph.len() > MAX_CHUNK_SIZE {
            push_chunk(&mut chunks, &mut seen, path, &current, chunk_start);
            current.clear();
        }
        if current.is_empty() {
            chunk_start = paragraph_start;
        } else {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);

        if current.len() >= MIN_CHUNK_SIZE {
            push_chunk(&mut chunks, &mut seen, path, &current, chunk_start);
            current.clear();
        }
    }
    if !current.trim().is_empty() {
        push_chunk(&mut chunks, &mut seen, path, &current, chunk_start);
    }

    if chunks.is_empty() {
        chunk_fixed_size(text, path)
    } else {
        chunks
    }
}

fn chunk_fixed_size(text: &str, path: &str) -> Vec<FileChunk> {
    let mut chunks = Vec::new();
    let mut seen = HashSet::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + FALLBACK_CHUNK_SIZE).min(text.len());
        while end < text.len() && !text.is_char_boundary(end) {
            end += 1;
        }
        push_chunk(&mut chunks, &mut seen, path, &text[start..end], start);
        if end == text.len() {
            break;
        }
        let mut next = end.saturating_sub(FALLBACK_OVERLAP);
        while next > start && !text.is_char_boundary(next) {
            next -= 1;
        }
        // Guarantee forward progress even for pathological overlap.
        start = if next <= start { end } else { next };
    }
    chunks
}

fn push_chunk(
    chunks: &mut Vec<FileChunk>,
    seen: &mut HashSet<String>,
    path: &str,
    text: &str,
    start_offset: usize,
) {
    let hash = format!("{:x}", md5::compute(text.as_bytes()));
    if seen.insert(hash) {
        chunks.push(FileChunk {
            path: path.to_string(),
            text: text.to_string(),
            start_offset,
        });
    }
}
