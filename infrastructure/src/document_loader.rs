use docx_rs::{read_docx, DocumentChild};
use memmap2::Mmap;
use shared::types::Result;
use std::fs::{self, File};
use std::path::Path;

/// Extract plain text from a source document, dispatching on extension.
/// Plain formats (txt, md, csv) are read as-is; docx and pdf go through
/// their format-specific extractors.
pub fn load_document(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Ok(pdf_extract::extract_text(path)?),
        "docx" => extract_docx(path),
        _ => read_plain_text(path),
    }
}

fn read_plain_text(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }
    let mmap = unsafe { Mmap::map(&file)? };
    // Lossy conversion ensures non-UTF8 bytes don't crash ingestion.
    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

fn extract_docx(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes)?;
    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph.raw_text());
            text.push('\n');
        }
    }
    Ok(text)
}
