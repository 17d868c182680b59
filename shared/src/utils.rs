use std::path::Path;

/// Document types the ingestion pipeline knows how to extract text from.
pub fn is_supported_document(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "txt" | "md" | "csv" | "docx" | "pdf"
    )
}
