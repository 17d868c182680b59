use shared::types::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const SEPARATOR_WIDTH: usize = 70;

/// Flat-file exchange log. One record is three lines: the query, the
/// response, and a dash separator. The file is opened in append mode per
/// write; there is no locking and no rotation.
pub struct QueryLog {
    path: PathBuf,
}

impl QueryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, query: &str, response: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "Query: {query}")?;
        writeln!(file, "Response: {response}")?;
        writeln!(file, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}
