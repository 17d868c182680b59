use infrastructure::config::Config;
use infrastructure::embedder::{Embedder, EmbeddingInput};
use infrastructure::embedding_client::EmbeddingClient;
use infrastructure::file_scanner::FileScanner;
use infrastructure::vector_store::VectorStore;
use shared::telemetry::Telemetry;
use shared::types::Result;

/// Populates the vector index from the source document directory.
/// Unchanged files (by content hash) are skipped; changed files have their
/// old chunks dropped before re-insert.
pub struct IngestService {
    config: Config,
}

impl IngestService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let timer = Telemetry::new();
        let store = VectorStore::open(self.config.index_path())?;
        let scanner = FileScanner::new(&self.config.source_directory);
        let embedder = Embedder::new(EmbeddingClient::from_config(&self.config));

        tracing::info!(
            source = %self.config.source_directory.display(),
            "scanning source documents"
        );
        let scans = scanner.scan_files()?;

        let mut inputs: Vec<EmbeddingInput> = Vec::new();
        for scan in scans {
            if scan.hash.is_empty() || scan.chunks.is_empty() {
                continue;
            }

            let previous_hash = store.get_file_hash(&scan.path)?;
            if previous_hash.as_deref() == Some(scan.hash.as_str()) {
                tracing::debug!(path = %scan.path, "unchanged, skipping");
                continue;
            }

            // File changed; drop its old chunks before re-inserting.
            store.delete_embeddings_for_path(&scan.path)?;

            for chunk in scan.chunks {
                inputs.push(EmbeddingInput {
                    id: format!("{}:{}", chunk.path, chunk.start_offset),
                    path: chunk.path,
                    text: chunk.text,
                });
            }
            store.upsert_file_hash(&scan.path, &scan.hash)?;
        }

        if inputs.is_empty() {
            tracing::info!("index is up to date");
            return Ok(());
        }

        tracing::info!(chunks = inputs.len(), "generating embeddings");
        let embeddings = embedder.generate_embeddings(&inputs).await?;
        store.insert_embeddings(&embeddings)?;
        tracing::info!(
            chunks = embeddings.len(),
            elapsed_ms = timer.elapsed_ms() as u64,
            "ingestion complete"
        );
        Ok(())
    }
}
