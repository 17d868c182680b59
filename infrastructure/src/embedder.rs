use crate::embedding_client::EmbeddingClient;
use domain::models::Embedding;
use futures::stream::{self, StreamExt};
use shared::types::Result;

const BATCH_SIZE: usize = 32;
const CONCURRENT_REQUESTS: usize = 8;

/// Turns document chunks into stored embeddings, batching requests to the
/// embeddings API with bounded concurrency.
pub struct Embedder {
    client: EmbeddingClient,
}

#[derive(Clone)]
pub struct EmbeddingInput {
    pub id: String,
    pub path: String,
    pub text: String,
}

impl Embedder {
    pub fn new(client: EmbeddingClient) -> Self {
        Self { client }
    }

    pub async fn generate_embeddings(&self, inputs: &[EmbeddingInput]) -> Result<Vec<Embedding>> {
        let mut embeddings = Vec::with_capacity(inputs.len());
        for batch in inputs.chunks(BATCH_SIZE) {
            tracing::info!(chunks = batch.len(), "generating embeddings batch");
            let batch_embeddings = self.generate_batch(batch).await?;
            embeddings.extend(batch_embeddings);
        }
        Ok(embeddings)
    }

    async fn generate_batch(&self, inputs: &[EmbeddingInput]) -> Result<Vec<Embedding>> {
        let futures: Vec<_> = inputs
            .iter()
            .map(|input| {
                let client = &self.client;
                async move {
                    let vector = client.embed(&input.text).await?;
                    Ok(Embedding {
                        id: input.id.clone(),
                        vector,
                        text: input.text.clone(),
                        path: input.path.clone(),
                    }) as Result<Embedding>
                }
            })
            .collect();

        let results = stream::iter(futures)
            .buffer_unordered(CONCURRENT_REQUESTS)
            .collect::<Vec<_>>()
            .await;

        results.into_iter().collect()
    }
}
