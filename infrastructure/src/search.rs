use domain::models::Embedding;

pub struct SearchEngine;

impl SearchEngine {
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot_product / (norm_a * norm_b)
    }

    /// Rank every stored chunk against the query embedding and return the
    /// text of the top `k`, best first. The query path asks for k = 1.
    pub fn top_matches(
        query_embedding: &[f32],
        embeddings: &[Embedding],
        top_k: usize,
    ) -> Vec<String> {
        let mut similarities: Vec<(f32, &str)> = embeddings
            .iter()
            .map(|emb| {
                (
                    Self::cosine_similarity(query_embedding, &emb.vector),
                    &emb.text[..],
                )
            })
            .collect();

        similarities.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        similarities
            .into_iter()
            .take(top_k)
            .map(|(_, text)| text.to_string())
            .collect()
    }
}
