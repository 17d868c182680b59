use serde::{Deserialize, Serialize};

/// One indexed document chunk with its embedding vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub id: String,
    pub vector: Vec<f32>,
    pub text: String,
    pub path: String,
}
