use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub persist_directory: PathBuf,
    pub source_directory: PathBuf,
    pub embeddings_model_name: String,
    pub embeddings_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub templates_directory: PathBuf,
    pub static_directory: PathBuf,
    pub query_log_file: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            persist_directory: env::var("PERSIST_DIRECTORY")
                .unwrap_or_else(|_| "db".to_string())
                .into(),
            source_directory: env::var("SOURCE_DIRECTORY")
                .unwrap_or_else(|_| "source_documents".to_string())
                .into(),
            embeddings_model_name: env::var("EMBEDDINGS_MODEL_NAME")
                .unwrap_or_else(|_| "all-MiniLM-L6-v2".to_string()),
            embeddings_base_url: env::var("EMBEDDINGS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
            templates_directory: PathBuf::from("templates"),
            static_directory: PathBuf::from("static"),
            query_log_file: PathBuf::from("query_response_log.txt"),
        }
    }

    /// Location of the SQLite index inside the persist directory.
    pub fn index_path(&self) -> PathBuf {
        self.persist_directory.join("embeddings.db")
    }
}
