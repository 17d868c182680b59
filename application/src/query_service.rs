use domain::cleanup::clean_response;
use domain::greeting::{is_greeting, GREETINGS};
use infrastructure::config::Config;
use infrastructure::embedding_client::EmbeddingClient;
use infrastructure::query_log::QueryLog;
use infrastructure::search::SearchEngine;
use infrastructure::vector_store::VectorStore;
use rand::Rng;
use shared::types::Result;

pub const NO_MATCH_RESPONSE: &str = "No relevant documents found.";

/// Answers one query: greeting queries get a canned reply, everything else
/// goes through a top-1 similarity lookup against the document index.
pub struct QueryService {
    config: Config,
}

impl QueryService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn answer(&self, query: &str) -> Result<String> {
        let response = if is_greeting(query) {
            random_greeting().to_string()
        } else {
            self.lookup(query).await?
        };

        let cleaned = clean_response(&response);

        // Exchange logging is best-effort; a failed write never fails the
        // request itself.
        let log = QueryLog::new(&self.config.query_log_file);
        if let Err(err) = log.append(query, &cleaned) {
            tracing::error!("failed to append to query log: {err:#}");
        }

        Ok(cleaned)
    }

    async fn lookup(&self, query: &str) -> Result<String> {
        // The index is opened fresh for every query and only read here.
        let store = VectorStore::open(self.config.index_path())?;
        let client = EmbeddingClient::from_config(&self.config);

        let query_embedding = client.embed(query).await?;
        let embeddings = store.get_all_embeddings()?;
        match SearchEngine::top_matches(&query_embedding, &embeddings, 1)
            .into_iter()
            .next()
        {
            Some(text) => Ok(text),
            None => {
                tracing::warn!(%query, "no relevant documents found");
                Ok(NO_MATCH_RESPONSE.to_string())
            }
        }
    }
}

fn random_greeting() -> &'static str {
    let mut rng = rand::rng();
    GREETINGS[rng.random_range(0..GREETINGS.len())]
}
