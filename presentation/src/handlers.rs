use crate::error::ApiError;
use application::query_service::QueryService;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use infrastructure::config::Config;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::telemetry::Telemetry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// GET / - the chat page. A missing or unreadable template degrades to a
/// JSON error body instead of failing the transport.
pub async fn home(State(state): State<AppState>) -> Response {
    let index = state.config.templates_directory.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(path = %index.display(), "error loading template: {err}");
            Json(json!({ "error": "Template load failed" })).into_response()
        }
    }
}

/// POST /query - answer a user query. Malformed bodies are rejected by the
/// Json extractor before this runs; anything failing inside the pipeline
/// becomes a generic 500.
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let timer = Telemetry::new();
    tracing::info!(query = %request.query, "received query");

    let service = QueryService::new((*state.config).clone());
    let response = service.answer(&request.query).await?;

    tracing::info!(
        elapsed_ms = timer.elapsed_ms() as u64,
        response = %response,
        "returning response"
    );
    Ok(Json(QueryResponse { response }))
}
