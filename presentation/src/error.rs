use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP layer. Every internal failure maps to the
/// same coarse 500 body; the distinguishing detail goes to the logs only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("query pipeline failed: {0}")]
    Query(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal Server Error" })),
        )
            .into_response()
    }
}
