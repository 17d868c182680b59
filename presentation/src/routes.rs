use crate::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/query", post(handlers::query))
        .nest_service("/static", ServeDir::new(&state.config.static_directory))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
