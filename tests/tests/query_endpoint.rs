//! End-to-end behavior of the /query endpoint and the home page, exercised
//! through the real router with a temp-directory config.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use domain::greeting::GREETINGS;
use http_body_util::BodyExt;
use presentation::handlers::AppState;
use presentation::routes::router;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;

fn app(dir: &std::path::Path) -> axum::Router {
    router(AppState {
        config: Arc::new(tests::temp_config(dir)),
    })
}

fn post_query(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn greeting_keywords_always_answer_from_the_greeting_set() {
    let dir = tempfile::tempdir().unwrap();
    let greetings: HashSet<&str> = GREETINGS.iter().copied().collect();

    for query in ["hello there", "hey, quick question", "Good morning", "this is a test"] {
        let response = app(dir.path())
            .oneshot(post_query(json!({ "query": query })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{query}");
        let body = body_json(response.into_body()).await;
        assert!(
            greetings.contains(body["response"].as_str().unwrap()),
            "query {query:?} should answer with a canned greeting"
        );
    }
}

#[tokio::test]
async fn each_query_appends_exactly_one_log_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = tests::temp_config(dir.path());
    let log_path = config.query_log_file.clone();
    let app = router(AppState {
        config: Arc::new(config),
    });

    let response = app
        .oneshot(post_query(json!({ "query": "hello logger" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Query: hello logger");
    assert!(lines[1].starts_with("Response: "));
    assert_eq!(lines[2], "-".repeat(70));
}

#[tokio::test]
async fn missing_query_field_is_a_transport_rejection_not_a_500() {
    let dir = tempfile::tempdir().unwrap();

    let response = app(dir.path())
        .oneshot(post_query(json!({ "question": "wrong field" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let response = app(dir.path())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/query")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("hello"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn home_renders_template_or_degrades_to_json() {
    let dir = tempfile::tempdir().unwrap();

    // Missing template: JSON fallback body, transport intact.
    let response = app(dir.path())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "Template load failed");

    // Present template: HTML through.
    let config = tests::temp_config(dir.path());
    fs::create_dir_all(&config.templates_directory).unwrap();
    fs::write(config.templates_directory.join("index.html"), "<h1>chat</h1>").unwrap();
    let app = router(AppState {
        config: Arc::new(config),
    });
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&bytes).unwrap().contains("<h1>chat</h1>"));
}

#[tokio::test]
async fn static_mount_serves_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = tests::temp_config(dir.path());
    fs::create_dir_all(&config.static_directory).unwrap();
    fs::write(config.static_directory.join("style.css"), "body {}").unwrap();
    let app = router(AppState {
        config: Arc::new(config),
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
