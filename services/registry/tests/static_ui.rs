mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use registry::app::{AppState, build_router};
use registry::store::memory::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with_static_dir(static_dir: &std::path::Path) -> axum::Router {
    build_router(AppState {
        api_version: "v1".to_string(),
        store: Arc::new(InMemoryStore::new()),
        static_dir: static_dir.to_path_buf(),
    })
}

#[tokio::test]
async fn static_assets_and_spa_fallback_serve_the_ui() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), "<html>registry</html>").expect("index");
    std::fs::write(dir.path().join("app.css"), "body{}").expect("css");
    let app = app_with_static_dir(dir.path());

    // Direct asset.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/app.css")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("asset");
    assert_eq!(response.status(), StatusCode::OK);

    // Client-side route falls back to the main page.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/graduates/edit/123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("fallback");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"<html>registry</html>");
}

#[tokio::test]
async fn api_404_is_json_even_with_static_fallback_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), "<html>registry</html>").expect("index");
    let app = app_with_static_dir(dir.path());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = common::read_json(response).await;
    assert_eq!(payload["code"], "not_found");
}
