use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::AppState;
use std::path::PathBuf;
use tower::ServiceExt;

/// Directory holding the checked-in export fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Router over the fixture export and images.
pub fn test_app() -> Router {
    app_with_data_dir(fixtures_dir().join("data"))
}

/// Router over an arbitrary data directory, sharing the fixture images.
pub fn app_with_data_dir(data_dir: PathBuf) -> Router {
    let state = AppState::new(data_dir, fixtures_dir().join("images"));
    server::app_router(state)
}

/// GET a route and return status, headers and the body as text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = String::from_utf8_lossy(&body_bytes).into_owned();

    (status, headers, body)
}

/// GET a JSON route and parse the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("response to {uri} is not JSON ({e}): {body}"));
    (status, value)
}

/// Byte offset of `needle` in `haystack`; panics if absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected to find {needle:?}"))
}

/// Assert the page was assembled from the shared chrome.
pub fn assert_full_page(html: &str) {
    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype");
    assert!(html.contains(r#"href="/css/style.css""#));
    assert_eq!(html.matches("<main class=\"container\">").count(), 1);
    assert_eq!(html.matches("</main>").count(), 1);
    assert!(html.trim_end().ends_with("</html>"));
}
