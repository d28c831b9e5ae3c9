use axum::http::{header, StatusCode};

use crate::common::*;

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let app = test_app();
    let (status, headers, body) = get(&app, "/css/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
    assert_eq!(body, shared_ui::stylesheet::STYLESHEET);
}

#[tokio::test]
async fn champion_icons_are_served_from_images_dir() {
    let app = test_app();
    let (status, headers, _) = get(&app, "/images/champions/Ahri.png").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn missing_image_is_404() {
    let app = test_app();
    let (status, _, _) = get(&app, "/images/champions/Nope.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_data_dir() {
    let app = test_app();
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"], "available");
}

#[tokio::test]
async fn health_flags_missing_data_dir() {
    let app = app_with_data_dir(fixtures_dir().join("does-not-exist"));
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_str().unwrap().starts_with("error"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app();
    let (_, headers, _) = get(&app, "/health").await;
    assert!(headers.contains_key("x-request-id"));
}
