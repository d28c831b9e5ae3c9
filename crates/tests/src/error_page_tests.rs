use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn unknown_route_renders_html_404() {
    let app = test_app();
    let (status, _, html) = get(&app, "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_full_page(&html);
    assert!(html.contains("<title>Page Not Found</title>"));
    assert!(html.contains("/no/such/page"));
    assert!(html.contains(r#"href="/""#));
}

#[tokio::test]
async fn malformed_export_renders_html_500_without_details() {
    let app = app_with_data_dir(fixtures_dir().join("broken"));
    let (status, _, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_full_page(&html);
    assert!(html.contains("The team data could not be loaded."));
    assert!(!html.contains("teams.json"));
}
