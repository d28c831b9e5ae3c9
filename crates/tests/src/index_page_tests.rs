use axum::http::{header, StatusCode};

use crate::common::*;

#[tokio::test]
async fn index_lists_teams_in_export_order() {
    let app = test_app();
    let (status, headers, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let content_type = headers[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert_full_page(&html);

    let first = position(&html, "Dorans Independent Gamers");
    let second = position(&html, "Zephyr Theseus");
    let third = position(&html, "Dorans Maggi");
    assert!(first < second && second < third);
    assert!(html.contains("3 teams"));
}

#[tokio::test]
async fn index_uses_default_title() {
    let app = test_app();
    let (_, _, html) = get(&app, "/").await;
    assert!(html.contains("<title>League Teams Viewer</title>"));
}

#[tokio::test]
async fn index_links_each_team_page() {
    let app = test_app();
    let (_, _, html) = get(&app, "/").await;

    assert!(html.contains(r#"href="/team/Dorans%20Independent%20Gamers""#));
    assert!(html.contains(r#"href="/team/Zephyr%20Theseus""#));
    assert!(html.contains("2 players"));
    assert!(html.contains("1 player<"));
    assert!(html.contains("0 players"));
}

#[tokio::test]
async fn index_has_a_single_home_link() {
    let app = test_app();
    let (_, _, html) = get(&app, "/").await;

    let nav_start = position(&html, "<nav");
    let nav_end = position(&html, "</nav>");
    let nav = &html[nav_start..nav_end];
    assert_eq!(nav.matches("<a ").count(), 1);
    assert!(nav.contains(r#"href="/""#));
    assert!(nav.contains("Home"));
}

#[tokio::test]
async fn empty_export_shows_empty_state() {
    let app = app_with_data_dir(fixtures_dir().join("does-not-exist"));
    let (status, _, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_full_page(&html);
    assert!(html.contains("No teams found."));
    assert!(html.contains("0 teams"));
}
