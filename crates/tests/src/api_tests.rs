use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn list_teams_returns_summaries() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/teams").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "Dorans Independent Gamers", "player_count": 2},
            {"name": "Zephyr Theseus", "player_count": 1},
            {"name": "Dorans Maggi", "player_count": 0}
        ])
    );
}

#[tokio::test]
async fn list_players_returns_roster() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/teams/Zephyr%20Theseus/players").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"name": "Kestrel", "accounts": ["Kestrel-EUW"]}]));
}

#[tokio::test]
async fn list_players_unknown_team_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/teams/Nobody/players").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn player_stats_are_sorted_with_icons() {
    let app = test_app();
    let (status, body) = get_json(
        &app,
        "/api/teams/Dorans%20Independent%20Gamers/players/Oriented/stats",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team"], "Dorans Independent Gamers");
    assert_eq!(body["player"], "Oriented");

    let champions = body["champions"].as_array().unwrap();
    let names: Vec<&str> = champions
        .iter()
        .map(|c| c["Champion"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Kai'Sa", "Ahri", "Wukong", "Mystery Pick"]);

    let icons: Vec<&str> = champions
        .iter()
        .map(|c| c["ChampionIcon"].as_str().unwrap())
        .collect();
    assert_eq!(icons, vec!["Kaisa.png", "Ahri.png", "MonkeyKing.png", ""]);
    assert_eq!(champions[0]["Total Games"], "1,102");
}

#[tokio::test]
async fn player_stats_honor_sort_param() {
    let app = test_app();
    let (_, body) = get_json(
        &app,
        "/api/teams/Dorans%20Independent%20Gamers/players/Oriented/stats?sort=kda",
    )
    .await;

    let names: Vec<&str> = body["champions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["Champion"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Wukong", "Ahri", "Kai'Sa", "Mystery Pick"]);
}

#[tokio::test]
async fn player_stats_unknown_player_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/teams/Zephyr%20Theseus/players/Ghost/stats").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn malformed_export_is_a_500_data_error() {
    let app = app_with_data_dir(fixtures_dir().join("broken"));
    let (status, body) = get_json(&app, "/api/teams").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "DataError");
}

#[tokio::test]
async fn openapi_document_lists_api_paths() {
    let app = test_app();
    let (status, _, html) = get(&app, "/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/api/teams"));
}
