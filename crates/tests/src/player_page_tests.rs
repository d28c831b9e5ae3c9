use axum::http::StatusCode;

use crate::common::*;

const ORIENTED: &str = "/team/Dorans%20Independent%20Gamers/player/Oriented";

#[tokio::test]
async fn player_page_renders_champion_table() {
    let app = test_app();
    let (status, _, html) = get(&app, ORIENTED).await;

    assert_eq!(status, StatusCode::OK);
    assert_full_page(&html);
    assert!(html.contains("<title>Oriented - Dorans Independent Gamers</title>"));
    assert!(html.contains("<table"));
    assert!(html.contains("4 champions"));
    assert!(html.contains("24,310"));
    assert!(html.contains("3.10:1"));
}

#[tokio::test]
async fn default_order_is_most_played_first() {
    let app = test_app();
    let (_, _, html) = get(&app, ORIENTED).await;

    // Kai'Sa has 1,102 games and comes before Ahri (48) and Wukong (7).
    let kaisa = position(&html, "/images/champions/Kaisa.png");
    let ahri = position(&html, "/images/champions/Ahri.png");
    let wukong = position(&html, "/images/champions/MonkeyKing.png");
    assert!(kaisa < ahri && ahri < wukong);
}

#[tokio::test]
async fn win_rate_sort_reorders_rows() {
    let app = test_app();
    let (status, _, html) = get(&app, &format!("{ORIENTED}?sort=winrate")).await;

    assert_eq!(status, StatusCode::OK);
    let wukong = position(&html, "/images/champions/MonkeyKing.png");
    let ahri = position(&html, "/images/champions/Ahri.png");
    let kaisa = position(&html, "/images/champions/Kaisa.png");
    assert!(wukong < ahri && ahri < kaisa);
}

#[tokio::test]
async fn champion_sort_is_alphabetical() {
    let app = test_app();
    let (_, _, html) = get(&app, &format!("{ORIENTED}?sort=champion")).await;

    let ahri = position(&html, "/images/champions/Ahri.png");
    let kaisa = position(&html, "/images/champions/Kaisa.png");
    let wukong = position(&html, "/images/champions/MonkeyKing.png");
    assert!(ahri < kaisa && kaisa < wukong);
}

#[tokio::test]
async fn unknown_sort_falls_back_to_games() {
    let app = test_app();
    let (status, _, sorted) = get(&app, &format!("{ORIENTED}?sort=bogus")).await;
    let (_, _, default) = get(&app, ORIENTED).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted, default);
}

#[tokio::test]
async fn unresolvable_icon_gets_placeholder() {
    let app = test_app();
    let (_, _, html) = get(&app, ORIENTED).await;

    assert!(html.contains("icon-placeholder"));
    assert!(html.contains("Mystery Pick"));
}

#[tokio::test]
async fn rostered_player_without_stats_renders_empty() {
    let app = test_app();
    let (status, _, html) = get(&app, "/team/Zephyr%20Theseus/player/Kestrel").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No champion statistics recorded for this player yet."));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn unknown_player_is_an_html_404() {
    let app = test_app();
    let (status, _, html) = get(&app, "/team/Zephyr%20Theseus/player/Ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_full_page(&html);
    assert!(html.contains("No player named"));
}

#[tokio::test]
async fn page_and_api_agree_on_row_order() {
    let app = test_app();
    for sort in ["games", "winrate", "kda", "champion"] {
        let (_, _, html) = get(&app, &format!("{ORIENTED}?sort={sort}")).await;
        let (_, body) = get_json(
            &app,
            &format!("/api/teams/Dorans%20Independent%20Gamers/players/Oriented/stats?sort={sort}"),
        )
        .await;

        let api_icons: Vec<String> = body["champions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c["ChampionIcon"].as_str())
            .filter(|icon| !icon.is_empty())
            .map(|icon| format!("/images/champions/{icon}"))
            .collect();

        let positions: Vec<usize> = api_icons.iter().map(|url| position(&html, url)).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted, "row order differs for sort={sort}");
    }
}
