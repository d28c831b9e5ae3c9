pub mod team;

use axum::{routing::get, Router};
use crate::data::AppState;

/// Build the JSON API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/teams", get(team::list_teams))
        .route("/api/teams/{team}/players", get(team::list_players))
        .route("/api/teams/{team}/players/{player}/stats", get(team::get_player_stats))
}
