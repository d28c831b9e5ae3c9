use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use shared_types::{AppError, Player, PlayerStatsResponse, StatsSort, TeamSummary};
use crate::data::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsParams {
    /// `games` (default), `winrate`, `kda` or `champion`.
    pub sort: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/teams
// ---------------------------------------------------------------------------

/// List all teams with their player counts.
#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "All teams", body = Vec<TeamSummary>),
        (status = 500, description = "Export data unreadable", body = AppError)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamSummary>>, AppError> {
    Ok(Json(state.data.team_summaries().await?))
}

// ---------------------------------------------------------------------------
// GET /api/teams/{team}/players
// ---------------------------------------------------------------------------

/// List a team's players and their accounts.
#[utoipa::path(
    get,
    path = "/api/teams/{team}/players",
    params(
        ("team" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Team roster", body = Vec<Player>),
        (status = 404, description = "Unknown team", body = AppError)
    ),
    tag = "teams"
)]
pub async fn list_players(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Vec<Player>>, AppError> {
    Ok(Json(state.data.team_players(&team).await?))
}

// ---------------------------------------------------------------------------
// GET /api/teams/{team}/players/{player}/stats
// ---------------------------------------------------------------------------

/// Champion statistics for a player, sorted and with icons resolved.
#[utoipa::path(
    get,
    path = "/api/teams/{team}/players/{player}/stats",
    params(
        ("team" = String, Path, description = "Team name"),
        ("player" = String, Path, description = "Player name"),
        StatsParams
    ),
    responses(
        (status = 200, description = "Champion statistics", body = PlayerStatsResponse),
        (status = 404, description = "Unknown team or player", body = AppError)
    ),
    tag = "teams"
)]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path((team, player)): Path<(String, String)>,
    Query(params): Query<StatsParams>,
) -> Result<Json<PlayerStatsResponse>, AppError> {
    let sort = params.sort.as_deref().map(StatsSort::from_key).unwrap_or_default();
    let champions = state.data.ranked_player_stats(&team, &player, sort).await?;

    Ok(Json(PlayerStatsResponse { team, player, champions }))
}
