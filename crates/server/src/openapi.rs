use axum::Router;
use shared_types::{AppError, AppErrorKind, ChampionStats, Player, PlayerStatsResponse, TeamSummary};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::team::list_teams,
        rest::team::list_players,
        rest::team::get_player_stats,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        ChampionStats,
        Player,
        PlayerStatsResponse,
        TeamSummary,
        health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "teams", description = "Teams, rosters and champion statistics")
    ),
    info(
        title = "League Teams Viewer API",
        description = "Read-only JSON views of the exported team data"
    )
)]
pub struct ApiDoc;

/// Router serving the API reference at `/docs`.
pub fn docs_router() -> Router {
    Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
