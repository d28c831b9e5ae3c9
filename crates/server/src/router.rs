use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use shared_ui::stylesheet::{STYLESHEET, STYLESHEET_CONTENT_TYPE};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::data::AppState;
use crate::{health, openapi, pages, rest};

/// `GET /css/style.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, STYLESHEET_CONTENT_TYPE),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

/// Build the full application router: HTML pages, static assets, the JSON
/// API and its docs, with request tracing and request IDs.
pub fn app_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.images_dir);

    Router::new()
        .route("/", get(pages::teams::index))
        .route("/team/{team}", get(pages::team::team_page))
        .route("/team/{team}/player/{player}", get(pages::player::player_page))
        .route("/css/style.css", get(stylesheet))
        .route("/health", get(health::health_check))
        .merge(rest::api_router())
        .nest_service("/images", images)
        .fallback(pages::not_found)
        .with_state(state)
        .merge(openapi::docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
