//! Server-rendered HTML pages.
//!
//! Each page is a Dioxus component rendered to a string inside the shared
//! header and footer fragments.

pub mod error;
pub mod player;
pub mod team;
pub mod teams;

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use dioxus::prelude::*;
use shared_types::AppError;

use error::ErrorPage;

/// Path of a team page.
pub fn team_href(team: &str) -> String {
    format!("/team/{}", urlencoding::encode(team))
}

/// Path of a player's champion statistics page.
pub fn player_href(team: &str, player: &str) -> String {
    format!(
        "/team/{}/player/{}",
        urlencoding::encode(team),
        urlencoding::encode(player)
    )
}

/// Render a complete HTML page.
pub fn html_page(title: Option<&str>, body: Element) -> Html<String> {
    Html(shared_ui::render_page(title, body))
}

/// Error returned by page handlers; renders as an HTML error page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = StatusCode::from_u16(err.status_code_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, message = %err.message, "page render failed");
        } else {
            tracing::debug!(kind = %err.kind, message = %err.message, "page not served");
        }

        let heading = err.heading();
        // Internal details stay in the log.
        let message = if status.is_server_error() {
            "The team data could not be loaded. Please try again later.".to_string()
        } else {
            err.message.clone()
        };
        let page = html_page(
            Some(heading),
            rsx! {
                ErrorPage { code: status.as_u16(), heading: heading.to_string(), message }
            },
        );
        (status, page).into_response()
    }
}

/// Fallback for any unmatched route.
pub async fn not_found(uri: Uri) -> PageError {
    PageError(AppError::not_found(format!(
        "The page {} could not be found.",
        uri.path()
    )))
}
