use axum::extract::State;
use axum::response::Html;
use dioxus::prelude::*;
use shared_types::TeamSummary;
use shared_ui::components::{
    Badge, BadgeVariant, CardDescription, CardHeader, CardTitle, LinkCard, PageHeader,
    PageSubtitle, PageTitle,
};

use super::{html_page, team_href, PageError};
use crate::data::AppState;

/// `GET /`: grid of all teams.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let teams = state.data.team_summaries().await?;
    tracing::debug!(count = teams.len(), "rendering team index");
    Ok(html_page(None, rsx! { TeamIndexPage { teams } }))
}

#[component]
pub fn TeamIndexPage(teams: Vec<TeamSummary>) -> Element {
    let count = teams.len();
    let noun = if count == 1 { "team" } else { "teams" };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Teams" }
                PageSubtitle { "{count} {noun}" }
            }
        }

        if teams.is_empty() {
            div { class: "empty-state",
                p { "No teams found. Run the data export to populate the viewer." }
            }
        } else {
            div { class: "team-grid",
                for team in teams.iter() {
                    TeamCard { key: "{team.name}", team: team.clone() }
                }
            }
        }
    }
}

#[component]
fn TeamCard(team: TeamSummary) -> Element {
    let href = team_href(&team.name);
    let players = match team.player_count {
        1 => "1 player".to_string(),
        n => format!("{n} players"),
    };

    rsx! {
        LinkCard { href, class: "team-card",
            CardHeader {
                CardTitle { "{team.name}" }
                CardDescription { "View roster and champion pools" }
            }
            Badge { variant: BadgeVariant::Secondary, "{players}" }
        }
    }
}
