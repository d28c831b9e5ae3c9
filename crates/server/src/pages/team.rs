use axum::extract::{Path, State};
use axum::response::Html;
use dioxus::prelude::*;
use shared_types::Player;
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, PageActions,
    PageHeader, PageSubtitle, PageTitle,
};

use super::{html_page, player_href, PageError};
use crate::data::AppState;

/// OP.GG champions page for an account in `Name-TAG` form.
pub fn opgg_champions_url(account: &str) -> String {
    format!(
        "https://www.op.gg/summoners/euw/{}/champions",
        urlencoding::encode(account)
    )
}

/// A roster entry plus how many champion rows the export holds for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player: Player,
    pub champion_count: usize,
}

/// `GET /team/{team}`: the team's players and their accounts.
pub async fn team_page(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Html<String>, PageError> {
    let players = state.data.team_players(&team).await?;
    let stats = state.data.team_stats(&team).await?;

    let roster: Vec<RosterEntry> = players
        .into_iter()
        .map(|player| {
            let champion_count = stats.get(&player.name).map(Vec::len).unwrap_or(0);
            RosterEntry { player, champion_count }
        })
        .collect();

    tracing::debug!(team = %team, players = roster.len(), "rendering team page");
    let title = team.clone();
    Ok(html_page(Some(&title), rsx! { TeamPage { team, roster } }))
}

#[component]
pub fn TeamPage(team: String, roster: Vec<RosterEntry>) -> Element {
    let count = roster.len();
    let noun = if count == 1 { "player" } else { "players" };

    rsx! {
        PageHeader {
            div {
                PageTitle { "{team}" }
                PageSubtitle { "{count} {noun}" }
            }
            PageActions {
                a { href: "/", "All teams" }
            }
        }

        if roster.is_empty() {
            div { class: "empty-state",
                p { "No players recorded for this team yet." }
            }
        } else {
            div { class: "player-grid",
                for entry in roster.iter() {
                    PlayerCard { key: "{entry.player.name}", team: team.clone(), entry: entry.clone() }
                }
            }
        }
    }
}

#[component]
fn PlayerCard(team: String, entry: RosterEntry) -> Element {
    let stats_href = player_href(&team, &entry.player.name);
    let champions = match entry.champion_count {
        0 => "No stats yet".to_string(),
        1 => "1 champion".to_string(),
        n => format!("{n} champions"),
    };
    let badge_variant = if entry.champion_count == 0 {
        BadgeVariant::Outline
    } else {
        BadgeVariant::Primary
    };

    rsx! {
        Card { class: "player-card",
            CardHeader {
                CardTitle { "{entry.player.name}" }
            }
            CardContent {
                if entry.player.accounts.is_empty() {
                    p { class: "card-description", "No accounts listed." }
                } else {
                    ul { class: "account-list",
                        for account in entry.player.accounts.iter() {
                            li { key: "{account}",
                                a {
                                    href: opgg_champions_url(account),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{account}"
                                }
                            }
                        }
                    }
                }
            }
            CardFooter {
                Badge { variant: badge_variant, "{champions}" }
                " "
                a { href: "{stats_href}", "Champion stats" }
            }
        }
    }
}
