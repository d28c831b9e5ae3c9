use axum::extract::{Path, Query, State};
use axum::response::Html;
use dioxus::prelude::*;
use serde::Deserialize;
use shared_types::{ChampionStats, StatsSort, ALL_SORTS};
use shared_ui::components::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    PageActions, PageHeader, PageSubtitle, PageTitle,
};

use super::{html_page, player_href, team_href, PageError};
use crate::data::AppState;

/// Query parameters for the champion table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
}

impl SortParams {
    pub fn order(&self) -> StatsSort {
        self.sort.as_deref().map(StatsSort::from_key).unwrap_or_default()
    }
}

/// A stats row with its icon resolved to a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionRow {
    pub stats: ChampionStats,
    pub icon_url: Option<String>,
}

/// Attach icon URLs to rows whose icon has already been resolved.
pub fn champion_rows(stats: Vec<ChampionStats>) -> Vec<ChampionRow> {
    stats
        .into_iter()
        .map(|stats| {
            let icon_url = (!stats.champion_icon.is_empty()).then(|| {
                format!("/images/champions/{}", urlencoding::encode(&stats.champion_icon))
            });
            ChampionRow { stats, icon_url }
        })
        .collect()
}

/// `GET /team/{team}/player/{player}`: champion statistics table.
pub async fn player_page(
    State(state): State<AppState>,
    Path((team, player)): Path<(String, String)>,
    Query(params): Query<SortParams>,
) -> Result<Html<String>, PageError> {
    let sort = params.order();
    let stats = state.data.ranked_player_stats(&team, &player, sort).await?;
    let rows = champion_rows(stats);

    tracing::debug!(team = %team, player = %player, rows = rows.len(), sort = sort.as_str(), "rendering player page");
    let title = format!("{player} - {team}");
    Ok(html_page(
        Some(&title),
        rsx! { PlayerStatsPage { team, player, rows, sort } },
    ))
}

#[component]
pub fn PlayerStatsPage(team: String, player: String, rows: Vec<ChampionRow>, sort: StatsSort) -> Element {
    let back_href = team_href(&team);
    let base_href = player_href(&team, &player);
    let count = rows.len();
    let noun = if count == 1 { "champion" } else { "champions" };
    let sort_links: Vec<(&'static str, &'static str, String)> = ALL_SORTS
        .iter()
        .map(|option| {
            let key = option.as_str();
            (key, option.display_name(), format!("{base_href}?sort={key}"))
        })
        .collect();

    rsx! {
        PageHeader {
            div {
                PageTitle { "{player}" }
                PageSubtitle { "{team} · {count} {noun}" }
            }
            PageActions {
                a { href: "{back_href}", "Back to {team}" }
            }
        }

        if rows.is_empty() {
            div { class: "empty-state",
                p { "No champion statistics recorded for this player yet." }
            }
        } else {
            div { class: "sort-links",
                span { "Sort by:" }
                for (key, label, href) in sort_links {
                    a {
                        key: "{key}",
                        class: if key == sort.as_str() { "active" } else { "" },
                        href: "{href}",
                        "{label}"
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "" }
                    DataTableColumn { "Champion" }
                    DataTableColumn { numeric: true, "Games" }
                    DataTableColumn { numeric: true, "Win Rate" }
                    DataTableColumn { numeric: true, "KDA" }
                    DataTableColumn { numeric: true, "CS" }
                    DataTableColumn { numeric: true, "Damage" }
                    DataTableColumn { numeric: true, "Gold" }
                    DataTableColumn { numeric: true, "Wins" }
                    DataTableColumn { numeric: true, "Losses" }
                }
                DataTableBody {
                    for row in rows.iter() {
                        ChampionStatsRow { key: "{row.stats.champion}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ChampionStatsRow(row: ChampionRow) -> Element {
    let s = &row.stats;
    let initial: String = s.champion.chars().next().map(String::from).unwrap_or_default();

    rsx! {
        DataTableRow {
            DataTableCell {
                if let Some(url) = &row.icon_url {
                    img { class: "champion-icon", src: "{url}", alt: "{s.champion}" }
                } else {
                    span { class: "icon-placeholder", "{initial}" }
                }
            }
            DataTableCell { "{s.champion}" }
            DataTableCell { numeric: true, "{s.total_games}" }
            DataTableCell { numeric: true, "{s.win_rate}" }
            DataTableCell { numeric: true, "{s.kda}" }
            DataTableCell { numeric: true, "{s.cs}" }
            DataTableCell { numeric: true, "{s.damage}" }
            DataTableCell { numeric: true, "{s.gold}" }
            DataTableCell { numeric: true, "{s.wins}" }
            DataTableCell { numeric: true, "{s.losses}" }
        }
    }
}
