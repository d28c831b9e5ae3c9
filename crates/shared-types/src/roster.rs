use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Export file shapes
// ---------------------------------------------------------------------------

/// A player and the ranked accounts they play on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<String>,
}

/// `players.json`: team name to its players, in export order.
pub type PlayersByTeam = HashMap<String, Vec<Player>>;

/// `stats.json`: team name to player name to aggregated champion rows.
pub type StatsByTeam = HashMap<String, HashMap<String, Vec<ChampionStats>>>;

/// One aggregated champion row for a player.
///
/// The export writes every value as a display string (e.g. `"1,204"` or
/// `"56%"`); numeric accessors parse those on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChampionStats {
    #[serde(rename = "Champion", default, deserialize_with = "display_string")]
    pub champion: String,
    #[serde(rename = "ChampionIcon", default, deserialize_with = "display_string")]
    pub champion_icon: String,
    #[serde(rename = "Total Games", default, deserialize_with = "display_string")]
    pub total_games: String,
    #[serde(rename = "Win Rate", default, deserialize_with = "display_string")]
    pub win_rate: String,
    #[serde(rename = "KDA", default, deserialize_with = "display_string")]
    pub kda: String,
    #[serde(rename = "CS", default, deserialize_with = "display_string")]
    pub cs: String,
    #[serde(rename = "Damage", default, deserialize_with = "display_string")]
    pub damage: String,
    #[serde(rename = "Gold", default, deserialize_with = "display_string")]
    pub gold: String,
    #[serde(rename = "Wins", default, deserialize_with = "display_string")]
    pub wins: String,
    #[serde(rename = "Losses", default, deserialize_with = "display_string")]
    pub losses: String,
}

/// Accept strings, numbers or null for a display field.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Parse the leading number of a display string, ignoring thousands
/// separators and anything after the number (`"%"`, `":1"`, `" KDA"`).
fn leading_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let end = cleaned
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(cleaned.len());
    cleaned[..end].parse().ok()
}

impl ChampionStats {
    /// Total games played, `0` when the field is blank or unparseable.
    pub fn games(&self) -> u32 {
        leading_number(&self.total_games)
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32)
            .unwrap_or(0)
    }

    /// Win rate as a percentage value (`"56%"` -> `56.0`).
    pub fn win_rate_value(&self) -> f64 {
        leading_number(&self.win_rate).unwrap_or(0.0)
    }

    /// KDA ratio (`"3.21:1"` -> `3.21`).
    pub fn kda_value(&self) -> f64 {
        leading_number(&self.kda).unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a player's champion table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsSort {
    #[default]
    Games,
    WinRate,
    Kda,
    Champion,
}

/// All sort orders in the order they are offered in the UI.
pub const ALL_SORTS: &[StatsSort] = &[
    StatsSort::Games,
    StatsSort::WinRate,
    StatsSort::Kda,
    StatsSort::Champion,
];

impl StatsSort {
    /// Query-string key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsSort::Games => "games",
            StatsSort::WinRate => "winrate",
            StatsSort::Kda => "kda",
            StatsSort::Champion => "champion",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            StatsSort::Games => "Games",
            StatsSort::WinRate => "Win Rate",
            StatsSort::Kda => "KDA",
            StatsSort::Champion => "Champion",
        }
    }

    /// Parse a query-string key, falling back to `Games`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "winrate" => StatsSort::WinRate,
            "kda" => StatsSort::Kda,
            "champion" => StatsSort::Champion,
            _ => StatsSort::Games,
        }
    }

    /// Order rows in place. Numeric columns sort descending, names ascending.
    /// Ties fall back to champion name so the output is stable.
    pub fn apply(&self, rows: &mut [ChampionStats]) {
        let by_name = |a: &ChampionStats, b: &ChampionStats| {
            a.champion.to_lowercase().cmp(&b.champion.to_lowercase())
        };
        match self {
            StatsSort::Games => rows.sort_by(|a, b| b.games().cmp(&a.games()).then(by_name(a, b))),
            StatsSort::WinRate => rows.sort_by(|a, b| {
                b.win_rate_value()
                    .partial_cmp(&a.win_rate_value())
                    .unwrap_or(Ordering::Equal)
                    .then(by_name(a, b))
            }),
            StatsSort::Kda => rows.sort_by(|a, b| {
                b.kda_value()
                    .partial_cmp(&a.kda_value())
                    .unwrap_or(Ordering::Equal)
                    .then(by_name(a, b))
            }),
            StatsSort::Champion => rows.sort_by(by_name),
        }
    }
}

// ---------------------------------------------------------------------------
// Champion icons
// ---------------------------------------------------------------------------

/// Normalize a champion name for icon lookup: ASCII alphanumerics only,
/// lowercased. `"Kai'Sa"` and `"Dr. Mundo"` become `"kaisa"` and `"drmundo"`.
pub fn normalize_champion_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Lookup tables written next to the stats by the export step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconIndex {
    /// `champion_icons.json`: display name to icon file name.
    pub icons: HashMap<String, String>,
    /// `champion_mapping.json`: normalized name to champion id.
    pub mapping: HashMap<String, String>,
}

impl IconIndex {
    /// Icon file name for a stats row, if one can be found.
    ///
    /// An icon already recorded on the row wins, then an exact display-name
    /// match, then a normalized-name match.
    pub fn resolve(&self, stats: &ChampionStats) -> Option<String> {
        if !stats.champion_icon.is_empty() {
            return Some(stats.champion_icon.clone());
        }
        if let Some(icon) = self.icons.get(&stats.champion) {
            return Some(icon.clone());
        }
        self.mapping
            .get(&normalize_champion_name(&stats.champion))
            .map(|id| format!("{id}.png"))
    }

    /// Record the resolved icon on every row that lacks one.
    pub fn fill_icons(&self, rows: &mut [ChampionStats]) {
        for row in rows.iter_mut() {
            if let Some(icon) = self.resolve(row) {
                row.champion_icon = icon;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// API response DTOs
// ---------------------------------------------------------------------------

/// A team as listed on the index page and `/api/teams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeamSummary {
    pub name: String,
    pub player_count: usize,
}

/// A player's champion table with icons resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlayerStatsResponse {
    pub team: String,
    pub player: String,
    pub champions: Vec<ChampionStats>,
}
