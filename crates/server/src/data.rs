use serde::de::DeserializeOwned;
use shared_types::{
    AppError, ChampionStats, IconIndex, Player, PlayersByTeam, StatsByTeam, StatsSort,
    TeamSummary,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const TEAMS_FILE: &str = "teams.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const STATS_FILE: &str = "stats.json";
pub const CHAMPION_ICONS_FILE: &str = "champion_icons.json";
pub const CHAMPION_MAPPING_FILE: &str = "champion_mapping.json";

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub data: DataStore,
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            data: DataStore::new(data_dir),
            images_dir: images_dir.into(),
        }
    }
}

/// Read-only access to the JSON files the export step writes.
///
/// Files are re-read on every call so a fresh export is visible without a
/// restart. A missing file reads as an empty collection; a file that exists
/// but does not parse is a `DataError`.
#[derive(Clone, Debug)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_json<T>(&self, file: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "export file missing, treating as empty");
                return Ok(T::default());
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read export file");
                return Err(AppError::internal(format!("Could not read {file}")));
            }
        };

        let parsed: T = serde_json::from_str(&contents).inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "malformed export file");
        })?;
        Ok(parsed)
    }

    /// Team names in export order.
    pub async fn teams(&self) -> Result<Vec<String>, AppError> {
        self.read_json(TEAMS_FILE).await
    }

    pub async fn players(&self) -> Result<PlayersByTeam, AppError> {
        self.read_json(PLAYERS_FILE).await
    }

    pub async fn stats(&self) -> Result<StatsByTeam, AppError> {
        self.read_json(STATS_FILE).await
    }

    pub async fn icon_index(&self) -> Result<IconIndex, AppError> {
        Ok(IconIndex {
            icons: self.read_json(CHAMPION_ICONS_FILE).await?,
            mapping: self.read_json(CHAMPION_MAPPING_FILE).await?,
        })
    }

    /// Teams with their player counts.
    ///
    /// Order follows `teams.json`; if that file is missing or empty the
    /// teams named in `players.json` are listed alphabetically instead.
    pub async fn team_summaries(&self) -> Result<Vec<TeamSummary>, AppError> {
        let players = self.players().await?;
        let mut names = self.teams().await?;
        if names.is_empty() {
            names = players.keys().cloned().collect();
            names.sort();
        }

        Ok(names
            .into_iter()
            .map(|name| {
                let player_count = players.get(&name).map(Vec::len).unwrap_or(0);
                TeamSummary { name, player_count }
            })
            .collect())
    }

    /// Players of one team, or `NotFound` if the team is unknown.
    pub async fn team_players(&self, team: &str) -> Result<Vec<Player>, AppError> {
        let mut players = self.players().await?;
        if let Some(roster) = players.remove(team) {
            return Ok(roster);
        }
        if self.teams().await?.iter().any(|t| t == team) {
            return Ok(Vec::new());
        }
        Err(AppError::not_found(format!("No team named '{team}'")))
    }

    /// Champion rows per player for one team. Missing entries read as empty.
    pub async fn team_stats(&self, team: &str) -> Result<HashMap<String, Vec<ChampionStats>>, AppError> {
        Ok(self.stats().await?.remove(team).unwrap_or_default())
    }

    /// Champion rows for one player, in export order.
    ///
    /// The player must appear either on the team's roster or in the stats
    /// export; otherwise the result is `NotFound`.
    pub async fn player_stats(&self, team: &str, player: &str) -> Result<Vec<ChampionStats>, AppError> {
        let mut team_stats = self.team_stats(team).await?;
        if let Some(rows) = team_stats.remove(player) {
            return Ok(rows);
        }

        let roster = self.team_players(team).await?;
        if roster.iter().any(|p| p.name == player) {
            Ok(Vec::new())
        } else {
            Err(AppError::not_found(format!(
                "No player named '{player}' on team '{team}'"
            )))
        }
    }

    /// A player's champion rows in the requested order, with icons filled in.
    pub async fn ranked_player_stats(
        &self,
        team: &str,
        player: &str,
        sort: StatsSort,
    ) -> Result<Vec<ChampionStats>, AppError> {
        let mut rows = self.player_stats(team, player).await?;
        let icons = self.icon_index().await?;
        sort.apply(&mut rows);
        icons.fill_icons(&mut rows);
        Ok(rows)
    }
}
