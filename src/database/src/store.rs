use chrono::{NaiveDateTime, Utc};
use engine::League;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed league file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u32),

    #[error("invalid league: {0}")]
    InvalidLeague(String),
}

/// On-disk envelope. Teams reference players by id, so the graph has no cycles.
#[derive(Serialize, Deserialize)]
struct SavedLeague {
    format_version: u32,
    saved_at: NaiveDateTime,
    league: League,
}

pub struct LeagueStore;

impl LeagueStore {
    pub fn save(path: &Path, league: &League) -> Result<(), StoreError> {
        let json = Self::to_json(league)?;

        fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("💾 saved league {} to {}", league.name, path.display());

        Ok(())
    }

    pub fn load(path: &Path) -> Result<League, StoreError> {
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let league = Self::from_json(&json)?;

        info!(
            "📂 loaded league {} from {}: {} teams, {} players",
            league.name,
            path.display(),
            league.teams.len(),
            league.players.len()
        );

        Ok(league)
    }

    pub fn to_json(league: &League) -> Result<String, StoreError> {
        let saved = SavedLeague {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now().naive_utc(),
            league: league.clone(),
        };

        Ok(serde_json::to_string_pretty(&saved)?)
    }

    /// Parses, checks every id reference and brings values back into range.
    pub fn from_json(json: &str) -> Result<League, StoreError> {
        let saved: SavedLeague = serde_json::from_str(json)?;

        if saved.format_version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(saved.format_version));
        }

        let mut league = saved.league;

        league.validate().map_err(StoreError::InvalidLeague)?;
        league.normalize();

        debug!("league saved at {} restored", saved.saved_at);

        Ok(league)
    }
}
