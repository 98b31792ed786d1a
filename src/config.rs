//! Per-game settings, read from RON.

use crate::errors::DataError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Pitchers are replaced in the batting order by a designated hitter.
    pub designated_hitter: bool,
    /// Seed for generated exhibition rosters and call-ups.
    pub seed: u64,
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            designated_hitter: false,
            seed: 0,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, DataError> {
        ron::from_str(text).map_err(|e| DataError::Parse {
            what: "game config".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&text)
    }
}
