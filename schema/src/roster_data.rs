use crate::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable identifier of a player on a team's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A roster entry as it is authored in team data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTemplate {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub injured: bool,
    pub ratings: HashMap<Position, f32>, // position -> overall rating when playing there
}

/// One batting-order slot of a lineup depth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineupEntry {
    /// A position player batting in this slot and fielding `pos`.
    Batter { id: PlayerId, pos: Position },
    /// Placeholder for whoever starts on the mound.
    Pitcher,
}

impl LineupEntry {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            LineupEntry::Batter { id, .. } => Some(*id),
            LineupEntry::Pitcher => None,
        }
    }
}

/// The depth chart a team brings into a game.
///
/// Lineups and defensive orders come in two flavours because the pitcher bats
/// only when the designated hitter rule is off.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepthChart {
    pub lineup_dh: Vec<LineupEntry>,
    pub lineup_no_dh: Vec<LineupEntry>,
    pub defense_dh: Vec<PlayerId>,    // starters first, then the bench
    pub defense_no_dh: Vec<PlayerId>, // starters first, then the bench
    pub pitchers: Vec<PlayerId>,      // starting rotation first
}

impl DepthChart {
    pub fn lineup(&self, dh: bool) -> &[LineupEntry] {
        if dh {
            &self.lineup_dh
        } else {
            &self.lineup_no_dh
        }
    }

    pub fn defense(&self, dh: bool) -> &[PlayerId] {
        if dh {
            &self.defense_dh
        } else {
            &self.defense_no_dh
        }
    }
}

/// A complete team definition: who is available and how they should be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTemplate {
    pub abbrev: String,
    pub name: String,
    pub players: Vec<PlayerTemplate>,
    pub depth: DepthChart,
}
