use crate::errors::DataError;
use crate::game::batting_order::BattingSlot;
use crate::game::team::{GameTeam, InGame, Substitution};
use schema::{PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line on the lineup card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineupCardEntry {
    pub id: PlayerId,
    pub name: String,
    pub pos: Position,
    pub batting_order: Option<BattingSlot>,
    pub sub_index: Option<u32>,
}

impl From<InGame<'_>> for LineupCardEntry {
    fn from(in_game: InGame<'_>) -> Self {
        LineupCardEntry {
            id: in_game.player.id,
            name: in_game.player.name.clone(),
            pos: in_game.assignment.pos,
            batting_order: in_game.assignment.batting_order,
            sub_index: in_game.player.sub_index,
        }
    }
}

/// Snapshot of who is playing where, handed to box score and play-by-play writers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineupCard {
    pub team: String,
    pub designated_hitter: bool,
    pub batting_order: Vec<LineupCardEntry>,
    // Set only when the pitcher is not in the batting order
    pub pitcher: Option<LineupCardEntry>,
    pub substitutions: Vec<Substitution>,
}

impl LineupCard {
    pub fn from_team(team: &GameTeam) -> Self {
        let batting_order = BattingSlot::all()
            .filter_map(|slot| team.at_slot(slot))
            .map(LineupCardEntry::from)
            .collect();
        let pitcher = team
            .current_pitcher()
            .filter(|p| p.assignment.batting_order.is_none())
            .map(LineupCardEntry::from);

        LineupCard {
            team: team.abbrev.clone(),
            designated_hitter: team.dh,
            batting_order,
            pitcher,
            substitutions: team.substitutions().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        serde_json::to_string_pretty(self).map_err(|e| DataError::Parse {
            what: "lineup card".to_string(),
            message: e.to_string(),
        })
    }
}

impl fmt::Display for LineupCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.team)?;
        for entry in &self.batting_order {
            let slot = entry
                .batting_order
                .map(|s| s.to_string())
                .unwrap_or_default();
            writeln!(f, "  {:>1}. {:<24} {}", slot, entry.name, entry.pos)?;
        }
        if let Some(pitcher) = &self.pitcher {
            writeln!(f, "     {:<24} {}", pitcher.name, pitcher.pos)?;
        }
        Ok(())
    }
}
