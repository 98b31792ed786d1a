use crate::errors::InvalidRosterError;
use crate::game::batting_order::{BattingSlot, NUM_BATTERS_PER_SIDE};
use crate::game::lineup::Assignments;
use crate::roster::RosterIndex;
use schema::{PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Lookups derived from the assignments: who plays each position and who bats in each slot.
///
/// Also owns the arrival counter behind `GamePlayer::sub_index`, so every team
/// instance numbers its own players from 0.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PositionBattingIndex {
    by_pos: BTreeMap<Position, PlayerId>,
    by_batting_order: [Option<PlayerId>; NUM_BATTERS_PER_SIDE],
    next_sub_index: u32,
}

impl PositionBattingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive both views from `assignments` and stamp the player records.
    ///
    /// Players seen for the first time get the next sub index; players who
    /// already have one keep it.
    pub fn rebuild(
        &mut self,
        assignments: &Assignments,
        roster: &mut RosterIndex,
    ) -> Result<(), InvalidRosterError> {
        self.by_pos.clear();
        self.by_batting_order = [None; NUM_BATTERS_PER_SIDE];

        for entry in assignments.values() {
            let player = roster
                .get_mut(entry.player_id)
                .ok_or(InvalidRosterError::UnknownPlayer(entry.player_id))?;

            self.by_pos.insert(entry.pos, entry.player_id);
            if let Some(slot) = entry.batting_order {
                self.by_batting_order[slot.index()] = Some(entry.player_id);
                player.batting_order = Some(slot);
            }

            if player.sub_index.is_none() {
                player.sub_index = Some(self.next_sub_index);
                debug!(player = %player.id, sub_index = self.next_sub_index, "player entered game");
                self.next_sub_index += 1;
            }

            // Only the latest position is kept
            player.pos = Some(entry.pos);
        }

        Ok(())
    }

    pub fn at_position(&self, pos: Position) -> Option<PlayerId> {
        self.by_pos.get(&pos).copied()
    }

    pub fn at_slot(&self, slot: BattingSlot) -> Option<PlayerId> {
        self.by_batting_order[slot.index()]
    }

    /// How many distinct players have appeared so far.
    pub fn players_appeared(&self) -> u32 {
        self.next_sub_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::lineup::PlayerInGame;
    use crate::player::GamePlayer;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn roster(ids: &[u32]) -> RosterIndex {
        RosterIndex::new(
            ids.iter()
                .map(|&id| GamePlayer::new(PlayerId(id), format!("Player {}", id), HashMap::new())),
        )
        .unwrap()
    }

    fn entry(id: u32, slot: Option<usize>, pos: Position) -> (PlayerId, PlayerInGame) {
        (
            PlayerId(id),
            PlayerInGame {
                player_id: PlayerId(id),
                batting_order: slot.map(|s| BattingSlot::new(s).unwrap()),
                pos,
            },
        )
    }

    #[test]
    fn test_rebuild_populates_both_views() {
        let mut roster = roster(&[1, 2]);
        let assignments: Assignments = [
            entry(1, None, Position::Pitcher),
            entry(2, Some(3), Position::Catcher),
        ]
        .into_iter()
        .collect();

        let mut index = PositionBattingIndex::new();
        index.rebuild(&assignments, &mut roster).unwrap();

        assert_eq!(index.at_position(Position::Pitcher), Some(PlayerId(1)));
        assert_eq!(index.at_position(Position::Catcher), Some(PlayerId(2)));
        assert_eq!(index.at_slot(BattingSlot::new(3).unwrap()), Some(PlayerId(2)));
        assert_eq!(index.at_slot(BattingSlot::LEADOFF), None);

        let catcher = roster.get(PlayerId(2)).unwrap();
        assert_eq!(catcher.pos, Some(Position::Catcher));
        assert_eq!(catcher.batting_order, BattingSlot::new(3).ok());
        // A pitcher who does not bat never gets a batting slot stamped
        assert_eq!(roster.get(PlayerId(1)).unwrap().batting_order, None);
    }

    #[test]
    fn test_sub_index_follows_id_order_and_starts_at_zero() {
        let mut roster = roster(&[5, 2, 9]);
        let assignments: Assignments = [
            entry(9, Some(0), Position::LeftField),
            entry(5, Some(1), Position::RightField),
            entry(2, None, Position::Pitcher),
        ]
        .into_iter()
        .collect();

        let mut index = PositionBattingIndex::new();
        index.rebuild(&assignments, &mut roster).unwrap();

        let sub = |id| roster.get(PlayerId(id)).unwrap().sub_index;
        assert_eq!((sub(2), sub(5), sub(9)), (Some(0), Some(1), Some(2)));
        assert_eq!(index.players_appeared(), 3);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut roster = roster(&[1, 2]);
        let assignments: Assignments = [
            entry(1, Some(8), Position::Pitcher),
            entry(2, Some(0), Position::Shortstop),
        ]
        .into_iter()
        .collect();

        let mut index = PositionBattingIndex::new();
        index.rebuild(&assignments, &mut roster).unwrap();
        let (first_index, first_roster) = (index.clone(), roster.clone());

        index.rebuild(&assignments, &mut roster).unwrap();
        assert_eq!(index, first_index);
        assert_eq!(roster, first_roster);
    }

    #[test]
    fn test_rebuild_rejects_unknown_player() {
        let mut roster = roster(&[1]);
        let assignments: Assignments = [entry(4, None, Position::Pitcher)].into_iter().collect();

        let result = PositionBattingIndex::new().rebuild(&assignments, &mut roster);
        assert_eq!(result, Err(InvalidRosterError::UnknownPlayer(PlayerId(4))));
    }
}
