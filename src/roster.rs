//! Lookup from player id to the in-game player record.

use crate::errors::InvalidRosterError;
use crate::player::GamePlayer;
use schema::{PlayerId, PlayerTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every game-eligible player on one side, keyed by id.
///
/// Built once before first pitch. The only mutation afterwards is the lineup
/// bookkeeping stamped onto the records (`sub_index`, `pos`, `batting_order`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RosterIndex {
    players: BTreeMap<PlayerId, GamePlayer>,
}

impl RosterIndex {
    pub fn new(players: impl IntoIterator<Item = GamePlayer>) -> Result<Self, InvalidRosterError> {
        let mut index = BTreeMap::new();
        for player in players {
            let id = player.id;
            if index.insert(id, player).is_some() {
                return Err(InvalidRosterError::DuplicatePlayerId(id));
            }
        }
        Ok(RosterIndex { players: index })
    }

    pub fn from_templates(templates: &[PlayerTemplate]) -> Result<Self, InvalidRosterError> {
        Self::new(templates.iter().map(GamePlayer::from))
    }

    /// Add a player after construction. Ids stay unique.
    pub fn insert(&mut self, player: GamePlayer) -> Result<(), InvalidRosterError> {
        if self.players.contains_key(&player.id) {
            return Err(InvalidRosterError::DuplicatePlayerId(player.id));
        }
        self.players.insert(player.id, player);
        Ok(())
    }

    pub fn get(&self, id: PlayerId) -> Option<&GamePlayer> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut GamePlayer> {
        self.players.get_mut(&id)
    }

    /// Like `get`, but a missing id is a roster error.
    pub fn require(&self, id: PlayerId) -> Result<&GamePlayer, InvalidRosterError> {
        self.get(id).ok_or(InvalidRosterError::UnknownPlayer(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GamePlayer> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
