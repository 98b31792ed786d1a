use crate::game::batting_order::BattingSlot;
use ordered_float::OrderedFloat;
use schema::{PlayerId, PlayerTemplate, Position};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// A player as the game simulation sees them for the duration of one game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
    pub injured: bool,

    // Overall rating at each position the player has been evaluated at.
    pub ratings: HashMap<Position, f32>,

    // Order in which the player entered the game. Set once, never reassigned.
    pub sub_index: Option<u32>,

    // Latest position and batting slot. Earlier ones are not kept.
    pub pos: Option<Position>,
    pub batting_order: Option<BattingSlot>,
}

impl GamePlayer {
    pub fn new(id: PlayerId, name: impl Into<String>, ratings: HashMap<Position, f32>) -> Self {
        GamePlayer {
            id,
            name: name.into(),
            injured: false,
            ratings,
            sub_index: None,
            pos: None,
            batting_order: None,
        }
    }

    /// Rating at `pos`, 0 if the player was never rated there.
    pub fn rating_at(&self, pos: Position) -> f32 {
        self.ratings.get(&pos).copied().unwrap_or(0.0)
    }

    pub fn has_appeared(&self) -> bool {
        self.sub_index.is_some()
    }
}

impl From<&PlayerTemplate> for GamePlayer {
    fn from(template: &PlayerTemplate) -> Self {
        GamePlayer {
            injured: template.injured,
            ..GamePlayer::new(template.id, template.name.clone(), template.ratings.clone())
        }
    }
}

/// Scores how well a player would play a position.
/// Lineup decisions only ever compare scores, so any monotone scale works.
pub trait PositionRating {
    fn rate(&self, player: &GamePlayer, pos: Position) -> f32;

    /// Sort key for bench candidates: healthy before injured, then best rating first.
    fn bench_key(&self, player: &GamePlayer, pos: Position) -> (bool, Reverse<OrderedFloat<f32>>) {
        (player.injured, Reverse(OrderedFloat(self.rate(player, pos))))
    }
}

/// Uses the ratings carried on the player record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredRatings;

impl PositionRating for StoredRatings {
    fn rate(&self, player: &GamePlayer, pos: Position) -> f32 {
        player.rating_at(pos)
    }
}
