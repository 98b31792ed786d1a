use crate::game::batting_order::BattingSlot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tracks which batting slot is at the plate.
///
/// Starts out before the leadoff hitter; after that it only ever cycles around
/// the nine slots.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtBatCursor {
    at_bat: Option<BattingSlot>,
}

impl AtBatCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot currently batting, `None` before the first plate appearance.
    pub fn current(&self) -> Option<BattingSlot> {
        self.at_bat
    }

    /// Slot due up after the current one. Before the game begins that is the leadoff hitter.
    pub fn on_deck(&self) -> BattingSlot {
        self.at_bat.map_or(BattingSlot::LEADOFF, BattingSlot::next)
    }

    pub fn has_started(&self) -> bool {
        self.at_bat.is_some()
    }

    pub fn advance(&mut self) -> BattingSlot {
        let next = self.on_deck();
        debug!(from = ?self.at_bat, to = %next, "advance to next batter");
        self.at_bat = Some(next);
        next
    }

    /// Undo an `advance`. Stepping back from the start lands on the last slot.
    pub fn retreat(&mut self) -> BattingSlot {
        let prev = self.at_bat.map_or(BattingSlot::LAST, BattingSlot::prev);
        debug!(from = ?self.at_bat, to = %prev, "move back to previous batter");
        self.at_bat = Some(prev);
        prev
    }
}
