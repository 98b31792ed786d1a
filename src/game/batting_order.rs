use crate::errors::InvariantViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hitters in a batting order, with or without the DH.
pub const NUM_BATTERS_PER_SIDE: usize = 9;

/// A validated index into the batting order, always in `0..NUM_BATTERS_PER_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BattingSlot(u8);

impl BattingSlot {
    pub const LEADOFF: BattingSlot = BattingSlot(0);
    pub const LAST: BattingSlot = BattingSlot(NUM_BATTERS_PER_SIDE as u8 - 1);

    pub fn new(index: usize) -> Result<Self, InvariantViolation> {
        if index < NUM_BATTERS_PER_SIDE {
            Ok(BattingSlot(index as u8))
        } else {
            Err(InvariantViolation::BattingSlotOutOfRange(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The slot that bats after this one, wrapping from the last hitter to the leadoff.
    pub fn next(self) -> Self {
        BattingSlot(((self.index() + 1) % NUM_BATTERS_PER_SIDE) as u8)
    }

    /// The slot that batted before this one, wrapping from the leadoff to the last hitter.
    pub fn prev(self) -> Self {
        if self == Self::LEADOFF {
            Self::LAST
        } else {
            BattingSlot(self.0 - 1)
        }
    }

    pub fn all() -> impl Iterator<Item = BattingSlot> {
        (0..NUM_BATTERS_PER_SIDE as u8).map(BattingSlot)
    }
}

impl TryFrom<usize> for BattingSlot {
    type Error = InvariantViolation;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        BattingSlot::new(index)
    }
}

impl From<BattingSlot> for usize {
    fn from(slot: BattingSlot) -> usize {
        slot.index()
    }
}

impl fmt::Display for BattingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Scorebooks number the order from 1
        write!(f, "{}", self.index() + 1)
    }
}
