//! Starting lineup construction.
//!
//! The starting pitcher is placed first. Each batting-order slot of the depth
//! chart is then filled in order, and a player who is already placed (listed
//! twice, or the pitcher listed as a fielder) is swapped for the best
//! available bench player at that position.

use crate::errors::{
    InsufficientRosterError, InvalidRosterError, InvariantViolation, LineupResult,
};
use crate::game::batting_order::{BattingSlot, NUM_BATTERS_PER_SIDE};
use crate::player::PositionRating;
use crate::roster::RosterIndex;
use schema::{DepthChart, LineupEntry, PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Where one player currently is in the game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInGame {
    pub player_id: PlayerId,
    // None for a pitcher who does not bat
    pub batting_order: Option<BattingSlot>,
    pub pos: Position,
}

/// Everyone currently in the game for one side, keyed by player id.
pub type Assignments = BTreeMap<PlayerId, PlayerInGame>;

/// Pick today's starter: the first healthy arm in the rotation, or the first
/// listed one if the whole staff is hurt.
pub fn select_starting_pitcher(
    pitchers: &[PlayerId],
    roster: &RosterIndex,
) -> Result<PlayerId, InvalidRosterError> {
    let first = *pitchers.first().ok_or(InvalidRosterError::NoPitchers)?;
    for &id in pitchers {
        if !roster.require(id)?.injured {
            return Ok(id);
        }
    }
    Ok(first)
}

/// Returns the existing placement of `player_id`, if they are already in the game.
pub fn find_conflict(player_id: PlayerId, assignments: &Assignments) -> Option<&PlayerInGame> {
    assignments.get(&player_id)
}

/// Choose a bench player for `position` who is not already in the game.
///
/// Healthy players come before injured ones; within the same injury status the
/// higher rating at `position` wins. Ties keep depth chart order.
pub fn resolve_conflict<R: PositionRating + ?Sized>(
    position: Position,
    slot: BattingSlot,
    bench: &[PlayerId],
    assignments: &Assignments,
    roster: &RosterIndex,
    rater: &R,
) -> Result<PlayerId, InsufficientRosterError> {
    let mut candidates: Vec<_> = bench
        .iter()
        .filter(|id| !assignments.contains_key(id))
        .filter_map(|id| roster.get(*id))
        .collect();
    candidates.sort_by_key(|p| rater.bench_key(p, position));

    candidates
        .first()
        .map(|p| p.id)
        .ok_or(InsufficientRosterError::NoBenchCandidate { position, slot })
}

/// Builds the starting assignments for one side from its depth chart.
pub struct LineupBuilder<'a, R: PositionRating + ?Sized> {
    roster: &'a RosterIndex,
    depth: &'a DepthChart,
    dh: bool,
    rater: &'a R,
}

impl<'a, R: PositionRating + ?Sized> LineupBuilder<'a, R> {
    pub fn new(roster: &'a RosterIndex, depth: &'a DepthChart, dh: bool, rater: &'a R) -> Self {
        Self {
            roster,
            depth,
            dh,
            rater,
        }
    }

    /// Number of lineup spots that go to position players.
    pub fn num_position_players(&self) -> usize {
        if self.dh {
            NUM_BATTERS_PER_SIDE
        } else {
            NUM_BATTERS_PER_SIDE - 1
        }
    }

    /// Defensive depth entries past the starters.
    pub fn bench(&self) -> &'a [PlayerId] {
        let defense = self.depth.defense(self.dh);
        defense.get(self.num_position_players()..).unwrap_or(&[])
    }

    pub fn build(&self, starting_pitcher: PlayerId) -> LineupResult<Assignments> {
        self.check_depth_ids(starting_pitcher)?;

        let lineup = self.depth.lineup(self.dh);
        let bench = self.bench();
        let mut assignments = Assignments::new();

        let pitcher_batting_order = lineup
            .iter()
            .position(|entry| *entry == LineupEntry::Pitcher)
            .map(BattingSlot::new)
            .transpose()?;
        assignments.insert(
            starting_pitcher,
            PlayerInGame {
                player_id: starting_pitcher,
                batting_order: pitcher_batting_order,
                pos: Position::Pitcher,
            },
        );

        for i in 0..NUM_BATTERS_PER_SIDE {
            let entry = lineup
                .get(i)
                .ok_or(InsufficientRosterError::MissingLineupEntry { slot: i })?;
            let slot = BattingSlot::new(i)?;

            let LineupEntry::Batter { id, pos } = *entry else {
                // Pitcher was already handled above
                continue;
            };

            if pos == Position::Pitcher {
                return Err(InvariantViolation::PitcherInFieldingSlot { slot }.into());
            }
            if pos == Position::DesignatedHitter && !self.dh {
                return Err(InvariantViolation::DesignatedHitterWithoutRule.into());
            }

            let player_id = match find_conflict(id, &assignments) {
                Some(existing) => {
                    let replacement =
                        resolve_conflict(pos, slot, bench, &assignments, self.roster, self.rater)?;
                    warn!(
                        player = %id,
                        already_at = %existing.pos,
                        %pos,
                        %slot,
                        %replacement,
                        "player listed twice in lineup, using bench replacement"
                    );
                    replacement
                }
                None => id,
            };

            assignments.insert(
                player_id,
                PlayerInGame {
                    player_id,
                    batting_order: Some(slot),
                    pos,
                },
            );
        }

        check_complete(&assignments)?;
        info!(
            dh = self.dh,
            pitcher = %starting_pitcher,
            players = assignments.len(),
            "starting lineup built"
        );
        Ok(assignments)
    }

    fn check_depth_ids(&self, starting_pitcher: PlayerId) -> Result<(), InvalidRosterError> {
        let lineup_ids = self
            .depth
            .lineup(self.dh)
            .iter()
            .filter_map(LineupEntry::player_id);
        let defense_ids = self.depth.defense(self.dh).iter().copied();

        for id in std::iter::once(starting_pitcher)
            .chain(lineup_ids)
            .chain(defense_ids)
        {
            self.roster.require(id)?;
        }
        Ok(())
    }
}

/// Every batting slot filled, no position held twice.
pub fn check_complete(assignments: &Assignments) -> Result<(), InvariantViolation> {
    let mut positions = HashSet::new();
    let mut slots = [false; NUM_BATTERS_PER_SIDE];

    for entry in assignments.values() {
        if !positions.insert(entry.pos) {
            return Err(InvariantViolation::DuplicatePosition(entry.pos));
        }
        if let Some(slot) = entry.batting_order {
            slots[slot.index()] = true;
        }
    }

    match BattingSlot::all().find(|slot| !slots[slot.index()]) {
        Some(empty) => Err(InvariantViolation::EmptyBattingSlot(empty)),
        None => {
            debug!(players = assignments.len(), "lineup complete");
            Ok(())
        }
    }
}
