use crate::config::GameConfig;
use crate::errors::{InvalidRosterError, InvariantViolation, LineupResult};
use crate::game::batting_order::BattingSlot;
use crate::game::cursor::AtBatCursor;
use crate::game::indexes::PositionBattingIndex;
use crate::game::lineup::{select_starting_pitcher, Assignments, LineupBuilder, PlayerInGame};
use crate::player::{GamePlayer, PositionRating, StoredRatings};
use crate::roster::RosterIndex;
use schema::{PlayerId, PlayerTemplate, Position, TeamTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

/// What a substitution replaces.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionTarget {
    Position(Position),
    BattingSlot(BattingSlot),
}

impl fmt::Display for SubstitutionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionTarget::Position(pos) => write!(f, "position {}", pos),
            SubstitutionTarget::BattingSlot(slot) => write!(f, "batting slot {}", slot),
        }
    }
}

/// A completed substitution, in the order they happened.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub outgoing: PlayerId,
    pub incoming: PlayerId,
    pub pos: Position,
    pub batting_order: Option<BattingSlot>,
}

/// A player in the game together with where they are playing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InGame<'a> {
    pub player: &'a GamePlayer,
    pub assignment: &'a PlayerInGame,
}

/// One side's live roster for the length of a single game.
///
/// `players_in_game` is the source of truth; the position and batting order
/// lookups are rebuilt from it after every change.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameTeam {
    pub abbrev: String,
    pub name: String,
    pub dh: bool,
    roster: RosterIndex,
    players_in_game: Assignments,
    indexes: PositionBattingIndex,
    at_bat: AtBatCursor,
    removed: BTreeSet<PlayerId>,
    substitutions: Vec<Substitution>,
}

impl GameTeam {
    /// Set up a side using the ratings stored on each player.
    pub fn new(template: &TeamTemplate, config: &GameConfig) -> LineupResult<Self> {
        Self::with_rater(template, config, &StoredRatings)
    }

    pub fn with_rater<R: PositionRating + ?Sized>(
        template: &TeamTemplate,
        config: &GameConfig,
        rater: &R,
    ) -> LineupResult<Self> {
        let mut roster = RosterIndex::from_templates(&template.players)?;
        let dh = config.designated_hitter;

        let starting_pitcher = select_starting_pitcher(&template.depth.pitchers, &roster)?;
        let players_in_game =
            LineupBuilder::new(&roster, &template.depth, dh, rater).build(starting_pitcher)?;

        let mut indexes = PositionBattingIndex::new();
        indexes.rebuild(&players_in_game, &mut roster)?;

        info!(team = %template.abbrev, dh, "team ready for first pitch");
        Ok(GameTeam {
            abbrev: template.abbrev.clone(),
            name: template.name.clone(),
            dh,
            roster,
            players_in_game,
            indexes,
            at_bat: AtBatCursor::new(),
            removed: BTreeSet::new(),
            substitutions: Vec::new(),
        })
    }

    fn in_game(&self, id: PlayerId) -> Option<InGame<'_>> {
        Some(InGame {
            player: self.roster.get(id)?,
            assignment: self.players_in_game.get(&id)?,
        })
    }

    pub fn current_batter(&self) -> Option<InGame<'_>> {
        let slot = self.at_bat.current()?;
        self.in_game(self.indexes.at_slot(slot)?)
    }

    pub fn on_deck_batter(&self) -> Option<InGame<'_>> {
        self.in_game(self.indexes.at_slot(self.at_bat.on_deck())?)
    }

    pub fn current_pitcher(&self) -> Option<InGame<'_>> {
        self.at_position(Position::Pitcher)
    }

    pub fn at_position(&self, pos: Position) -> Option<InGame<'_>> {
        self.in_game(self.indexes.at_position(pos)?)
    }

    pub fn at_slot(&self, slot: BattingSlot) -> Option<InGame<'_>> {
        self.in_game(self.indexes.at_slot(slot)?)
    }

    pub fn advance_to_next_batter(&mut self) -> BattingSlot {
        self.at_bat.advance()
    }

    pub fn move_to_previous_batter(&mut self) -> BattingSlot {
        self.at_bat.retreat()
    }

    pub fn at_bat(&self) -> &AtBatCursor {
        &self.at_bat
    }

    /// The current assignments, for box score and play-by-play writers.
    pub fn players_in_game(&self) -> &Assignments {
        &self.players_in_game
    }

    pub fn player(&self, id: PlayerId) -> Option<&GamePlayer> {
        self.roster.get(id)
    }

    pub fn roster(&self) -> &RosterIndex {
        &self.roster
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Everyone who has appeared for this side, in the order they entered.
    pub fn players_in_arrival_order(&self) -> Vec<&GamePlayer> {
        let mut appeared: Vec<&GamePlayer> =
            self.roster.iter().filter(|p| p.has_appeared()).collect();
        appeared.sort_by_key(|p| p.sub_index);
        appeared
    }

    /// Replace whoever holds `target` with `incoming`.
    ///
    /// The incoming player takes over both the position and the batting slot of
    /// the player leaving. The player leaving cannot come back in.
    pub fn substitute(
        &mut self,
        target: SubstitutionTarget,
        incoming: PlayerId,
    ) -> LineupResult<&Assignments> {
        self.roster.require(incoming)?;
        if self.players_in_game.contains_key(&incoming) {
            return Err(InvariantViolation::AlreadyInGame(incoming).into());
        }
        if self.removed.contains(&incoming) {
            return Err(InvariantViolation::AlreadyRemoved(incoming).into());
        }

        let outgoing = match target {
            SubstitutionTarget::Position(pos) => self.indexes.at_position(pos),
            SubstitutionTarget::BattingSlot(slot) => self.indexes.at_slot(slot),
        }
        .ok_or_else(|| InvariantViolation::VacantTarget(target.to_string()))?;

        let leaving = self
            .players_in_game
            .remove(&outgoing)
            .ok_or_else(|| InvariantViolation::VacantTarget(target.to_string()))?;
        self.players_in_game.insert(
            incoming,
            PlayerInGame {
                player_id: incoming,
                batting_order: leaving.batting_order,
                pos: leaving.pos,
            },
        );
        self.removed.insert(outgoing);
        self.indexes.rebuild(&self.players_in_game, &mut self.roster)?;

        let substitution = Substitution {
            outgoing,
            incoming,
            pos: leaving.pos,
            batting_order: leaving.batting_order,
        };
        info!(
            team = %self.abbrev,
            %outgoing,
            %incoming,
            pos = %leaving.pos,
            "substitution"
        );
        self.substitutions.push(substitution);

        Ok(&self.players_in_game)
    }

    /// Add a player to the roster mid-game, e.g. a generated replacement when
    /// nobody on the bench can fill a spot.
    pub fn call_up(&mut self, template: &PlayerTemplate) -> Result<PlayerId, InvalidRosterError> {
        self.roster.insert(GamePlayer::from(template))?;
        info!(team = %self.abbrev, player = %template.id, "player called up");
        Ok(template.id)
    }
}
