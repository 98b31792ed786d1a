use crate::game::batting_order::BattingSlot;
use schema::{PlayerId, Position};
use thiserror::Error;

/// Main error type for the lineup engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineupError {
    /// The roster handed to the engine cannot be indexed
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] InvalidRosterError),
    /// Not enough distinct players to field a lineup
    #[error("Insufficient roster: {0}")]
    InsufficientRoster(#[from] InsufficientRosterError),
    /// The depth chart or a substitution broke a lineup invariant
    #[error("Lineup invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    /// Team or config data could not be loaded
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

/// Errors related to roster contents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRosterError {
    /// Two roster entries share an identifier
    #[error("duplicate player id {0}")]
    DuplicatePlayerId(PlayerId),
    /// A depth chart or substitution names a player who is not on the roster
    #[error("player {0} is not on the roster")]
    UnknownPlayer(PlayerId),
    /// The pitching depth chart lists nobody
    #[error("no pitchers in the depth chart")]
    NoPitchers,
}

/// Errors raised when a lineup cannot be filled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsufficientRosterError {
    /// The lineup depth chart has no entry for a batting slot
    #[error("lineup has no entry for batting slot {slot}")]
    MissingLineupEntry { slot: usize },
    /// Every bench player is already in the game
    #[error("no bench player available to play {position} in batting slot {slot}")]
    NoBenchCandidate { position: Position, slot: BattingSlot },
}

/// Errors signalling a defect in depth chart construction or a bad substitution command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The pitcher showed up in a position player's lineup slot
    #[error("pitcher listed as a position player in batting slot {slot}")]
    PitcherInFieldingSlot { slot: BattingSlot },
    /// Batting slot index outside the batting order
    #[error("batting slot {0} is outside the batting order")]
    BattingSlotOutOfRange(usize),
    /// No player occupies a batting slot after the lineup was built
    #[error("batting slot {0} is empty")]
    EmptyBattingSlot(BattingSlot),
    /// Two players were assigned the same fielding position
    #[error("position {0} is assigned twice")]
    DuplicatePosition(Position),
    /// A DH was listed although the designated hitter rule is off
    #[error("designated hitter listed without the DH rule")]
    DesignatedHitterWithoutRule,
    /// Substitution target has nobody to replace
    #[error("nobody occupies {0}")]
    VacantTarget(String),
    /// Incoming substitute is already on the field or in the batting order
    #[error("player {0} is already in the game")]
    AlreadyInGame(PlayerId),
    /// Incoming substitute was removed earlier and cannot re-enter
    #[error("player {0} was already removed from the game")]
    AlreadyRemoved(PlayerId),
}

/// Errors related to reading team and config data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The file could not be read
    #[error("failed to read '{path}': {message}")]
    Io { path: String, message: String },
    /// The RON text did not match the expected shape
    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },
}

/// Type alias for Results using LineupError
pub type LineupResult<T> = Result<T, LineupError>;
