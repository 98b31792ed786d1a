// In: src/lib.rs

//! Diamond Sim Lineup Engine
//!
//! Keeps track of who is playing where for one side of a simulated baseball
//! game: the starting lineup built from a depth chart, the position and batting
//! order lookups, the batter due up, and substitutions as the game goes on.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod game;
pub mod generate;
pub mod player;
pub mod roster;
pub mod teams;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{DepthChart, LineupEntry, PlayerId, PlayerTemplate, Position, TeamTemplate};

// --- From this crate's modules (`src/`) ---

// Core game-time lineup state.
pub use game::batting_order::{BattingSlot, NUM_BATTERS_PER_SIDE};
pub use game::cursor::AtBatCursor;
pub use game::indexes::PositionBattingIndex;
pub use game::lineup::{
    find_conflict, resolve_conflict, select_starting_pitcher, Assignments, LineupBuilder,
    PlayerInGame,
};
pub use game::lineup_card::{LineupCard, LineupCardEntry};
pub use game::team::{GameTeam, InGame, Substitution, SubstitutionTarget};

// Roster and ratings.
pub use player::{GamePlayer, PositionRating, StoredRatings};
pub use roster::RosterIndex;

// Setup helpers.
pub use config::GameConfig;
pub use teams::{create_game_team, demo_team, load_team_file, team_from_ron_str};

// Crate-specific error and result types.
pub use errors::{
    DataError, InsufficientRosterError, InvalidRosterError, InvariantViolation, LineupError,
    LineupResult,
};
