// Diamond Sim Schema - Shared type definitions
// This crate contains the positions, roster entries and depth chart types shared
// between the lineup engine and any tooling that authors team data files.

// Re-export the main types
pub use positions::*;
pub use roster_data::*;

pub mod positions;
pub mod roster_data;
