use crate::config::GameConfig;
use crate::errors::{DataError, LineupResult};
use crate::game::team::GameTeam;
use schema::TeamTemplate;
use std::fs;
use std::path::Path;

// Sample team shipped with the crate
const DEMO_TEAM_RON: &str = include_str!("../data/teams/river_cats.ron");

/// Parse a team template from RON text
pub fn team_from_ron_str(text: &str) -> Result<TeamTemplate, DataError> {
    ron::from_str(text).map_err(|e| DataError::Parse {
        what: "team template".to_string(),
        message: e.to_string(),
    })
}

/// Read a team template from a RON file
pub fn load_team_file(path: &Path) -> Result<TeamTemplate, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    team_from_ron_str(&text)
}

/// The bundled demo team
pub fn demo_team() -> Result<TeamTemplate, DataError> {
    team_from_ron_str(DEMO_TEAM_RON)
}

/// Convert a team template into a GameTeam ready for first pitch
pub fn create_game_team(template: &TeamTemplate, config: &GameConfig) -> LineupResult<GameTeam> {
    GameTeam::new(template, config)
}
