use crate::config::GameConfig;
use crate::errors::LineupResult;
use crate::game::batting_order::BattingSlot;
use crate::game::team::GameTeam;
use schema::{DepthChart, LineupEntry, PlayerId, PlayerTemplate, Position, TeamTemplate};
use std::collections::HashMap;

/// A builder for roster entries with common defaults.
///
/// # Example
/// ```ignore
/// let player = TestPlayerBuilder::new(13, "Third Base")
///     .rated(Position::ThirdBase, 60.0)
///     .injured()
///     .build();
/// ```
pub struct TestPlayerBuilder {
    id: u32,
    name: String,
    injured: bool,
    ratings: HashMap<Position, f32>,
}

impl TestPlayerBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            injured: false,
            ratings: HashMap::new(),
        }
    }

    pub fn rated(mut self, pos: Position, rating: f32) -> Self {
        self.ratings.insert(pos, rating);
        self
    }

    pub fn injured(mut self) -> Self {
        self.injured = true;
        self
    }

    pub fn build(self) -> PlayerTemplate {
        PlayerTemplate {
            id: PlayerId(self.id),
            name: self.name,
            injured: self.injured,
            ratings: self.ratings,
        }
    }
}

/// Starting fielders of the standard test team: (id, position), in batting order.
pub const STARTERS: [(u32, Position); 8] = [
    (10, Position::Catcher),
    (11, Position::FirstBase),
    (12, Position::SecondBase),
    (13, Position::ThirdBase),
    (14, Position::Shortstop),
    (15, Position::LeftField),
    (16, Position::CenterField),
    (17, Position::RightField),
];
pub const STARTING_PITCHER: u32 = 1;
pub const DESIGNATED_HITTER: u32 = 18;

pub fn batter(id: u32, pos: Position) -> LineupEntry {
    LineupEntry::Batter {
        id: PlayerId(id),
        pos,
    }
}

/// A nine-man team with the pitcher batting ninth without the DH, plus a
/// three-man bench (20, 21, 22) that nobody in the lineup overlaps with.
pub fn standard_team() -> TeamTemplate {
    let mut players = vec![
        TestPlayerBuilder::new(STARTING_PITCHER, "Starting Pitcher")
            .rated(Position::Pitcher, 70.0)
            .build(),
        TestPlayerBuilder::new(2, "Long Reliever")
            .rated(Position::Pitcher, 50.0)
            .build(),
    ];
    for (id, pos) in STARTERS {
        players.push(
            TestPlayerBuilder::new(id, &format!("Starter {}", pos))
                .rated(pos, 60.0)
                .build(),
        );
    }
    players.push(
        TestPlayerBuilder::new(DESIGNATED_HITTER, "Designated Hitter")
            .rated(Position::DesignatedHitter, 65.0)
            .build(),
    );
    players.push(TestPlayerBuilder::new(20, "Bench A").rated(Position::Shortstop, 40.0).build());
    players.push(TestPlayerBuilder::new(21, "Bench B").rated(Position::Shortstop, 45.0).build());
    players.push(TestPlayerBuilder::new(22, "Bench C").rated(Position::Catcher, 50.0).build());

    let mut lineup_no_dh: Vec<LineupEntry> =
        STARTERS.iter().map(|&(id, pos)| batter(id, pos)).collect();
    lineup_no_dh.push(LineupEntry::Pitcher);

    let mut lineup_dh: Vec<LineupEntry> =
        STARTERS.iter().map(|&(id, pos)| batter(id, pos)).collect();
    lineup_dh.push(batter(DESIGNATED_HITTER, Position::DesignatedHitter));

    let mut defense: Vec<PlayerId> = STARTERS.iter().map(|&(id, _)| PlayerId(id)).collect();
    defense.extend([DESIGNATED_HITTER, 20, 21, 22].map(PlayerId));

    TeamTemplate {
        abbrev: "TST".to_string(),
        name: "Test Team".to_string(),
        players,
        depth: DepthChart {
            lineup_dh,
            lineup_no_dh,
            defense_dh: defense.clone(),
            defense_no_dh: defense,
            pitchers: vec![PlayerId(STARTING_PITCHER), PlayerId(2)],
        },
    }
}

pub fn config(dh: bool) -> GameConfig {
    GameConfig {
        designated_hitter: dh,
        ..GameConfig::default()
    }
}

/// Builds a GameTeam, panicking with the lineup error if construction fails.
pub fn create_test_team(template: &TeamTemplate, dh: bool) -> GameTeam {
    match GameTeam::new(template, &config(dh)) {
        Ok(team) => team,
        Err(err) => panic!("Failed to build test team: {}", err),
    }
}

/// Player ids in batting order, `None` for an empty slot.
pub fn batting_order_ids(team: &GameTeam) -> Vec<Option<u32>> {
    BattingSlot::all()
        .map(|slot| team.at_slot(slot).map(|p| p.player.id.0))
        .collect()
}

pub fn slot(index: usize) -> BattingSlot {
    match BattingSlot::new(index) {
        Ok(slot) => slot,
        Err(err) => panic!("bad test slot: {}", err),
    }
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: LineupResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
