//! Seeded roster generation for exhibition games and emergency call-ups.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use schema::{DepthChart, LineupEntry, PlayerId, PlayerTemplate, Position, TeamTemplate};
use std::collections::HashMap;

const FIRST_NAMES: [&str; 12] = [
    "Abe", "Buck", "Carl", "Dusty", "Eli", "Frank", "Gabe", "Hal", "Ivan", "Jess", "Kip", "Lou",
];
const LAST_NAMES: [&str; 12] = [
    "Abbott", "Barnes", "Cortez", "Doyle", "Eaton", "Fisk", "Grady", "Hobbs", "Ibarra", "Jansen",
    "Kell", "Lyle",
];

const BENCH_SIZE: usize = 4;
const ROTATION_SIZE: usize = 5;
const BENCH_INJURY_CHANCE: f64 = 0.1;

fn random_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

fn position_player(id: PlayerId, primary: Position, rng: &mut StdRng) -> PlayerTemplate {
    let mut ratings: HashMap<Position, f32> = Position::fielders()
        .map(|pos| (pos, rng.random_range(20.0..55.0)))
        .collect();
    ratings.insert(primary, rng.random_range(55.0..80.0));
    ratings.insert(Position::DesignatedHitter, rng.random_range(40.0..80.0));

    PlayerTemplate {
        id,
        name: random_name(rng),
        injured: false,
        ratings,
    }
}

fn pitcher(id: PlayerId, rng: &mut StdRng) -> PlayerTemplate {
    PlayerTemplate {
        id,
        name: random_name(rng),
        injured: false,
        ratings: HashMap::from([(Position::Pitcher, rng.random_range(50.0..85.0))]),
    }
}

/// A replacement-level player to call up when a side runs out of bench.
pub fn replacement_player(id: PlayerId, pos: Position, rng: &mut StdRng) -> PlayerTemplate {
    PlayerTemplate {
        id,
        name: random_name(rng),
        injured: false,
        ratings: HashMap::from([(pos, rng.random_range(30.0..40.0))]),
    }
}

/// Build a full team: eight fielders, a DH, a bench and a starting rotation.
///
/// Player ids start at `first_id`. The same seed always produces the same team.
pub fn generate_team(abbrev: &str, first_id: u32, seed: u64) -> TeamTemplate {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next_id = first_id;
    let mut take_id = || {
        let id = PlayerId(next_id);
        next_id += 1;
        id
    };

    let mut starters: Vec<(PlayerTemplate, Position)> = Position::fielders()
        .chain(std::iter::once(Position::DesignatedHitter))
        .map(|pos| (position_player(take_id(), pos, &mut rng), pos))
        .collect();

    let mut bench = Vec::with_capacity(BENCH_SIZE);
    for _ in 0..BENCH_SIZE {
        let pos = Position::fielders()
            .nth(rng.random_range(0..8))
            .unwrap_or(Position::Catcher);
        let mut player = position_player(take_id(), pos, &mut rng);
        player.injured = rng.random_bool(BENCH_INJURY_CHANCE);
        bench.push(player);
    }

    let pitchers: Vec<PlayerTemplate> = (0..ROTATION_SIZE)
        .map(|_| pitcher(take_id(), &mut rng))
        .collect();

    // Best bats at the top of the order
    starters.sort_by(|(a, _), (b, _)| {
        let bat = |p: &PlayerTemplate| {
            p.ratings
                .get(&Position::DesignatedHitter)
                .copied()
                .unwrap_or(0.0)
        };
        bat(b).total_cmp(&bat(a))
    });
    let lineup_dh: Vec<LineupEntry> = starters
        .iter()
        .map(|(p, pos)| LineupEntry::Batter { id: p.id, pos: *pos })
        .collect();
    let mut lineup_no_dh: Vec<LineupEntry> = lineup_dh
        .iter()
        .copied()
        .filter(|entry| !matches!(entry, LineupEntry::Batter { pos: Position::DesignatedHitter, .. }))
        .collect();
    lineup_no_dh.push(LineupEntry::Pitcher);

    let (dh_bat, fielders): (Vec<_>, Vec<_>) = starters
        .iter()
        .partition(|(_, pos)| *pos == Position::DesignatedHitter);
    let defense_dh: Vec<PlayerId> = fielders
        .iter()
        .chain(dh_bat.iter())
        .map(|(p, _)| p.id)
        .chain(bench.iter().map(|p| p.id))
        .collect();
    // Without the DH the designated hitter is just another bench bat
    let defense_no_dh = defense_dh.clone();

    let mut rotation: Vec<PlayerId> = pitchers.iter().map(|p| p.id).collect();
    rotation.shuffle(&mut rng);

    let players = starters
        .into_iter()
        .map(|(p, _)| p)
        .chain(bench)
        .chain(pitchers)
        .collect();

    TeamTemplate {
        abbrev: abbrev.to_string(),
        name: format!("{} Exhibition", abbrev),
        players,
        depth: DepthChart {
            lineup_dh,
            lineup_no_dh,
            defense_dh,
            defense_no_dh,
            pitchers: rotation,
        },
    }
}
