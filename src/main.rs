use diamond_sim::generate::{generate_team, replacement_player};
use diamond_sim::{
    demo_team, load_team_file, GameConfig, GameTeam, LineupCard, LineupResult, PlayerId, Position,
    SubstitutionTarget,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Plate appearances to walk through for each side
const DEMO_PLATE_APPEARANCES: usize = 12;

fn run(config: &GameConfig, home_path: Option<&str>) -> LineupResult<()> {
    let home_template = match home_path {
        Some(path) => load_team_file(Path::new(path))?,
        None => demo_team()?,
    };
    let away_template = generate_team("EXH", 1000, config.seed);

    let mut home = GameTeam::new(&home_template, config)?;
    let mut away = GameTeam::new(&away_template, config)?;

    for team in [&away, &home] {
        println!("{}", LineupCard::from_team(team));
    }

    for team in [&mut away, &mut home] {
        println!("=== {} batting ===", team.name);
        for _ in 0..DEMO_PLATE_APPEARANCES {
            team.advance_to_next_batter();
            if let (Some(batter), Some(on_deck)) = (team.current_batter(), team.on_deck_batter()) {
                println!(
                    "  {} ({}) at bat, {} on deck",
                    batter.player.name, batter.assignment.pos, on_deck.player.name
                );
            }
        }
        println!();
    }

    // Pitching change with a call-up, as a game-setup caller would do when the bench runs dry
    let mut rng = StdRng::seed_from_u64(config.seed);
    let call_up = replacement_player(PlayerId(9000), Position::Pitcher, &mut rng);
    let incoming = home.call_up(&call_up)?;
    home.substitute(SubstitutionTarget::Position(Position::Pitcher), incoming)?;
    if let Some(pitcher) = home.current_pitcher() {
        println!("{} now pitching for {}", pitcher.player.name, home.name);
    }

    println!();
    println!("{}", LineupCard::from_team(&home).to_json()?);
    Ok(())
}

fn main() {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                println!("Error loading config: {}", e);
                return;
            }
        },
        None => GameConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let home_path = args.next();
    if let Err(e) = run(&config, home_path.as_deref()) {
        println!("Error setting up game: {}", e);
    }
}
