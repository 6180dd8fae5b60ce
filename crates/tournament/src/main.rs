//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use alphabeta_engine::AlphaBetaEngine;
use othello_core::{Engine, Player};
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Othello Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--random-openings N] [--config FILE]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Minimax with alpha-beta pruning, disc-diff eval");
    println!("  random        - Uniform random legal move");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 100 --depth 3");
    println!("  tournament gauntlet alphabeta --games 10");
}

fn create_engine(spec: &str, player: Player) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "alphabeta" | "ab" => Box::new(AlphaBetaEngine::new(player)),
        "random" | "rand" => Box::new(RandomEngine::new(player)),
        _ => {
            eprintln!("Unknown engine: {}, using alphabeta", spec);
            Box::new(AlphaBetaEngine::new(player))
        }
    }
}

struct CliOptions {
    num_games: u32,
    depth: u8,
    random_opening_plies: u32,
    config_file: Option<String>,
}

fn parse_options(args: &[String], defaults: &TournamentConfig) -> CliOptions {
    let mut opts = CliOptions {
        num_games: defaults.games_per_match,
        depth: defaults.search_depth,
        random_opening_plies: 0,
        config_file: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    opts.num_games = args[i + 1].parse().unwrap_or(opts.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    opts.depth = args[i + 1].parse().unwrap_or(opts.depth);
                    i += 1;
                }
            }
            "--random-openings" | "-r" => {
                if i + 1 < args.len() {
                    opts.random_opening_plies =
                        args[i + 1].parse().unwrap_or(opts.random_opening_plies);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    opts.config_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    opts
}

/// Resolve games/depth from defaults, an optional TOML file, then CLI flags.
fn resolve_options(args: &[String]) -> CliOptions {
    let mut defaults = TournamentConfig::default();

    // First pass just to find --config; flags given alongside it still win
    let probe = parse_options(args, &defaults);
    if let Some(path) = &probe.config_file {
        match TournamentConfig::load(Path::new(path)) {
            Ok(file_config) => defaults = file_config,
            Err(e) => eprintln!("Warning: ignoring config {}: {}", path, e),
        }
    }

    parse_options(args, &defaults)
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let opts = resolve_options(&args[2..]);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let config = MatchConfig {
        num_games: opts.num_games,
        depth: opts.depth,
        random_opening_plies: opts.random_opening_plies,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(
        &|p| create_engine(engine1_spec, p),
        &|p| create_engine(engine2_spec, p),
    );

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let opts = resolve_options(&args[1..]);

    let opponents = vec!["random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: opts.num_games,
            search_depth: opts.depth,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let result = quick_match(
            &|p| create_engine(challenger_spec, p),
            &|p| create_engine(opponent, p),
            opts.num_games,
            opts.depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
