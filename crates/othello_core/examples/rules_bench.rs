//! Rules-engine benchmark for profiling with cargo-flamegraph.
//!
//! Measures legal-move enumeration across game phases and the cost of full
//! first-move playouts (the board-clone plus flip-propagation hot path the
//! search engine leans on).
//!
//! Usage:
//!   cargo flamegraph --example rules_bench -p othello_core

use othello_core::{legal_moves, Game, Player};
use std::time::Instant;

const ENUM_ITERATIONS: usize = 100_000;
const PLAYOUT_ITERATIONS: usize = 2_000;

/// Boards from different game phases, reached by replaying the first legal
/// move a fixed number of plies from the opening.
fn phase_boards() -> Vec<(&'static str, othello_core::Board)> {
    let phases: &[(&str, u32)] = &[
        ("Opening", 0),
        ("Early", 8),
        ("Midgame", 24),
        ("Late", 48),
    ];

    phases
        .iter()
        .map(|&(name, plies)| {
            let mut game = Game::new();
            for _ in 0..plies {
                if game.is_over() {
                    break;
                }
                let mv = legal_moves(game.board(), game.to_move())[0];
                game.play(mv);
            }
            (name, game.board().clone())
        })
        .collect()
}

fn main() {
    println!("=== Rules Engine Benchmark ===");
    println!("Enumeration iterations per board: {ENUM_ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    for (name, board) in phase_boards() {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;
        for _ in 0..ENUM_ITERATIONS {
            moves_generated += legal_moves(&board, Player::Black).len();
            moves_generated += legal_moves(&board, Player::White).len();
        }
        let elapsed = start.elapsed();
        total_moves += moves_generated;

        let bps = (2 * ENUM_ITERATIONS) as f64 / elapsed.as_secs_f64();
        println!(" {bps:>10.0} boards/sec ({elapsed:>8.3?})");
    }

    println!();
    print!("{:.<20}", "Full playouts");
    let start = Instant::now();
    let mut total_plies = 0u32;
    for _ in 0..PLAYOUT_ITERATIONS {
        let mut game = Game::new();
        while !game.is_over() {
            let mv = legal_moves(game.board(), game.to_move())[0];
            game.play(mv);
            total_plies += 1;
        }
    }
    let elapsed = start.elapsed();
    let gps = PLAYOUT_ITERATIONS as f64 / elapsed.as_secs_f64();
    println!(" {gps:>10.0} games/sec ({elapsed:>8.3?})");

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_moves} moves enumerated, {total_plies} plies played");
}
