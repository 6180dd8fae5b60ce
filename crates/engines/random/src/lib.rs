//! Random Move Othello Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing the rules engine and game loop

use othello_core::{legal_moves, Board, Engine, Player, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An Othello engine that plays random legal moves.
///
/// No search, no evaluation, no memory across calls: each proposal is a
/// uniform pick over the legal moves of its bound player.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    player: Player,
}

impl RandomEngine {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

impl Engine for RandomEngine {
    fn player(&self) -> Player {
        self.player
    }

    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(board, self.player);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: moves.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
