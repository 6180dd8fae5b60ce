//! Alpha-Beta Othello Engine
//!
//! Fixed-depth minimax search with alpha-beta pruning over board clones,
//! scored by disc-count difference. This is the strongest of the baseline
//! engines and the reference consumer of the core rules API.

mod eval;
mod search;

use othello_core::{Board, Engine, Player, SearchLimits, SearchResult};

/// Othello engine using minimax with alpha-beta pruning.
///
/// Each `search` call runs a fresh depth-bounded minimax with
/// alpha = -inf, beta = +inf; no search state survives between calls.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    player: Player,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new(player: Player) -> Self {
        Self { player, nodes: 0 }
    }
}

impl Engine for AlphaBetaEngine {
    fn player(&self) -> Player {
        self.player
    }

    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome =
            search::pick_best_move(board, self.player, limits.depth, &mut self.nodes, &limits.time_control);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::{pick_best_move, SearchOutcome};
