pub mod board;
pub mod eval;
pub mod game;
pub mod rules;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::*;
pub use game::*;
pub use rules::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Othello engines (random, alpha-beta, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the engine's player has no legal move)
    pub best_move: Option<Move>,
    /// Score from the engine's perspective, in stones
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all Othello engines must implement.
///
/// An engine is bound to one player for its whole lifetime and keeps no
/// board state between calls: every `search` is a pure function of the
/// given board snapshot. This allows reusing the same engine across many
/// games and swapping implementations behind the trait.
pub trait Engine: Send {
    /// The player this engine was bound to at construction.
    fn player(&self) -> Player;

    /// Propose a move for the bound player on the given board.
    ///
    /// Returns `best_move: None` exactly when the bound player has no legal
    /// move, which the game loop treats as a forced pass, not an error.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Engine name for reports and leaderboards
    fn name(&self) -> &str;

    /// Reset internal statistics for a new game
    fn new_game(&mut self) {}
}
