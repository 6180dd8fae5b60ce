//! Depth-bounded minimax with alpha-beta pruning
//!
//! The search is a pure function of the input board: every candidate line is
//! explored on its own board clone, never on the live board, and nothing
//! carries over between top-level calls. Maximizing plies move for the
//! engine's bound player, minimizing plies for the opponent; the search
//! assumes strict alternation between those two identities rather than
//! re-deriving the turn (pass plies inside the horizon are not modeled).

use othello_core::{legal_moves, rules, Board, Move, Player, TimeControl};

use crate::eval::evaluate;

/// Result from pick_best_move indicating whether search completed or was stopped.
pub struct SearchOutcome {
    /// Best move found with its score (None if the player has no legal move)
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches the position and returns the best move for `player`.
///
/// Ties keep the first move in row-major enumeration order, so results are
/// reproducible. `best_move` is `None` exactly when `player` has no legal
/// move on `board`; the caller must treat that as a forced pass.
pub fn pick_best_move(
    board: &Board,
    player: Player,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let mut best = moves[0];
    let mut best_score = i32::MIN + 1;
    let mut alpha = i32::MIN + 1;
    let beta = i32::MAX - 1;
    let mut stopped = false;

    for mv in moves {
        let mut child = board.clone();
        rules::apply_move(&mut child, mv);
        *nodes += 1;

        let (score, was_stopped) =
            minimax(&child, player, depth.saturating_sub(1), alpha, beta, false, nodes, tc);

        if was_stopped {
            stopped = true;
            break;
        }

        if score > best_score {
            best_score = score;
            best = mv;
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if beta <= alpha {
            break;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Returns (score, stopped); the score is from the bound player's
/// perspective regardless of which side moves at this node.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &Board,
    player: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if tc.poll(*nodes) {
        return (0, true);
    }

    let mover = if maximizing { player } else { player.other() };
    let moves = legal_moves(board, mover);

    if depth == 0 || moves.is_empty() {
        return (evaluate(board, player), false);
    }

    let mut best = if maximizing { i32::MIN + 1 } else { i32::MAX - 1 };

    for mv in moves {
        let mut child = board.clone();
        rules::apply_move(&mut child, mv);
        *nodes += 1;

        let (score, stopped) = minimax(&child, player, depth - 1, alpha, beta, !maximizing, nodes, tc);
        if stopped {
            return (best, true);
        }

        if maximizing {
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
        }
        if beta <= alpha {
            break; // cutoff
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
