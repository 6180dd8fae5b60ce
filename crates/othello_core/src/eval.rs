use crate::board::Board;
use crate::types::Player;

/// Static position score: Black stone count minus White stone count.
/// Positive favors Black. Deliberately has no positional weighting so a
/// stronger evaluator can be swapped in without touching search control flow.
pub fn disc_diff(board: &Board) -> i32 {
    board.count(Player::Black) as i32 - board.count(Player::White) as i32
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
