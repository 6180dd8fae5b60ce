use othello_core::{disc_diff, Board, Player};

/// Disc-count difference from `player`'s perspective. Built on the core
/// Black-minus-White evaluator so a stronger board evaluator can be swapped
/// in underneath without touching the search.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    match player {
        Player::Black => disc_diff(board),
        Player::White => -disc_diff(board),
    }
}
