use crate::board::Board;
use crate::types::*;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walks from (row, col) in one direction and returns the cell holding the
/// first same-player stone, provided the walk crosses at least one opponent
/// stone and no empty cell. `None` means the direction flips nothing.
fn flank_end(board: &Board, row: u8, col: u8, player: Player, dr: i8, dc: i8) -> Option<(u8, u8)> {
    let opponent = player.other();
    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;
    let mut run = 0u32;
    while let Some((ur, uc)) = cell(r, c) {
        match board.get(ur, uc) {
            Some(p) if p == opponent => run += 1,
            Some(_) => return if run > 0 { Some((ur, uc)) } else { None },
            None => return None,
        }
        r += dr;
        c += dc;
    }
    // ran off the board edge
    None
}

/// True iff the target cell is empty and at least one direction flanks a run
/// of opponent stones.
pub fn is_legal_move(board: &Board, row: u8, col: u8, player: Player) -> bool {
    if !board.is_empty_at(row, col) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| flank_end(board, row, col, player, dr, dc).is_some())
}

/// Applies the move if legal: places the stone and flips every flanked run in
/// all qualifying directions. Returns false and leaves the board untouched if
/// the move is illegal.
pub fn apply_move(board: &mut Board, mv: Move) -> bool {
    if !is_legal_move(board, mv.row, mv.col, mv.player) {
        return false;
    }
    board.set(mv.row, mv.col, Some(mv.player));
    for (dr, dc) in DIRECTIONS {
        if let Some((end_r, end_c)) = flank_end(board, mv.row, mv.col, mv.player, dr, dc) {
            let mut r = mv.row as i8 + dr;
            let mut c = mv.col as i8 + dc;
            while (r, c) != (end_r as i8, end_c as i8) {
                board.set(r as u8, c as u8, Some(mv.player));
                r += dr;
                c += dc;
            }
        }
    }
    true
}

pub fn any_legal_move(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE).any(|row| (0..BOARD_SIZE).any(|col| is_legal_move(board, row, col, player)))
}

/// All legal moves in row-major order. The fixed order matters: alpha-beta
/// tie-breaking and random selection are both defined over this sequence.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_legal_move(board, row, col, player) {
                out.push(Move::new(row, col, player));
            }
        }
    }
    out
}

/// Strict terminal test: board full and no move for either player. The
/// authoritative end-of-game condition is the double-pass check in
/// `Game::advance_turn`; this is the defensive fast-path.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        && !any_legal_move(board, Player::Black)
        && !any_legal_move(board, Player::White)
}

/// Winner by raw stone count, `None` for a draw. Valid on non-full boards
/// (double-pass endings score the same way).
pub fn winner(board: &Board) -> Option<Player> {
    let black = board.count(Player::Black);
    let white = board.count(Player::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Player::Black),
        std::cmp::Ordering::Less => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
