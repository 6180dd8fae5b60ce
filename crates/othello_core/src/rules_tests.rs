use super::*;
use crate::board::Board;

#[test]
fn test_opening_moves_black() {
    let board = Board::new();
    let moves = legal_moves(&board, Player::Black);
    let cells: Vec<(u8, u8)> = moves.iter().map(|m| (m.row, m.col)).collect();
    // Row-major enumeration order is part of the contract
    assert_eq!(cells, vec![(2, 4), (3, 5), (4, 2), (5, 3)]);
}

#[test]
fn test_opening_moves_white() {
    let board = Board::new();
    let moves = legal_moves(&board, Player::White);
    let cells: Vec<(u8, u8)> = moves.iter().map(|m| (m.row, m.col)).collect();
    assert_eq!(cells, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
}

#[test]
fn test_flip_from_opening() {
    // Placing Black at (2,4) flanks the white stone at (3,4) against the
    // black stone at (4,4); only that one stone flips.
    let mut board = Board::new();
    assert!(apply_move(&mut board, Move::new(2, 4, Player::Black)));

    let mut expected = Board::blank();
    expected.set(2, 4, Some(Player::Black));
    expected.set(3, 3, Some(Player::Black));
    expected.set(3, 4, Some(Player::Black));
    expected.set(4, 4, Some(Player::Black));
    expected.set(4, 3, Some(Player::White));
    assert_eq!(board, expected);
}

#[test]
fn test_flips_in_multiple_directions() {
    let mut board = Board::blank();
    board.set(2, 2, Some(Player::Black));
    board.set(2, 3, Some(Player::White));
    board.set(3, 4, Some(Player::White));
    board.set(4, 4, Some(Player::Black));

    // (2,4) flanks west through (2,3) and south through (3,4)
    assert!(apply_move(&mut board, Move::new(2, 4, Player::Black)));
    assert_eq!(board.get(2, 3), Some(Player::Black));
    assert_eq!(board.get(3, 4), Some(Player::Black));
    assert_eq!(board.count(Player::Black), 5);
    assert_eq!(board.count(Player::White), 0);
}

#[test]
fn test_no_flip_without_terminating_stone() {
    // A run of opponent stones that hits the board edge flips nothing.
    let mut board = Board::blank();
    board.set(0, 1, Some(Player::White));
    board.set(0, 0, Some(Player::White));
    assert!(!is_legal_move(&board, 0, 2, Player::Black));

    // And a run interrupted by an empty cell does not qualify either.
    board.set(0, 0, None);
    board.set(0, 3, Some(Player::Black));
    assert!(!is_legal_move(&board, 0, 4, Player::Black));
}

#[test]
fn test_rejects_occupied_cell() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(!apply_move(&mut board, Move::new(3, 3, Player::White)));
    assert_eq!(board, before);
}

#[test]
fn test_rejects_non_flanking_cell() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(!apply_move(&mut board, Move::new(0, 0, Player::Black)));
    assert_eq!(board, before);
}

#[test]
fn test_stone_conservation() {
    let mut board = Board::new();
    let total_before = board.count(Player::Black) + board.count(Player::White);

    assert!(apply_move(&mut board, Move::new(2, 4, Player::Black)));
    let total_after = board.count(Player::Black) + board.count(Player::White);
    assert_eq!(total_after, total_before + 1);
}

#[test]
fn test_legality_is_per_player() {
    // Row 3, cols 1..=6: B W W . B W — the gap at (3,4) is legal for both
    // players, through different flanks; an isolated cell is legal for neither.
    let mut board = Board::blank();
    board.set(3, 1, Some(Player::Black));
    board.set(3, 2, Some(Player::White));
    board.set(3, 3, Some(Player::White));
    board.set(3, 5, Some(Player::Black));
    board.set(3, 6, Some(Player::White));

    assert!(is_legal_move(&board, 3, 4, Player::Black));
    assert!(is_legal_move(&board, 3, 4, Player::White));
    assert!(!is_legal_move(&board, 6, 6, Player::Black));
    assert!(!is_legal_move(&board, 6, 6, Player::White));
}

#[test]
fn test_terminal_on_full_board() {
    let mut board = Board::blank();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let stone = if row < 4 { Player::Black } else { Player::White };
            board.set(row, col, Some(stone));
        }
    }
    assert!(is_terminal(&board));
    assert!(legal_moves(&board, Player::Black).is_empty());
    assert!(legal_moves(&board, Player::White).is_empty());
    assert_eq!(winner(&board), None); // 32-32
}

#[test]
fn test_terminal_requires_full_board() {
    // Strict check: empty cells mean not terminal, even with no legal moves.
    // The double-pass rule in `Game` handles that ending.
    let mut board = Board::blank();
    board.set(0, 0, Some(Player::Black));
    assert!(!any_legal_move(&board, Player::Black));
    assert!(!any_legal_move(&board, Player::White));
    assert!(!is_terminal(&board));
}

#[test]
fn test_winner_by_count() {
    let mut board = Board::blank();
    board.set(0, 0, Some(Player::Black));
    board.set(0, 1, Some(Player::Black));
    board.set(0, 2, Some(Player::White));
    assert_eq!(winner(&board), Some(Player::Black));

    board.set(0, 3, Some(Player::White));
    assert_eq!(winner(&board), None);

    board.set(0, 4, Some(Player::White));
    assert_eq!(winner(&board), Some(Player::White));
}
