use super::*;

#[test]
fn test_initial_setup() {
    let board = Board::new();
    assert_eq!(board.get(3, 3), Some(Player::Black));
    assert_eq!(board.get(4, 4), Some(Player::Black));
    assert_eq!(board.get(3, 4), Some(Player::White));
    assert_eq!(board.get(4, 3), Some(Player::White));
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let center = (3..=4).contains(&row) && (3..=4).contains(&col);
            assert_eq!(board.is_empty_at(row, col), !center);
        }
    }
}

#[test]
fn test_clone_is_independent() {
    let board = Board::new();
    let mut copy = board.clone();
    copy.set(0, 0, Some(Player::White));

    assert_eq!(copy.get(0, 0), Some(Player::White));
    assert_eq!(board.get(0, 0), None);
    assert_ne!(board, copy);
}

#[test]
fn test_set_and_count() {
    let mut board = Board::blank();
    assert_eq!(board.count(Player::Black), 0);

    board.set(5, 5, Some(Player::Black));
    board.set(5, 6, Some(Player::Black));
    board.set(6, 6, Some(Player::White));
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 1);

    board.set(5, 5, None);
    assert_eq!(board.count(Player::Black), 1);
}

#[test]
fn test_is_full() {
    let mut board = Board::blank();
    assert!(!board.is_full());

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            board.set(row, col, Some(Player::Black));
        }
    }
    assert!(board.is_full());

    board.set(7, 7, None);
    assert!(!board.is_full());
}

#[test]
#[should_panic]
fn test_out_of_range_access_panics() {
    let board = Board::new();
    board.get(8, 0);
}
