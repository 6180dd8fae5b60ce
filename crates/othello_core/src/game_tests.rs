use super::*;

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::Black);
    assert!(!game.is_over());
    assert_eq!(game.board().count(Player::Black), 2);
    assert_eq!(game.board().count(Player::White), 2);
}

#[test]
fn test_try_move_switches_player() {
    let mut game = Game::new();
    assert!(game.try_move(2, 4));
    assert_eq!(game.to_move(), Player::White);
}

#[test]
fn test_illegal_attempt_leaves_game_unchanged() {
    let mut game = Game::new();
    let before = game.board().clone();

    assert!(!game.try_move(0, 0));
    assert!(!game.try_move(3, 3));
    assert_eq!(*game.board(), before);
    assert_eq!(game.to_move(), Player::Black);
}

#[test]
fn test_rejects_move_for_wrong_player() {
    let mut game = Game::new();
    // (2,3) is a legal White cell, but it is Black's turn
    assert!(!game.play(Move::new(2, 3, Player::White)));
    assert_eq!(game.to_move(), Player::Black);
}

#[test]
fn test_pass_switches_player() {
    let mut game = Game::new();
    game.pass();
    assert_eq!(game.to_move(), Player::White);
}

#[test]
fn test_skips_player_without_moves() {
    // Two separate flanking spots for Black; White never has a reply.
    let mut board = Board::blank();
    board.set(0, 0, Some(Player::Black));
    board.set(0, 1, Some(Player::White));
    board.set(7, 0, Some(Player::Black));
    board.set(6, 0, Some(Player::White));

    let mut game = Game {
        board,
        to_move: Player::Black,
        over: false,
    };

    assert!(game.try_move(0, 2));
    // White had no legal move and was skipped
    assert_eq!(game.to_move(), Player::Black);
    assert!(!game.is_over());

    assert!(game.try_move(5, 0));
    // Now neither player can move: game over on a non-full board
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Player::Black));
}

#[test]
fn test_no_play_after_game_over() {
    let mut board = Board::blank();
    board.set(0, 0, Some(Player::Black));
    board.set(0, 1, Some(Player::White));

    let mut game = Game {
        board,
        to_move: Player::Black,
        over: false,
    };

    assert!(game.try_move(0, 2));
    assert!(game.is_over());
    assert!(!game.try_move(0, 3));
    game.pass();
    assert!(game.is_over());
}
