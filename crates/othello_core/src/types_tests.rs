use super::*;

#[test]
fn test_player_other_round_trips() {
    assert_eq!(Player::Black.other(), Player::White);
    assert_eq!(Player::White.other().other(), Player::White);
}

#[test]
fn test_cell_bounds() {
    assert_eq!(cell(0, 0), Some((0, 0)));
    assert_eq!(cell(7, 7), Some((7, 7)));
    assert_eq!(cell(-1, 0), None);
    assert_eq!(cell(0, 8), None);
}

#[test]
fn test_move_display_is_file_rank() {
    assert_eq!(Move::new(0, 0, Player::Black).to_string(), "a1");
    assert_eq!(Move::new(2, 4, Player::Black).to_string(), "e3");
    assert_eq!(Move::new(7, 7, Player::White).to_string(), "h8");
}
