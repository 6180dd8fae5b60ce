pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A stone placement: target cell plus the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: u8, // 0..8
    pub col: u8, // 0..8
    pub player: Player,
}

impl Move {
    pub fn new(row: u8, col: u8, player: Player) -> Self {
        Self { row, col, player }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Bounds check for signed ray-walk coordinates.
pub fn cell(row: i8, col: i8) -> Option<(u8, u8)> {
    if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
        Some((row as u8, col as u8))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
