use crate::types::*;

/// 8x8 grid of cells, each empty or holding one player's stone.
///
/// `Clone` produces a fully independent deep copy; search code relies on
/// cloned boards never sharing state with their parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; 64],
}

impl Board {
    /// Standard opening setup: the four center cells are preset,
    /// (3,3)/(4,4) Black and (3,4)/(4,3) White.
    pub fn new() -> Self {
        let mut b = Board { cells: [None; 64] };
        b.set(3, 3, Some(Player::Black));
        b.set(4, 4, Some(Player::Black));
        b.set(3, 4, Some(Player::White));
        b.set(4, 3, Some(Player::White));
        b
    }

    /// A board with no stones at all, for constructing test positions.
    pub fn blank() -> Self {
        Board { cells: [None; 64] }
    }

    fn idx(row: u8, col: u8) -> usize {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "cell out of range");
        row as usize * BOARD_SIZE as usize + col as usize
    }

    pub fn get(&self, row: u8, col: u8) -> Option<Player> {
        self.cells[Self::idx(row, col)]
    }

    pub fn set(&mut self, row: u8, col: u8, stone: Option<Player>) {
        self.cells[Self::idx(row, col)] = stone;
    }

    pub fn is_empty_at(&self, row: u8, col: u8) -> bool {
        self.get(row, col).is_none()
    }

    pub fn count(&self, player: Player) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(player)).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = match self.get(row, col) {
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
