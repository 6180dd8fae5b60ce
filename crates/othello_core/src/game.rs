//! Turn and termination orchestration.
//!
//! All driver paths (tournament match runner, interactive play) share this
//! one implementation of the turn contract: after every applied move the
//! active player switches; a player with no legal move is skipped; when
//! neither player can move the game ends and is scored by stone count on the
//! current, possibly non-full, board.

use crate::board::Board;
use crate::rules;
use crate::types::{Move, Player};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    over: bool,
}

impl Game {
    /// Fresh game from the standard setup; Black moves first.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::Black,
            over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Externally-driven input path (e.g. a click mapped to a cell by the
    /// presentation layer). Plays the cell for the side to move. Returns
    /// false on an illegal attempt, leaving the game unchanged.
    pub fn try_move(&mut self, row: u8, col: u8) -> bool {
        self.play(Move::new(row, col, self.to_move))
    }

    /// Agent input path. The move must belong to the side to move and be
    /// legal on the current board; otherwise nothing happens.
    pub fn play(&mut self, mv: Move) -> bool {
        if self.over || mv.player != self.to_move {
            return false;
        }
        if !rules::apply_move(&mut self.board, mv) {
            return false;
        }
        self.advance_turn();
        true
    }

    /// Forced pass: the side to move yields without placing a stone.
    pub fn pass(&mut self) {
        if !self.over {
            self.advance_turn();
        }
    }

    /// Switches the active player, skipping a player with no legal move.
    /// Ends the game when neither player can move.
    fn advance_turn(&mut self) {
        self.to_move = self.to_move.other();
        if rules::any_legal_move(&self.board, self.to_move) {
            return;
        }
        if rules::any_legal_move(&self.board, self.to_move.other()) {
            // skipped turn, back to the player who can move
            self.to_move = self.to_move.other();
            return;
        }
        self.over = true;
    }

    /// Winner by stone count, `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
