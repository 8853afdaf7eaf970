use std::fmt;

use anyhow::{bail, Result};

use crate::{
    board::{Board, Move, Player},
    rules,
};

/// A game in progress: the board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub board: Board,
    pub current_player: Player,
}

impl TicTacToe {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
        }
    }

    // Take a step with a given action
    pub fn step(&mut self, mv: Move) -> Result<()> {
        if self.done() {
            bail!("Game is already over");
        }
        if !rules::is_legal(&self.board, mv.row, mv.col) {
            bail!("Spot {} is out of bounds or already filled", mv);
        }
        self.board.place(mv, self.current_player);
        self.current_player = self.current_player.other();
        Ok(())
    }

    pub fn done(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    pub fn check_winner(&self) -> Option<Player> {
        rules::winner(&self.board)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
