use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, Move},
    rules,
};

/// A uniformly random legal move, `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    rules::legal_moves(board).choose(rng).copied()
}
