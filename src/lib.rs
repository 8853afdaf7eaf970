//! Tic-tac-toe against a depth-bounded minimax search.
//!
//! The core is [`search::Minimax`], which walks the game tree through
//! [`rules`] and scores positions with an [`evaluator::Evaluator`].

pub mod board;
pub mod config;
pub mod evaluator;
pub mod players;
pub mod rules;
pub mod search;
pub mod tic_tac_toe;
