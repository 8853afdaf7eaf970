use log::{debug, info, warn};

use crate::{
    board::{Board, Move, Player, SIZE},
    evaluator::{Evaluator, Score},
    rules,
};

/// Depth-bounded minimax without pruning. Scores are from Max's point of
/// view; Max maximizes and Min minimizes. Every branch searches its own
/// copy of the board, so the caller's board is never touched.
pub struct Minimax<E> {
    evaluator: E,
}

impl<E: Evaluator> Minimax<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Value of `board` with `to_move` about to play and `depth` plies left.
    pub fn value(&self, board: &Board, to_move: Player, depth: usize) -> Score {
        self.search(board, to_move, depth, &mut 0)
    }

    pub fn max_value(&self, board: &Board, depth: usize) -> Score {
        self.value(board, Player::Max, depth)
    }

    pub fn min_value(&self, board: &Board, depth: usize) -> Score {
        self.value(board, Player::Min, depth)
    }

    fn search(&self, board: &Board, to_move: Player, depth: usize, nodes: &mut usize) -> Score {
        *nodes += 1;
        // Cut-off positions are scored as if settled.
        if depth == 0 || rules::is_terminal(board) {
            return self.evaluator.score(board);
        }

        let scores = rules::legal_moves(board).into_iter().map(|mv| {
            let next = board.with_move(mv, to_move);
            self.search(&next, to_move.other(), depth - 1, nodes)
        });
        let best = match to_move {
            Player::Max => scores.max(),
            Player::Min => scores.min(),
        };
        best.unwrap_or_else(|| self.evaluator.score(board))
    }

    /// Best move for `player` and its score. The first move in row-major
    /// order wins ties. `None` only when the board is full.
    ///
    /// A root `depth` of 0 searches to the end of the game.
    pub fn best_move(&self, board: &Board, player: Player, depth: usize) -> Option<(Move, Score)> {
        let moves = rules::legal_moves(board);
        if moves.is_empty() {
            debug!("no move available on a full board");
            return None;
        }
        if !board.is_well_formed() {
            warn!("searching a board with unbalanced marks:\n{}", board);
        }

        let child_depth = depth.checked_sub(1).unwrap_or(SIZE * SIZE);
        let mut nodes = 0;
        let mut best: Option<(Move, Score)> = None;
        for mv in moves {
            let next = board.with_move(mv, player);
            let score = self.search(&next, player.other(), child_depth, &mut nodes);
            debug!("{:?} at {} scores {}", player, mv, score);

            let improves = match best {
                None => true,
                Some((_, best_score)) => match player {
                    Player::Max => score > best_score,
                    Player::Min => score < best_score,
                },
            };
            if improves {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            info!(
                "{:?} plays {} (score {}, depth {}, {} nodes)",
                player, mv, score, depth, nodes
            );
        }
        best
    }

    /// Max's best move, the computer's side.
    pub fn find_best_move(&self, board: &Board, depth: usize) -> Option<Move> {
        self.best_move(board, Player::Max, depth).map(|(mv, _)| mv)
    }
}
