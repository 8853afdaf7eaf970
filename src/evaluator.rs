use crate::{
    board::{Board, Cell, Player},
    rules::{self, LINES},
};

/// Scores are always from Max's point of view.
pub type Score = i32;

pub const WIN_SCORE: Score = 10;

/// Non-terminal scores stay within this bound so they never alias a win.
pub const HEURISTIC_BOUND: Score = WIN_SCORE - 1;

const TWO_IN_LINE: Score = 3;
const ONE_IN_LINE: Score = 1;
const CENTER_BONUS: Score = 2;

pub trait Evaluator {
    fn score(&self, board: &Board) -> Score;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn score(&self, board: &Board) -> Score {
        (**self).score(board)
    }
}

fn sign(player: Player) -> Score {
    match player {
        Player::Max => 1,
        Player::Min => -1,
    }
}

/// +10 if Max has won, -10 if Min has won, 0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvaluator;

impl Evaluator for TerminalEvaluator {
    fn score(&self, board: &Board) -> Score {
        rules::winner(board).map_or(0, |player| sign(player) * WIN_SCORE)
    }
}

/// Terminal score when the game is won, otherwise open-line threats plus
/// a centre bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    // A line still open to exactly one player is worth 3 with two of their
    // marks and 1 with one. Mixed, empty and full lines are worth nothing.
    fn line_score(board: &Board, line: &[(usize, usize); 3]) -> Score {
        let (mut max, mut min) = (0, 0);
        for &(row, col) in line {
            match board.get(row, col) {
                Cell::Filled(Player::Max) => max += 1,
                Cell::Filled(Player::Min) => min += 1,
                Cell::Empty => {}
            }
        }

        let (player, marks) = match (max, min) {
            (n, 0) if n > 0 => (Player::Max, n),
            (0, n) if n > 0 => (Player::Min, n),
            _ => return 0,
        };
        let value = match marks {
            2 => TWO_IN_LINE,
            1 => ONE_IN_LINE,
            _ => 0,
        };
        sign(player) * value
    }

    /// Sum of line scores and centre bonus, before clamping.
    pub fn raw_score(board: &Board) -> Score {
        let lines: Score = LINES.iter().map(|line| Self::line_score(board, line)).sum();
        let center = match board.get(1, 1) {
            Cell::Filled(player) => sign(player) * CENTER_BONUS,
            Cell::Empty => 0,
        };
        lines + center
    }
}

impl Evaluator for HeuristicEvaluator {
    fn score(&self, board: &Board) -> Score {
        let terminal = TerminalEvaluator.score(board);
        if terminal != 0 {
            return terminal;
        }
        Self::raw_score(board).clamp(-HEURISTIC_BOUND, HEURISTIC_BOUND)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    Terminal,
    Heuristic,
}

impl EvaluatorKind {
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Terminal => Box::new(TerminalEvaluator),
            EvaluatorKind::Heuristic => Box::new(HeuristicEvaluator),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::board::Move;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    // Every position reachable from the empty board with either side starting.
    fn reachable_boards() -> HashSet<Board> {
        fn walk(board: Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
            if !seen.insert((board, to_move)) || rules::is_terminal(&board) {
                return;
            }
            for mv in rules::legal_moves(&board) {
                walk(board.with_move(mv, to_move), to_move.other(), seen);
            }
        }
        let mut seen = HashSet::new();
        walk(Board::new(), Player::Max, &mut seen);
        walk(Board::new(), Player::Min, &mut seen);
        seen.into_iter().map(|(board, _)| board).collect()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(TerminalEvaluator.score(&board("XXX/OO./...")), 10);
        assert_eq!(TerminalEvaluator.score(&board("OX./OX./O.X")), -10);
        assert_eq!(TerminalEvaluator.score(&board("XOX/XOO/OXX")), 0);
        assert_eq!(TerminalEvaluator.score(&board("XX./OO./...")), 0);
    }

    #[test]
    fn test_heuristic_lines_and_center() {
        assert_eq!(HeuristicEvaluator.score(&Board::new()), 0);
        // Centre: 4 single-mark lines plus the centre bonus.
        assert_eq!(HeuristicEvaluator.score(&board(".../.X./...")), 6);
        assert_eq!(HeuristicEvaluator.score(&board(".../.O./...")), -6);
        // Corner: row, column and diagonal.
        assert_eq!(HeuristicEvaluator.score(&board("X../.../...")), 3);
        // Row 0 is blocked, column 0 and the diagonal are X's, column 1 is O's.
        assert_eq!(HeuristicEvaluator.score(&board("XO./.../...")), 1);
        // Rows 0 and 1 cancel; O keeps the anti-diagonal and the centre.
        assert_eq!(HeuristicEvaluator.score(&board("XX./OO./...")), -3);
    }

    #[test]
    fn test_heuristic_is_clamped() {
        let b = board("X.X/OX./.O.");
        assert!(!rules::is_terminal(&b));
        assert_eq!(HeuristicEvaluator::raw_score(&b), 11);
        assert_eq!(HeuristicEvaluator.score(&b), HEURISTIC_BOUND);
    }

    #[test]
    fn test_strategies_agree_on_won_boards() {
        for b in reachable_boards() {
            if rules::winner(&b).is_some() {
                assert_eq!(TerminalEvaluator.score(&b), HeuristicEvaluator.score(&b), "{}", b);
            }
        }
    }

    #[test]
    fn test_heuristic_bound_on_non_terminal_boards() {
        for b in reachable_boards() {
            if !rules::is_terminal(&b) {
                let score = HeuristicEvaluator.score(&b);
                assert!(score > -WIN_SCORE && score < WIN_SCORE, "{} scored {}", b, score);
            }
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let b = board("X.O/.X./...");
        for kind in [EvaluatorKind::Terminal, EvaluatorKind::Heuristic] {
            let evaluator = kind.build();
            assert_eq!(evaluator.score(&b), evaluator.score(&b));
        }
        let mut b = b;
        b.place(Move::new(2, 2), Player::Max);
        assert_eq!(HeuristicEvaluator.score(&b), WIN_SCORE);
    }
}
