use crate::board::{Board, Cell, Move, Player, SIZE};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Every empty cell in row-major order. Search tie-breaking depends on this order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(SIZE * SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            if board.get(row, col) == Cell::Empty {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

pub fn is_legal(board: &Board, row: usize, col: usize) -> bool {
    row < SIZE && col < SIZE && board.get(row, col) == Cell::Empty
}

pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.get(row, col));
        match a {
            Cell::Filled(player) if a == b && b == c => Some(player),
            _ => None,
        }
    })
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.occupied_count() == SIZE * SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_legal_moves_row_major() {
        let moves = legal_moves(&board("X.O/.X./O.."));
        assert_eq!(
            moves,
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
        assert_eq!(legal_moves(&Board::new()).len(), 9);
        assert!(legal_moves(&board("XOX/XOO/OXX")).is_empty());
    }

    #[test]
    fn test_legal_moves_match_occupancy() {
        for s in [".../.../...", "X../.../...", "XO./X../O..", "XOX/OXO/O.."] {
            let b = board(s);
            let moves = legal_moves(&b);
            assert_eq!(moves.len(), 9 - b.occupied_count());
            assert!(moves.iter().all(|m| b.get(m.row, m.col) == Cell::Empty));
        }
    }

    #[test]
    fn test_is_legal() {
        let b = board("X../.O./...");
        assert!(is_legal(&b, 0, 1));
        assert!(!is_legal(&b, 0, 0));
        assert!(!is_legal(&b, 1, 1));
        assert!(!is_legal(&b, 3, 0));
        assert!(!is_legal(&b, 0, 3));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            for player in [Player::Max, Player::Min] {
                let mut b = Board::new();
                for (row, col) in line {
                    b.place(Move::new(row, col), player);
                }
                assert_eq!(winner(&b), Some(player), "line {:?}", line);
                assert!(is_terminal(&b));
            }
        }
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert!(!is_terminal(&Board::new()));

        let b = board("XO./.X./..O");
        assert_eq!(winner(&b), None);
        assert!(!is_terminal(&b));
    }

    #[test]
    fn test_full_board_draw() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(winner(&b), None);
        assert!(is_terminal(&b));
    }
}
