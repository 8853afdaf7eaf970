use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Max => 'X',
            Player::Min => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid, row-major. Being `Copy`, every clone is an independent
/// snapshot, which is what the search forks per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    spots: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            spots: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.spots[row][col]
    }

    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.spots
    }

    pub fn count(&self, player: Player) -> usize {
        self.spots
            .iter()
            .flatten()
            .filter(|&&spot| spot == Cell::Filled(player))
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        self.count(Player::Max) + self.count(Player::Min)
    }

    /// Marks alternate, so the two counts never drift more than one apart.
    pub fn is_well_formed(&self) -> bool {
        self.count(Player::Max).abs_diff(self.count(Player::Min)) <= 1
    }

    // Callers check legality first; the search only plays moves it enumerated.
    pub fn place(&mut self, mv: Move, player: Player) {
        debug_assert_eq!(self.spots[mv.row][mv.col], Cell::Empty);
        self.spots[mv.row][mv.col] = Cell::Filled(player);
    }

    /// Fork: a copy of this board with `mv` played by `player`.
    pub fn with_move(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.place(mv, player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses three rows of `X`, `O` and `.`/`_`, separated by `/` or whitespace.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != SIZE {
            bail!("expected {} rows, got {}", SIZE, rows.len());
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let spots: Vec<char> = line.chars().collect();
            if spots.len() != SIZE {
                bail!("row {} has {} cells, expected {}", row, spots.len(), SIZE);
            }
            for (col, symbol) in spots.into_iter().enumerate() {
                board.spots[row][col] = match symbol {
                    'X' | 'x' => Cell::Filled(Player::Max),
                    'O' | 'o' => Cell::Filled(Player::Min),
                    '.' | '_' => Cell::Empty,
                    other => bail!("unknown cell symbol {:?}", other),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.spots {
            for spot in row {
                let symbol = match spot {
                    Cell::Empty => '.',
                    Cell::Filled(player) => player.symbol(),
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
