use serde::{Deserialize, Serialize};

use crate::SudokuError;

/// A cell position on the 9x9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// The 3x3 block this position belongs to.
    pub fn block(&self) -> Block {
        Block::new(self.row / 3, self.col / 3)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the nine 3x3 blocks, indexed by (block row, block col) in [0, 2].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub row: usize,
    pub col: usize,
}

impl Block {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine blocks in row-major order.
    pub fn all() -> impl Iterator<Item = Block> {
        (0..9).map(|i| Block::new(i / 3, i % 3))
    }

    /// The block's nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (base_row, base_col) = (self.row * 3, self.col * 3);
        (0..9).map(move |i| Position::new(base_row + i / 3, base_col + i % 3))
    }
}

/// A 9x9 board state. 0 marks an empty cell, 1..=9 a placed digit.
///
/// `Grid` is a plain value: transformations copy it rather than mutate a
/// shared state, so a candidate move can always be scored against an
/// untouched baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[u8; 9]; 9]);

impl Grid {
    /// Build a grid from nested row arrays.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        Self(rows)
    }

    /// Parse a grid from an 81-digit string ('0' or '.' for empty).
    pub fn from_string(s: &str) -> Result<Self, SudokuError> {
        let digits: Vec<u8> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(0),
                '0'..='9' => Ok(c as u8 - b'0'),
                other => Err(SudokuError::InvalidToken(other.to_string())),
            })
            .collect::<Result<_, _>>()?;
        if digits.len() != 81 {
            return Err(SudokuError::InvalidShape(digits.len()));
        }
        let mut rows = [[0u8; 9]; 9];
        for (i, d) in digits.into_iter().enumerate() {
            rows[i / 9][i % 9] = d;
        }
        Ok(Self(rows))
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.0[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, value: u8) {
        self.0[pos.row][pos.col] = value;
    }

    /// Check every cell is in 0..=9. The shape is fixed by the type; this
    /// guards grids built through [`Grid::from_rows`] with stray values.
    pub fn validate(&self) -> Result<(), SudokuError> {
        for pos in Position::all() {
            let value = self.get(pos);
            if value > 9 {
                return Err(SudokuError::InvalidCell {
                    row: pos.row,
                    col: pos.col,
                    value: value as u32,
                });
            }
        }
        Ok(())
    }

    /// Number of non-empty cells.
    pub fn given_count(&self) -> usize {
        Position::all().filter(|&p| self.get(p) != 0).count()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        Position::all().all(|p| self.get(p) != 0)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.0[row][col] {
                    0 => write!(f, ".")?,
                    d => write!(f, "{}", d)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Which cells were given by the puzzle and must never change.
///
/// Derived once from the original clues, before any search; never
/// recomputed from a working grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMask([[bool; 9]; 9]);

impl FixedMask {
    /// Mark every non-empty cell of the original puzzle as fixed.
    pub fn from_puzzle(puzzle: &Grid) -> Self {
        let mut mask = [[false; 9]; 9];
        for pos in Position::all() {
            mask[pos.row][pos.col] = puzzle.get(pos) != 0;
        }
        Self(mask)
    }

    pub fn is_fixed(&self, pos: Position) -> bool {
        self.0[pos.row][pos.col]
    }
}
