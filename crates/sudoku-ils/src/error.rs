use thiserror::Error;

/// Errors produced while building or loading a puzzle.
///
/// Running out of iteration budget is not an error; the solver reports it
/// through [`SearchOutcome::solved`](crate::SearchOutcome).
#[derive(Debug, Error)]
pub enum SudokuError {
    /// The input did not contain exactly 81 cells.
    #[error("expected 81 cells, got {0}")]
    InvalidShape(usize),

    /// A cell value fell outside 0..=9.
    #[error("cell ({row}, {col}) holds {value}, outside 0..=9")]
    InvalidCell { row: usize, col: usize, value: u32 },

    /// A puzzle-file token was not a digit run.
    #[error("unrecognized puzzle token {0:?}")]
    InvalidToken(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
