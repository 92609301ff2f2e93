//! Sudoku solving via iterated local search.
//!
//! The engine fills each 3x3 block with a permutation of its missing digits,
//! then alternates best-improvement hill climbing (intra-block swaps) with
//! random-walk perturbations until the row/column cost reaches zero or the
//! iteration budget runs out. Block uniqueness holds from initialization on
//! and is preserved by every move, so only rows and columns are scored.
//!
//! # Example
//!
//! ```
//! use sudoku_ils::{Grid, IlsSolver};
//!
//! let puzzle = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//!
//! let mut solver = IlsSolver::with_seed(42);
//! let outcome = solver.solve(&puzzle).unwrap();
//! if outcome.solved {
//!     println!("{}", outcome.grid);
//! }
//! ```

mod error;
mod grid;
pub mod puzzle;
mod search;

pub use error::SudokuError;
pub use grid::{Block, FixedMask, Grid, Position};
pub use search::{evaluate, IlsSolver, SearchConfig, SearchOutcome};
