//! Iterated local search over completed-block Sudoku states.
//!
//! The controller alternates two phases: hill climbing to convergence
//! (best-improvement swaps inside one random block per step) and a random
//! walk that unconditionally applies a burst of swaps to escape the local
//! optimum the descent got stuck in.

mod climb;
mod eval;
mod init;
mod moves;
mod walk;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::{FixedMask, Grid, SudokuError};

pub use eval::evaluate;

/// Tuning knobs for one search run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of random swaps applied per escape phase.
    pub strength: u32,
    /// Iteration budget: maximum number of descent/escape rounds.
    pub max_iters: u32,
    /// Seed for all random choices; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strength: 10,
            max_iters: 10_000,
            seed: None,
        }
    }
}

/// Result of a search run.
///
/// `solved == false` with a positive score is the normal outcome when the
/// iteration budget runs out; it is not an error. The grid is the last
/// state the search reached, not the best state ever visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub grid: Grid,
    pub score: u32,
    pub solved: bool,
    /// Descent/escape rounds consumed before returning.
    pub iterations: u32,
}

/// Iterated local search solver.
///
/// Owns the random generator: every choice made during a solve (initial
/// block permutations, block picks, walk swaps) draws from it, so a fixed
/// seed reproduces the whole run. Instances are self-contained; racing
/// several differently-seeded solvers on one puzzle needs no coordination.
pub struct IlsSolver {
    config: SearchConfig,
    rng: SmallRng,
}

impl Default for IlsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IlsSolver {
    /// Create a solver with the default configuration, seeded from entropy.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a solver with a custom configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create a default-configured solver with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SearchConfig {
            seed: Some(seed),
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search on one puzzle (0 = empty cell).
    ///
    /// Fails fast on out-of-range cell values; otherwise always returns an
    /// outcome, solved or not.
    pub fn solve(&mut self, puzzle: &Grid) -> Result<SearchOutcome, SudokuError> {
        puzzle.validate()?;
        let fixed = FixedMask::from_puzzle(puzzle);

        let mut grid = init::generate_start_state(puzzle, &fixed, &mut self.rng);
        let mut score = evaluate(&grid);
        debug!("start state score {}", score);

        for iteration in 0..self.config.max_iters {
            // Descent: ride the hill climber until it stops improving.
            let mut improved = true;
            while improved && score > 0 {
                let (next, next_score, step_improved) =
                    climb::hill_climb_step(&grid, &fixed, &mut self.rng);
                grid = next;
                score = next_score;
                improved = step_improved;
            }

            if score == 0 {
                info!("solved after {} iterations", iteration);
                return Ok(SearchOutcome {
                    grid,
                    score,
                    solved: true,
                    iterations: iteration,
                });
            }

            // Escape: stuck at a local optimum, perturb and go again.
            debug!(
                "iteration {}: local optimum at score {}, walking {} swaps",
                iteration, score, self.config.strength
            );
            grid = walk::random_walk(grid, &fixed, self.config.strength, &mut self.rng);
            score = evaluate(&grid);
        }

        info!(
            "budget of {} iterations exhausted, final score {}",
            self.config.max_iters, score
        );
        Ok(SearchOutcome {
            grid,
            score,
            solved: false,
            iterations: self.config.max_iters,
        })
    }
}
