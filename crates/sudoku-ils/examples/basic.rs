//! Basic example of running the iterated local search solver.

use sudoku_ils::{evaluate, Grid, IlsSolver, SearchConfig};

fn main() {
    let puzzle = Grid::from_string(
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    )
    .expect("valid 81-digit puzzle string");

    println!("Puzzle ({} givens):", puzzle.given_count());
    println!("{}", puzzle);

    // A seeded solver reproduces the exact same run every time.
    let mut solver = IlsSolver::with_config(SearchConfig {
        strength: 10,
        max_iters: 100_000,
        seed: Some(42),
    });

    match solver.solve(&puzzle) {
        Ok(outcome) if outcome.solved => {
            println!("Solved after {} iterations:", outcome.iterations);
            println!("{}", outcome.grid);
        }
        Ok(outcome) => {
            println!(
                "Budget exhausted at score {} (lower is better):",
                outcome.score
            );
            println!("{}", outcome.grid);
            println!("re-check: {}", evaluate(&outcome.grid));
        }
        Err(e) => eprintln!("solve failed: {}", e),
    }
}
