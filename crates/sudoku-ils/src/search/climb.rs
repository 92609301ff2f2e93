use rand::Rng;

use crate::{Block, FixedMask, Grid};

use super::eval::evaluate;
use super::moves::{apply_swap, generate_swaps};

/// One round of best-improvement search over a single random block.
///
/// Every candidate swap is applied to the unmodified input grid and scored
/// independently. Candidates are accepted into the running best via `<=`,
/// so an equal-scoring move can replace the current grid; with the move
/// generator's deterministic enumeration, ties resolve to the last equal
/// candidate. Returns `(best_grid, best_score, improved)` where `improved`
/// means the score strictly dropped; the best candidate is returned even
/// when it merely ties the input. An empty move set (block with at most
/// one free cell) returns the input unchanged.
///
/// Deliberately scoped to one block per call rather than a full sweep of
/// all nine; the controller compensates by calling it to convergence.
pub fn hill_climb_step(grid: &Grid, fixed: &FixedMask, rng: &mut impl Rng) -> (Grid, u32, bool) {
    let current_score = evaluate(grid);

    let block = Block::new(rng.gen_range(0..3), rng.gen_range(0..3));

    let mut best_grid = *grid;
    let mut best_score = current_score;
    for swap in generate_swaps(fixed, block) {
        let candidate = apply_swap(grid, swap);
        let score = evaluate(&candidate);
        if score <= best_score {
            best_score = score;
            best_grid = candidate;
        }
    }

    (best_grid, best_score, best_score < current_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures;
    use crate::search::init::generate_start_state;
    use crate::Position;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn never_returns_a_worse_score() {
        let puzzle = fixtures::classic_puzzle();
        let fixed = FixedMask::from_puzzle(&puzzle);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut grid = generate_start_state(&puzzle, &fixed, &mut rng);
        for _ in 0..200 {
            let before = evaluate(&grid);
            let (next, score, improved) = hill_climb_step(&grid, &fixed, &mut rng);
            assert!(score <= before);
            assert_eq!(score, evaluate(&next));
            assert_eq!(improved, score < before);
            grid = next;
        }
    }

    #[test]
    fn frozen_board_is_a_no_op() {
        let solved = fixtures::solved_grid();
        let fixed = FixedMask::from_puzzle(&solved);
        let mut rng = SmallRng::seed_from_u64(1);
        let (grid, score, improved) = hill_climb_step(&solved, &fixed, &mut rng);
        assert_eq!(grid, solved);
        assert_eq!(score, 0);
        assert!(!improved);
    }

    #[test]
    fn input_grid_is_never_mutated() {
        let puzzle = fixtures::classic_puzzle();
        let fixed = FixedMask::from_puzzle(&puzzle);
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = generate_start_state(&puzzle, &fixed, &mut rng);
        let baseline = grid;
        let _ = hill_climb_step(&grid, &fixed, &mut rng);
        assert_eq!(grid, baseline);
    }

    #[test]
    fn fixed_cells_survive_descent() {
        let puzzle = fixtures::classic_puzzle();
        let fixed = FixedMask::from_puzzle(&puzzle);
        let mut rng = SmallRng::seed_from_u64(5);
        let mut grid = generate_start_state(&puzzle, &fixed, &mut rng);
        for _ in 0..100 {
            grid = hill_climb_step(&grid, &fixed, &mut rng).0;
        }
        for pos in Position::all() {
            if fixed.is_fixed(pos) {
                assert_eq!(grid.get(pos), puzzle.get(pos));
            }
        }
    }
}
