use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Block, FixedMask, Grid};

use super::moves::{apply_swap, generate_swaps};

/// Perturb the grid with `strength` random intra-block swaps, accepted
/// unconditionally (no scoring). A drawn block without legal swaps spends
/// its turn doing nothing. Pure diversification for escaping local optima.
pub fn random_walk(mut grid: Grid, fixed: &FixedMask, strength: u32, rng: &mut impl Rng) -> Grid {
    for _ in 0..strength {
        let block = Block::new(rng.gen_range(0..3), rng.gen_range(0..3));
        let swaps = generate_swaps(fixed, block);
        if let Some(&swap) = swaps.choose(rng) {
            grid = apply_swap(&grid, swap);
        }
    }
    grid
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
    fn preserves_fixed_cells_and_block_contents() {
        let puzzle = fixtures::classic_puzzle();
        let fixed = FixedMask::from_puzzle(&puzzle);
        let mut rng = SmallRng::seed_from_u64(9);
        let start = generate_start_state(&puzzle, &fixed, &mut rng);

        let walked = random_walk(start, &fixed, 500, &mut rng);

        for pos in Position::all() {
            if fixed.is_fixed(pos) {
                assert_eq!(walked.get(pos), puzzle.get(pos));
            }
        }
        // Swaps only permute values inside a block, so every block still
        // holds each of 1..=9 exactly once.
        for block in Block::all() {
            let mut seen = [false; 10];
            for pos in block.cells() {
                let value = walked.get(pos) as usize;
                assert!(value != 0 && !seen[value]);
                seen[value] = true;
            }
        }
    }

    #[test]
    fn frozen_board_walks_in_place() {
        let solved = fixtures::solved_grid();
        let fixed = FixedMask::from_puzzle(&solved);
        let mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(random_walk(solved, &fixed, 100, &mut rng), solved);
    }

    #[test]
    fn zero_strength_is_the_identity() {
        let puzzle = fixtures::classic_puzzle();
        let fixed = FixedMask::from_puzzle(&puzzle);
        let mut rng = SmallRng::seed_from_u64(4);
        let start = generate_start_state(&puzzle, &fixed, &mut rng);
        assert_eq!(random_walk(start, &fixed, 0, &mut rng), start);
    }
}
