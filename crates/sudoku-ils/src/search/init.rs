use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Block, FixedMask, Grid};

/// Build the starting state: every block's free cells receive a random
/// permutation of the digits its fixed cells are missing, written in
/// row-major order. Each block then holds 1..=9 exactly once, and intra-
/// block swaps keep it that way for the rest of the search.
pub fn generate_start_state(puzzle: &Grid, fixed: &FixedMask, rng: &mut impl Rng) -> Grid {
    let mut grid = *puzzle;

    for block in Block::all() {
        let mut present = [false; 10];
        for pos in block.cells() {
            if fixed.is_fixed(pos) {
                present[grid.get(pos) as usize] = true;
            }
        }

        let mut remaining: Vec<u8> = (1..=9).filter(|&d| !present[d as usize]).collect();
        remaining.shuffle(rng);

        let mut next = remaining.into_iter();
        for pos in block.cells() {
            if !fixed.is_fixed(pos) {
                // A block with distinct clues has exactly as many missing
                // digits as free cells; duplicate clues leave the surplus
                // cells empty, which evaluate() keeps scoring as missing.
                grid.set(pos, next.next().unwrap_or(0));
            }
        }
    }

    grid
}
