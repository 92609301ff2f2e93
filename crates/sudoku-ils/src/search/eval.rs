use crate::{Grid, Position};

/// Cost of a grid: for every row and every column, the number of digits
/// from 1..=9 it is missing. 0 means the grid is a valid solution (block
/// uniqueness is maintained structurally by the move set, so it is not
/// scored here).
///
/// Always computed fresh; scores are never cached across moves.
pub fn evaluate(grid: &Grid) -> u32 {
    let mut score = 0;

    for row in 0..9 {
        let mut seen = [false; 10];
        let mut distinct = 0u32;
        for col in 0..9 {
            let value = grid.get(Position::new(row, col)) as usize;
            if value != 0 && !seen[value] {
                seen[value] = true;
                distinct += 1;
            }
        }
        score += 9 - distinct;
    }

    for col in 0..9 {
        let mut seen = [false; 10];
        let mut distinct = 0u32;
        for row in 0..9 {
            let value = grid.get(Position::new(row, col)) as usize;
            if value != 0 && !seen[value] {
                seen[value] = true;
                distinct += 1;
            }
        }
        score += 9 - distinct;
    }

    score
}
