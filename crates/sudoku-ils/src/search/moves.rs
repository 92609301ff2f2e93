use crate::{Block, FixedMask, Grid, Position};

/// An unordered pair of distinct free cells within one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub a: Position,
    pub b: Position,
}

/// The block's non-fixed cells, in row-major order.
pub fn free_cells(fixed: &FixedMask, block: Block) -> Vec<Position> {
    block.cells().filter(|&p| !fixed.is_fixed(p)).collect()
}

/// All candidate swaps for one block: every unordered pair of its free
/// cells, in lexicographic order over the row-major free-cell indices.
/// The order is deterministic; the hill climber's tie-breaking depends
/// on it. A block with at most one free cell yields no swaps.
pub fn generate_swaps(fixed: &FixedMask, block: Block) -> Vec<Swap> {
    let cells = free_cells(fixed, block);
    let mut swaps = Vec::with_capacity(cells.len() * (cells.len().saturating_sub(1)) / 2);
    for i in 0..cells.len() {
        for j in i + 1..cells.len() {
            swaps.push(Swap {
                a: cells[i],
                b: cells[j],
            });
        }
    }
    swaps
}

/// Exchange two cell values, returning a new grid. The input grid is never
/// touched, so many candidates can be scored against the same baseline.
pub fn apply_swap(grid: &Grid, swap: Swap) -> Grid {
    let mut next = *grid;
    let tmp = next.get(swap.a);
    next.set(swap.a, next.get(swap.b));
    next.set(swap.b, tmp);
    next
}
