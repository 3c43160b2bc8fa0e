//! Connectivity checks over the open cells of a grid.
//!
//! Two open cells are adjacent when they are orthogonal neighbours. A grid
//! is a perfect maze when this graph is a tree: connected and with exactly
//! one edge fewer than it has cells.

use labyrinth_core::{Cell, Grid};

/// Label every open cell with a connected-component ID.
///
/// Walls get `None`. IDs are assigned in row-major order of each
/// component's first cell.
pub fn component_labels(grid: &Grid) -> Vec<Option<usize>> {
    let mut labels: Vec<Option<usize>> = vec![None; grid.len()];
    let mut stack: Vec<Cell> = Vec::new();
    let mut label = 0;

    for start in grid.open_cells() {
        let Some(si) = grid.index(start) else {
            continue;
        };
        if labels[si].is_some() {
            continue;
        }

        // Iterative DFS from `start`.
        stack.clear();
        stack.push(start);
        labels[si] = Some(label);

        while let Some(c) = stack.pop() {
            for n in grid.open_neighbors(c) {
                if let Some(ni) = grid.index(n) {
                    if labels[ni].is_none() {
                        labels[ni] = Some(label);
                        stack.push(n);
                    }
                }
            }
        }

        label += 1;
    }

    labels
}

/// Number of connected components among open cells.
pub fn component_count(grid: &Grid) -> usize {
    component_labels(grid)
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |l| l + 1)
}

/// Number of adjacent open-cell pairs, each pair counted once.
pub fn open_edge_count(grid: &Grid) -> usize {
    grid.open_cells()
        .map(|c| {
            [c.shift(0, 1), c.shift(1, 0)]
                .into_iter()
                .filter(|&n| grid.is_open(n))
                .count()
        })
        .sum()
}

/// Whether the open cells form a spanning tree: non-empty, connected and
/// acyclic.
pub fn is_perfect(grid: &Grid) -> bool {
    let open = grid.open_count();
    open > 0 && component_count(grid) == 1 && open_edge_count(grid) == open - 1
}
