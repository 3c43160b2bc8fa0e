//! Best-first search: uniform-cost (BFS-equivalent) and A*.
//!
//! One algorithm serves both strategies. Without a heuristic the queue is
//! ordered by path cost alone, which on a unit-cost grid expands cells in
//! breadth-first order; with an admissible heuristic it is A*.
//!
//! The frontier is a `BinaryHeap` without decrease-key. Every improvement
//! pushes a fresh entry and an entry whose recorded cost no longer matches
//! the cost map is skipped when popped. Ties on priority go to the entry
//! pushed first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use labyrinth_core::{Cell, Grid};
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::distance::Zero;
use crate::error::SearchError;
use crate::reconstruct::PredecessorMap;
use crate::traits::Heuristic;

/// Sentinel cost for cells not reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

/// Result of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells from start to goal inclusive, or `None` if the goal is
    /// unreachable.
    pub path: Option<Vec<Cell>>,
    /// Number of frontier pops, stale ones included.
    pub explored: usize,
}

impl SearchOutcome {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in edges.
    pub fn length(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Frontier entry, ordered so that `BinaryHeap` pops the lowest priority
/// first and, among equal priorities, the lowest sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    priority: OrderedFloat<f64>,
    cost: u32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Force `start` and `goal` open so a search can begin and end on them.
///
/// Returns how many cells were flipped. Run this once, before sharing the
/// grid between concurrent searches.
pub fn unblock_endpoints(grid: &mut Grid, start: Cell, goal: Cell) -> Result<usize, SearchError> {
    for c in [start, goal] {
        if !grid.contains(c) {
            return Err(SearchError::OutOfBounds(c));
        }
    }
    let mut flipped = 0;
    for c in [start, goal] {
        if !grid.is_open(c) {
            grid.set_open(c)?;
            debug!("unblocked search endpoint {c}");
            flipped += 1;
        }
    }
    Ok(flipped)
}

/// Unblock the endpoints, then search. BFS when `heuristic` is `None`, A*
/// otherwise.
pub fn search(
    grid: &mut Grid,
    start: Cell,
    goal: Cell,
    heuristic: Option<&dyn Heuristic>,
) -> Result<SearchOutcome, SearchError> {
    SearchEngine::prepare(grid, start, goal)?.search(start, goal, heuristic)
}

/// Read-only search front end over a borrowed [`Grid`].
///
/// The engine never mutates the grid, so any number of engines may search
/// the same grid at once. Walls are impassable.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'g> {
    pub(crate) grid: &'g Grid,
}

impl<'g> SearchEngine<'g> {
    /// Wrap a grid whose endpoints are already open.
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Unblock `start` and `goal`, then wrap the grid read-only.
    pub fn prepare(grid: &'g mut Grid, start: Cell, goal: Cell) -> Result<Self, SearchError> {
        unblock_endpoints(grid, start, goal)?;
        let grid: &'g Grid = grid;
        Ok(Self { grid })
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Search from `start` to `goal`. `None` runs uniform-cost search, which
    /// behaves as BFS on this unit-cost grid.
    pub fn search(
        &self,
        start: Cell,
        goal: Cell,
        heuristic: Option<&dyn Heuristic>,
    ) -> Result<SearchOutcome, SearchError> {
        match heuristic {
            Some(h) => self.best_first(start, goal, h),
            None => self.best_first(start, goal, &Zero),
        }
    }

    /// Best-first search with edge cost 1 and priority `cost + h(cell, goal)`.
    ///
    /// With an admissible heuristic the returned path has the minimum
    /// number of edges.
    pub fn best_first<H: Heuristic + ?Sized>(
        &self,
        start: Cell,
        goal: Cell,
        heuristic: &H,
    ) -> Result<SearchOutcome, SearchError> {
        let grid = self.grid;
        let start_idx = grid.index(start).ok_or(SearchError::OutOfBounds(start))?;
        let goal_idx = grid.index(goal).ok_or(SearchError::OutOfBounds(goal))?;

        if !grid.is_open(start) || !grid.is_open(goal) {
            warn!("searching {start} -> {goal} with a walled endpoint; call unblock_endpoints first");
        }

        let mut cost = vec![UNREACHABLE; grid.len()];
        let mut preds = PredecessorMap::new(grid);
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut seq: u64 = 0;

        cost[start_idx] = 0;
        open.push(Entry {
            priority: OrderedFloat(heuristic.estimate(start, goal)),
            cost: 0,
            seq,
            idx: start_idx,
        });

        let mut explored = 0;
        while let Some(entry) = open.pop() {
            explored += 1;

            // Skip stale entries.
            if entry.cost != cost[entry.idx] {
                continue;
            }

            let current = grid.cell_at(entry.idx);
            if entry.idx == goal_idx {
                let path = preds.reconstruct(start, goal)?;
                debug!(
                    "{} search {start} -> {goal}: explored {explored}, length {}",
                    heuristic.name(),
                    path.len() - 1
                );
                return Ok(SearchOutcome {
                    path: Some(path),
                    explored,
                });
            }

            let tentative = entry.cost + 1;
            for next in grid.open_neighbors(current) {
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if tentative >= cost[ni] {
                    continue;
                }
                cost[ni] = tentative;
                preds.set(next, current);
                seq += 1;
                open.push(Entry {
                    priority: OrderedFloat(f64::from(tentative) + heuristic.estimate(next, goal)),
                    cost: tentative,
                    seq,
                    idx: ni,
                });
            }
        }

        debug!(
            "{} search {start} -> {goal}: no path, explored {explored}",
            heuristic.name()
        );
        Ok(SearchOutcome {
            path: None,
            explored,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let out = SearchOutcome {
            path: Some(vec![Cell::new(1, 1), Cell::new(1, 2)]),
            explored: 3,
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }
}
