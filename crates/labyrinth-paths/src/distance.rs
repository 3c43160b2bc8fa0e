use labyrinth_core::Cell;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

/// Manhattan distance. Exact on an empty grid with 4-way unit moves, so it
/// is the tightest admissible choice here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        f64::from(manhattan(from, to))
    }

    fn name(&self) -> &str {
        "manhattan"
    }
}

/// Straight-line distance. Admissible but never larger than [`Manhattan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }

    fn name(&self) -> &str {
        "euclidean"
    }
}

/// Constant zero: turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Cell, _to: Cell) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "zero"
    }
}

/// An inner heuristic scaled by a constant weight.
///
/// Weights above 1 overestimate, so shortest paths are no longer
/// guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted<H> {
    pub inner: H,
    pub weight: f64,
}

impl<H: Heuristic> Weighted<H> {
    pub fn new(inner: H, weight: f64) -> Self {
        Self { inner, weight }
    }
}

impl<H: Heuristic> Heuristic for Weighted<H> {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self.weight * self.inner.estimate(from, to)
    }

    fn name(&self) -> &str {
        "weighted"
    }
}
