use labyrinth_core::Cell;

/// Estimate of the remaining cost from a cell to the goal.
///
/// A heuristic must be non-negative. It must never overestimate the true
/// remaining cost (admissible) for A* to return shortest paths.
pub trait Heuristic {
    /// Estimated cost of moving from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> f64;

    /// Short name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        (**self).estimate(from, to)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
