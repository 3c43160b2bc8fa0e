//! Predecessor bookkeeping and path reconstruction.

use labyrinth_core::{Cell, Grid};

use crate::error::SearchError;

/// Maps each reached cell to the cell it was reached from on its best known
/// path.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    size: i32,
    parent: Vec<Option<Cell>>,
}

impl PredecessorMap {
    /// An empty map covering every cell of `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            parent: vec![None; grid.len()],
        }
    }

    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        c.flat_index(self.size)
    }

    /// Record that `cell` is reached from `from`. Does nothing if `cell` is
    /// out of range.
    pub fn set(&mut self, cell: Cell, from: Cell) {
        if let Some(i) = self.idx(cell) {
            self.parent[i] = Some(from);
        }
    }

    /// The predecessor of `cell`, if one was recorded.
    pub fn get(&self, cell: Cell) -> Option<Cell> {
        self.idx(cell).and_then(|i| self.parent[i])
    }

    /// Walk back from `goal` to `start` and return the path in forward
    /// order, both endpoints included.
    ///
    /// A sound chain has fewer than `size²` links; a missing link or a
    /// longer walk yields [`SearchError::BrokenChain`].
    pub fn reconstruct(&self, start: Cell, goal: Cell) -> Result<Vec<Cell>, SearchError> {
        let limit = self.parent.len();
        let mut path = vec![goal];
        let mut cur = goal;
        let mut steps = 0;
        while cur != start {
            let prev = match self.get(cur) {
                Some(prev) if steps < limit => prev,
                _ => return Err(SearchError::BrokenChain { start, goal, steps }),
            };
            path.push(prev);
            cur = prev;
            steps += 1;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(size: i32) -> PredecessorMap {
        PredecessorMap::new(&Grid::new(size).unwrap())
    }

    #[test]
    fn rebuilds_forward_path() {
        let mut m = map(3);
        m.set(Cell::new(0, 1), Cell::new(0, 0));
        m.set(Cell::new(1, 1), Cell::new(0, 1));
        m.set(Cell::new(1, 2), Cell::new(1, 1));
        let path = m.reconstruct(Cell::new(0, 0), Cell::new(1, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn start_equals_goal() {
        let m = map(2);
        let path = m.reconstruct(Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert_eq!(path, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn missing_link_is_broken_chain() {
        let mut m = map(3);
        m.set(Cell::new(2, 2), Cell::new(2, 1));
        let err = m.reconstruct(Cell::new(0, 0), Cell::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            SearchError::BrokenChain {
                start: Cell::new(0, 0),
                goal: Cell::new(2, 2),
                steps: 1,
            }
        );
    }

    #[test]
    fn cycle_is_cut_off() {
        let mut m = map(2);
        m.set(Cell::new(0, 1), Cell::new(1, 1));
        m.set(Cell::new(1, 1), Cell::new(0, 1));
        let err = m.reconstruct(Cell::new(0, 0), Cell::new(0, 1)).unwrap_err();
        assert!(matches!(err, SearchError::BrokenChain { steps: 4, .. }));
    }

    #[test]
    fn covers_the_same_cells_as_the_grid() {
        let g = Grid::new(3).unwrap();
        let mut m = PredecessorMap::new(&g);
        for (c, _) in g.iter() {
            m.set(c, Cell::ZERO);
        }
        for (c, _) in g.iter() {
            assert_eq!(m.get(c), Some(Cell::ZERO));
        }
        for c in [Cell::new(0, 3), Cell::new(3, 0), Cell::new(-1, 2)] {
            assert!(!g.contains(c));
            assert_eq!(m.get(c), None);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut m = map(2);
        m.set(Cell::new(5, 5), Cell::new(0, 0));
        assert_eq!(m.get(Cell::new(5, 5)), None);
        assert_eq!(m.get(Cell::new(1, 1)), None);
    }
}
