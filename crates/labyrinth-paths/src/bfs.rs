use std::collections::VecDeque;

use labyrinth_core::Cell;
use log::debug;

use crate::error::SearchError;
use crate::reconstruct::PredecessorMap;
use crate::search::{SearchEngine, SearchOutcome};

/// A reached cell with its distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Cell,
    pub cost: u32,
}

impl SearchEngine<'_> {
    /// Plain FIFO breadth-first search with a visited set.
    ///
    /// Each cell enters the queue at most once, so `explored` counts
    /// dequeued cells. Path lengths match [`search`](Self::search) without a
    /// heuristic.
    pub fn bfs(&self, start: Cell, goal: Cell) -> Result<SearchOutcome, SearchError> {
        let grid = self.grid;
        let start_idx = grid.index(start).ok_or(SearchError::OutOfBounds(start))?;
        if !grid.contains(goal) {
            return Err(SearchError::OutOfBounds(goal));
        }

        let mut visited = vec![false; grid.len()];
        let mut preds = PredecessorMap::new(grid);
        let mut queue = VecDeque::new();
        visited[start_idx] = true;
        queue.push_back(start);

        let mut explored = 0;
        while let Some(current) = queue.pop_front() {
            explored += 1;
            if current == goal {
                let path = preds.reconstruct(start, goal)?;
                debug!("queue bfs {start} -> {goal}: explored {explored}");
                return Ok(SearchOutcome {
                    path: Some(path),
                    explored,
                });
            }
            for next in grid.open_neighbors(current) {
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                preds.set(next, current);
                queue.push_back(next);
            }
        }

        Ok(SearchOutcome {
            path: None,
            explored,
        })
    }

    /// Breadth-first distance map from `source`, in visiting order.
    ///
    /// The source comes first with cost 0. Cells not reachable through open
    /// cells are absent.
    pub fn bfs_map(&self, source: Cell) -> Result<Vec<PathNode>, SearchError> {
        let grid = self.grid;
        let si = grid.index(source).ok_or(SearchError::OutOfBounds(source))?;

        let mut seen = vec![false; grid.len()];
        let mut results = vec![PathNode {
            pos: source,
            cost: 0,
        }];
        seen[si] = true;

        // `results` doubles as the queue.
        let mut head = 0;
        while head < results.len() {
            let PathNode { pos, cost } = results[head];
            head += 1;
            for next in grid.open_neighbors(pos) {
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if seen[ni] {
                    continue;
                }
                seen[ni] = true;
                results.push(PathNode {
                    pos: next,
                    cost: cost + 1,
                });
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Grid;

    const COMB: &str = "\
.....
.#.#.
.#.#.
.#.#.
.....";

    #[test]
    fn queue_bfs_matches_best_first_length() {
        let g = Grid::from_ascii(COMB).unwrap();
        let engine = SearchEngine::new(&g);
        let (start, goal) = (Cell::new(2, 0), Cell::new(2, 2));
        let queued = engine.bfs(start, goal).unwrap();
        let ucs = engine.search(start, goal, None).unwrap();
        assert_eq!(queued.length(), Some(6));
        assert_eq!(queued.length(), ucs.length());
        assert!(queued.explored <= g.open_count());
    }

    #[test]
    fn queue_bfs_without_path() {
        let g = Grid::from_ascii("..#\n###\n#..").unwrap();
        let out = SearchEngine::new(&g)
            .bfs(Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(out.path, None);
        assert_eq!(out.explored, 2);
    }

    #[test]
    fn queue_bfs_same_cell() {
        let g = Grid::from_ascii("...\n...\n...").unwrap();
        let c = Cell::new(2, 1);
        let out = SearchEngine::new(&g).bfs(c, c).unwrap();
        assert_eq!(out.path, Some(vec![c]));
        assert_eq!(out.explored, 1);
        assert_eq!(
            SearchEngine::new(&g).bfs(c, Cell::new(3, 3)),
            Err(SearchError::OutOfBounds(Cell::new(3, 3)))
        );
    }

    #[test]
    fn distance_map() {
        let g = Grid::from_ascii(COMB).unwrap();
        let map = SearchEngine::new(&g).bfs_map(Cell::new(0, 0)).unwrap();
        assert_eq!(map.len(), g.open_count());
        assert_eq!(map[0], PathNode { pos: Cell::new(0, 0), cost: 0 });
        let far = map.iter().find(|n| n.pos == Cell::new(2, 2)).unwrap();
        assert_eq!(far.cost, 4);
        let corner = map.iter().find(|n| n.pos == Cell::new(4, 4)).unwrap();
        assert_eq!(corner.cost, 8);
        // Costs never decrease in visiting order.
        assert!(map.windows(2).all(|w| w[0].cost <= w[1].cost));
    }
}
