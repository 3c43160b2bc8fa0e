//! Perfect-maze generation with randomized Prim.
//!
//! Rooms live at odd `(row, col)` coordinates and the wall between two
//! neighbouring rooms sits halfway between them. Growth starts from one room
//! and repeatedly knocks down a random frontier wall whose far room has not
//! been reached yet. Walls leading to reached rooms are discarded, so the
//! open cells always form a tree.

use labyrinth_core::{Cell, Grid, GridError};
use log::{debug, trace};
use rand::Rng;

/// Offsets from a room to the neighbouring rooms, two cells away.
const ROOM_STEPS: [Cell; 4] = [
    Cell::new(0, 2),
    Cell::new(0, -2),
    Cell::new(2, 0),
    Cell::new(-2, 0),
];

/// A candidate wall between a reached room and a possibly unreached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierWall {
    /// The wall cell to open.
    pub wall: Cell,
    /// The already reached room.
    pub source: Cell,
    /// The room on the other side.
    pub target: Cell,
}

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over a fresh all-wall `size × size` grid.
    pub fn new(size: i32, rng: R) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(size)?, rng))
    }

    /// Create a generator over an existing grid, expected to be all-wall.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator and return its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve a perfect maze with randomized Prim growth.
    ///
    /// Grids smaller than 3 cannot hold a room inside a border; only `(0, 0)`
    /// is opened. Returns the number of walls knocked down, one fewer than
    /// the number of rooms reached.
    ///
    /// Every cell touched lies strictly inside the border, so an error is
    /// only possible if the grid changes size underneath the generator.
    pub fn prim(&mut self) -> Result<usize, GridError> {
        let size = self.grid.size();
        if size < 3 {
            self.grid.set_open(Cell::ZERO)?;
            trace!("{size}x{size} grid is too small for a maze; opened (0, 0)");
            return Ok(0);
        }

        // Odd coordinates 1, 3, ... up to size - 2.
        let rooms_per_side = (size - 1) / 2;
        let start = Cell::new(
            2 * self.rng.random_range(0..rooms_per_side) + 1,
            2 * self.rng.random_range(0..rooms_per_side) + 1,
        );

        let mut visited = vec![false; self.grid.len()];
        let mut frontier: Vec<FrontierWall> = Vec::new();

        self.grid.set_open(start)?;
        if let Some(si) = self.grid.index(start) {
            visited[si] = true;
        }
        push_walls_around(size, start, &mut frontier);

        let mut broken = 0;
        while !frontier.is_empty() {
            let pick = self.rng.random_range(0..frontier.len());
            let FrontierWall { wall, target, .. } = frontier.swap_remove(pick);
            let Some(ti) = self.grid.index(target) else {
                continue;
            };
            if visited[ti] {
                continue;
            }
            self.grid.set_open(wall)?;
            self.grid.set_open(target)?;
            visited[ti] = true;
            broken += 1;
            push_walls_around(size, target, &mut frontier);
        }

        debug!(
            "prim maze {size}x{size} from {start}: {} rooms, {broken} walls broken",
            broken + 1
        );
        Ok(broken)
    }
}

/// Generate a perfect `size × size` maze with `rng`.
pub fn generate<R: Rng>(size: i32, rng: R) -> Result<Grid, GridError> {
    let mut mg = MazeGen::new(size, rng)?;
    mg.prim()?;
    Ok(mg.into_grid())
}

/// Push the frontier walls of `room` whose target lies strictly inside the
/// border of a `size × size` grid.
fn push_walls_around(size: i32, room: Cell, frontier: &mut Vec<FrontierWall>) {
    for step in ROOM_STEPS {
        let target = room + step;
        if target.row > 0 && target.row < size - 1 && target.col > 0 && target.col < size - 1 {
            frontier.push(FrontierWall {
                wall: room.midpoint(target),
                source: room,
                target,
            });
        }
    }
}
