//! A square wall/open grid.
//!
//! [`Grid`] stores one [`Tile`] per cell in row-major order. It starts out
//! all-wall; maze generators carve it open and searches read it.

use std::fmt;

use crate::error::GridError;
use crate::geom::Cell;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Open,
}

impl Tile {
    /// ASCII form used by [`Grid::from_ascii`] and `Display`.
    pub const fn rune(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Tile> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Open),
            _ => None,
        }
    }
}

/// A `size × size` grid of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new all-wall grid.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::InvalidSize(size));
        }
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            tiles: vec![Tile::Wall; len],
        })
    }

    /// Parse a grid from ASCII rows: `#` is a wall, `.` is open.
    ///
    /// Leading and trailing blank lines are ignored. The rows must form a
    /// square.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.trim_matches('\n').lines().collect();
        let size = rows.len() as i32;
        let mut grid = Self::new(size)?;
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != rows.len() {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Cell::new(r as i32, c as i32);
                let tile = Tile::from_rune(ch).ok_or(GridError::InvalidRune { ch, pos })?;
                grid.set(pos, tile)?;
            }
        }
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `c` lies inside `[0, size)` on both axes.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.flat_index(self.size).is_some()
    }

    /// Convert a cell to its flat row-major index. Returns `None` if out of
    /// range.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        c.flat_index(self.size)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        let size = self.size as usize;
        Cell::new((idx / size) as i32, (idx % size) as i32)
    }

    /// Get the tile at a cell, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.at(c) == Some(Tile::Open)
    }

    /// Set the tile at a cell. Kept private so callers can only open cells.
    fn set(&mut self, c: Cell, tile: Tile) -> Result<(), GridError> {
        let i = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Open a cell. Only maze generation and the search endpoint unblock
    /// step should call this.
    ///
    /// Opening is the only mutation available; walls cannot be written back:
    ///
    /// ```compile_fail
    /// use labyrinth_core::{Cell, Grid, Tile};
    /// let mut g = Grid::new(3).unwrap();
    /// g.set(Cell::new(1, 1), Tile::Wall).unwrap();
    /// ```
    pub fn set_open(&mut self, c: Cell) -> Result<(), GridError> {
        self.set(c, Tile::Open)
    }

    /// Orthogonal neighbours of `c` that lie inside the grid, in east, west,
    /// south, north order.
    pub fn neighbors4(&self, c: Cell) -> impl Iterator<Item = Cell> {
        c.neighbors4().into_iter().filter(|&n| self.contains(n))
    }

    /// Like [`neighbors4`](Self::neighbors4), keeping only open cells.
    pub fn open_neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> {
        c.neighbors4().into_iter().filter(|&n| self.is_open(n))
    }

    /// Count cells equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.count(Tile::Open)
    }

    /// Iterate over `(Cell, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.cell_at(i), t))
    }

    /// Iterate over open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> {
        self.iter()
            .filter(|&(_, t)| t == Tile::Open)
            .map(|(c, _)| c)
    }

    /// ASCII rows, one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.size as usize)
            .map(|row| row.iter().map(|t| t.rune()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: Vec<String>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr { rows: self.rows() }.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_ascii(&repr.rows.join("\n")).map_err(serde::de::Error::custom)
    }
}
