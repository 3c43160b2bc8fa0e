//! Grid coordinates: [`Cell`].
//!
//! Rows grow downward and columns grow to the right, so `(0, 0)` is the
//! top-left corner of a grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A `(row, col)` coordinate pair.
///
/// Cells compare structurally and order row-major, so they can be used as
/// map keys and sorted into reading order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Unit offsets in neighbor enumeration order: east, west, south, north.
///
/// Searches number their queue insertions in this order, so it decides
/// which of two equally good cells is expanded first.
pub const DIRECTIONS_4: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(-1, 0),
];

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in [`DIRECTIONS_4`] order. Not bounds
    /// checked; see `Grid::neighbors4` for the clipped version.
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        DIRECTIONS_4.map(|d| self + d)
    }

    /// The cell halfway between `self` and `other`, rounding toward `self`.
    #[inline]
    pub const fn midpoint(self, other: Cell) -> Self {
        Self {
            row: self.row + (other.row - self.row) / 2,
            col: self.col + (other.col - self.col) / 2,
        }
    }

    /// Row-major index of `self` in a `size × size` square, or `None` if it
    /// lies outside.
    #[inline]
    pub const fn flat_index(self, size: i32) -> Option<usize> {
        if self.row < 0 || self.row >= size || self.col < 0 || self.col >= size {
            return None;
        }
        Some(self.row as usize * size as usize + self.col as usize)
    }

    /// Whether both coordinates are odd.
    #[inline]
    pub const fn is_odd(self) -> bool {
        self.row % 2 != 0 && self.col % 2 != 0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
