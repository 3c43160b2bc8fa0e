use std::fmt;

use crate::geom::Cell;

/// Errors raised while building or mutating a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested side length is not positive.
    InvalidSize(i32),
    /// A cell outside `[0, size)` was written.
    OutOfBounds(Cell),
    /// ASCII rows are ragged or do not form a square.
    InconsistentSize(String),
    /// An ASCII character other than `#` or `.` was found.
    InvalidRune { ch: char, pos: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(f, "grid size must be at least 1, got {size}"),
            Self::OutOfBounds(c) => write!(f, "cell {c} is outside the grid"),
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
