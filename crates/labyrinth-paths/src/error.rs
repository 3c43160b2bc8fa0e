use std::fmt;

use labyrinth_core::{Cell, GridError};

/// Errors raised by searches.
///
/// Failing to find a path is not an error; it is reported as an absent path
/// in [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds(Cell),
    /// The predecessor chain from `goal` did not lead back to `start`.
    ///
    /// Only a corrupted search state can produce this.
    BrokenChain { start: Cell, goal: Cell, steps: usize },
    /// The grid rejected a mutation.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "search endpoint {c} is outside the grid"),
            Self::BrokenChain { start, goal, steps } => write!(
                f,
                "predecessor chain from {goal} does not reach {start} (gave up after {steps} steps)"
            ),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_and_source() {
        let err = SearchError::OutOfBounds(Cell::new(0, 9));
        assert_eq!(err.to_string(), "search endpoint (0, 9) is outside the grid");
        assert!(err.source().is_none());

        let err: SearchError = GridError::InvalidSize(0).into();
        assert!(matches!(err, SearchError::Grid(GridError::InvalidSize(0))));
        assert!(err.source().is_some());
    }
}
