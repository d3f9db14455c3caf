//! Error types for grid construction and validation.

use crate::geom::Point;

/// Errors arising from building a grid or validating coordinates against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input does not describe a non-empty rectangle.
    #[error("invalid grid: {reason}")]
    InvalidGrid {
        /// What went wrong.
        reason: String,
    },
    /// A coordinate lies outside the grid.
    #[error("coordinate {point} out of bounds for a {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: usize, cols: usize },
    /// A cell holds an integer that is not a known marker code.
    #[error("invalid cell marker {value} at {pos}")]
    InvalidMarker { value: i32, pos: Point },
    /// A token in a text grid is not an integer. `line` is 1-based.
    #[error("line {line}: cannot parse {token:?} as an integer")]
    Parse { line: usize, token: String },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}
