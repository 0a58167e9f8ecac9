use std::fmt;

use crate::geom::{Cell, Dims};

/// A grid that breaks a search precondition.
///
/// Returned by [`Grid::validate`](crate::Grid::validate) and by any search
/// entry point before a single step runs. A start equal to the end is not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGrid {
    /// The grid has no cells.
    EmptyDims { rows: i32, cols: i32 },
    /// Corner-to-corner distance does not fit in an `i32` score.
    TooLarge { rows: i32, cols: i32 },
    /// The start cell lies outside the grid.
    StartOutOfBounds(Cell),
    /// The end cell lies outside the grid.
    EndOutOfBounds(Cell),
    /// The start cell is blocked.
    StartBlocked(Cell),
    /// The end cell is blocked.
    EndBlocked(Cell),
    /// A blocked cell lies outside the grid.
    BlockedOutOfBounds(Cell),
}

impl InvalidGrid {
    pub(crate) fn empty(dims: Dims) -> Self {
        Self::EmptyDims {
            rows: dims.rows,
            cols: dims.cols,
        }
    }

    pub(crate) fn too_large(dims: Dims) -> Self {
        Self::TooLarge {
            rows: dims.rows,
            cols: dims.cols,
        }
    }
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDims { rows, cols } => write!(f, "grid has no cells ({rows}x{cols})"),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid is too large to score ({rows}x{cols})")
            }
            Self::StartOutOfBounds(c) => write!(f, "start {c} is outside the grid"),
            Self::EndOutOfBounds(c) => write!(f, "end {c} is outside the grid"),
            Self::StartBlocked(c) => write!(f, "start {c} is blocked"),
            Self::EndBlocked(c) => write!(f, "end {c} is blocked"),
            Self::BlockedOutOfBounds(c) => write!(f, "blocked cell {c} is outside the grid"),
        }
    }
}

impl std::error::Error for InvalidGrid {}
