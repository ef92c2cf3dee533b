//! Error types for building Grids and configuring searches.

use crate::Point;
use thiserror::Error;

/// Errors that can occur while constructing or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The Grid would have no cells.
    #[error("grid has no cells")]
    Empty,

    /// The number of supplied cells does not match the dimensions.
    #[error("a {width}x{height} grid needs {expected} cells, got {actual}")]
    CellCountMismatch {
        /// requested width
        width: usize,
        /// requested height
        height: usize,
        /// `width * height`
        expected: usize,
        /// number of cells supplied
        actual: usize,
    },

    /// `width * height` does not fit in a `usize`.
    #[error("a {width}x{height} grid is too large to address")]
    TooLarge {
        /// requested width
        width: usize,
        /// requested height
        height: usize,
    },

    /// A row of textual input has no cells.
    #[error("row {row} is empty")]
    EmptyRow {
        /// zero-based row index
        row: usize,
    },

    /// A row of textual input differs in length from the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// zero-based row index
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of this row
        actual: usize,
    },

    /// A cell holds a cost outside of `1..=9`.
    #[error("invalid cost {value} at ({x}, {y}), costs must be in 1..=9")]
    InvalidCost {
        /// column of the cell
        x: usize,
        /// row of the cell
        y: usize,
        /// the offending value
        value: u8,
    },

    /// A character of textual input is not one of the digits `1` to `9`.
    #[error("invalid character {found:?} at row {row}, column {column}")]
    InvalidDigit {
        /// zero-based row index
        row: usize,
        /// zero-based column index
        column: usize,
        /// the offending character
        found: char,
    },
}

/// Result type for Grid construction.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while configuring a [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The configured start lies outside the Grid.
    #[error("start {0:?} lies outside the grid")]
    StartOutOfBounds(Point),

    /// The configured goal lies outside the Grid.
    #[error("goal {0:?} lies outside the grid")]
    GoalOutOfBounds(Point),
}

/// Result type for search configuration.
pub type SearchResult<T> = Result<T, SearchError>;
