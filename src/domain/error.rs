use thiserror::Error;

/// Failures reported by [`Universe`](super::Universe) operations.
///
/// A failed operation never modifies the grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UniverseError {
    #[error("invalid dimensions {width}x{height}: each side must be between 1 and {max}")]
    InvalidDimension {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: usize,
        height: usize,
    },
}
