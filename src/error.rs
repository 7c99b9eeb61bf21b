//! Engine error types.

use thiserror::Error;

/// Errors from board construction and checked cell access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the board bounds.
    #[error("cell ({row}, {column}) out of range for {width}x{height} board")]
    OutOfRange {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },

    /// Board construction with unusable dimensions or non-rectangular rows.
    #[error("invalid board dimensions: {reason}")]
    InvalidDimension { reason: String },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
