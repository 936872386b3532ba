use thiserror::Error;

/// Errors raised by automaton operations.
/// All of these are recoverable; callers log and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// Grid dimensions must both be positive.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// An operation other than initialization was invoked before the
    /// first grid was created.
    #[error("automaton has no grid yet; initialize it first")]
    NotInitialized,

    /// Direct cell access outside the grid extent. Rejected, never clamped.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
