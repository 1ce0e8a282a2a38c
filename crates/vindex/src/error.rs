use thiserror::Error;

/// Errors surfaced by [`FlatIndex`](crate::FlatIndex) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// An operation ran before `initialize` fixed the index dimension.
    #[error("index not initialized; call initialize first")]
    NotInitialized,

    /// A vector's length disagrees with the configured index dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Structurally malformed batch arguments (e.g. text/vector count skew).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
