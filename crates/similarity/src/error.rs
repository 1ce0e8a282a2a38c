use thiserror::Error;

/// Errors surfaced by the similarity engine.
///
/// Low-level vector failures are returned as tagged values at their origin
/// and aggregated into `ProcessingFailed` at the batch boundary — never a
/// silent default. Zero-vector inputs are deliberately NOT an error; they
/// degrade to a cosine similarity of 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// Vectors compared together must share the same dimension.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// An operation that needs at least one vector got none.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Malformed arguments that type-check but make no sense (e.g. scoring
    /// fewer than two questions).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Aggregate all-or-nothing batch failure wrapping the underlying cause.
    #[error("question processing failed: {0}")]
    ProcessingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_names_both_sides() {
        let err = SimilarityError::DimensionMismatch { left: 3, right: 5 };
        assert!(err.to_string().contains("3 vs 5"));
    }

    #[test]
    fn processing_failed_carries_details() {
        let err = SimilarityError::ProcessingFailed("pair (0, 2) failed".into());
        assert!(err.to_string().contains("question processing failed"));
        assert!(err.to_string().contains("pair (0, 2)"));
    }
}
