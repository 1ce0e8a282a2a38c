use thiserror::Error;

/// Errors surfaced by the embedding client.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Configuration is inconsistent (unknown mode, missing API key, ...).
    #[error("invalid embedding config: {0}")]
    InvalidConfig(String),

    /// No texts were supplied, or a text was blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP request itself failed (connect, timeout, TLS, ...).
    #[error("embedding request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("embedding provider error {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx but the body did not carry usable vectors.
    #[error("unexpected provider response: {0}")]
    Response(String),
}
