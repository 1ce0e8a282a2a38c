use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Every failure leaves the server as `{"success": false, "error": <short
/// label>, "details": <message>}` — the serialization contract existing
/// callers depend on. Bad requests carry only the `error` field; stack
/// traces are never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Batch embedding failed")]
    Embedding(#[from] embedding::EmbeddingError),

    #[error("Question processing failed")]
    Similarity(#[from] similarity::SimilarityError),

    #[error("Index operation failed")]
    Index(#[from] vector_index::IndexError),

    #[error("Internal server error")]
    Internal(String),

    #[error("Configuration error")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Embedding(_)
            | ServerError::Similarity(_)
            | ServerError::Index(_)
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Longer human-readable details for the response body, when any.
    fn details(&self) -> Option<String> {
        match self {
            ServerError::BadRequest(_) | ServerError::NotFound => None,
            ServerError::Embedding(e) => Some(e.to_string()),
            ServerError::Similarity(e) => Some(e.to_string()),
            ServerError::Index(e) => Some(e.to_string()),
            ServerError::Internal(details) | ServerError::Config(details) => {
                Some(details.clone())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();

        let body = match self.details() {
            Some(details) => json!({
                "success": false,
                "error": error,
                "details": details,
            }),
            None => json!({
                "success": false,
                "error": error,
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for ServerError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(format!("JSON error: {err}"))
    }
}
