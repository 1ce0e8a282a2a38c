//! API route handlers
//!
//! - `questions`: replica check, sample dataset, health probe
//! - `index`: vector index management (initialize, add, search, stats)

pub mod index;
pub mod questions;

use crate::error::{ServerError, ServerResult};
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// JSON extractor that reports malformed bodies through the standard
/// `{"success": false, "error": ...}` envelope instead of axum's
/// plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// API version and base info
///
/// Root endpoint (GET /); requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "success": true,
        "message": "AI-Powered Question Similarity & Replica Detector API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/questions/health",
            "sample_questions": "GET /api/questions/sample-questions",
            "replica_check": "POST /api/questions/replica-check",
            "index_initialize": "POST /api/index/initialize",
            "index_add": "POST /api/index/add",
            "index_search": "POST /api/index/search",
            "index_stats": "GET /api/index/stats"
        }
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
