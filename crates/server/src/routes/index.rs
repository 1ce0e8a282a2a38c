use super::Json;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use vector_index::{IndexError, SearchHit};

/// Index initialization request
#[derive(Debug, Deserialize)]
pub struct InitializeRequest {
    pub dimension: usize,
}

/// Batch add request: texts are embedded server-side.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub texts: Vec<String>,
}

/// Search request: the query text is embedded server-side.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    5
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results_count: usize,
    pub results: Vec<SearchHit>,
}

/// Reset the index to a fixed dimension, dropping all stored entries.
pub async fn initialize_index(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<InitializeRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.dimension == 0 {
        return Err(ServerError::BadRequest(
            "Index dimension must be greater than zero".to_string(),
        ));
    }

    let mut index = state.index.write().map_err(lock_poisoned)?;
    index.initialize(request.dimension);

    tracing::info!(dimension = request.dimension, "vector index initialized");

    Ok(Json(json!({
        "success": true,
        "message": format!("Index initialized with dimension {}", request.dimension),
    })))
}

/// Embed texts and append them to the index.
///
/// The batch is not atomic: entries embedded and added before a failing
/// entry persist, and `stats` afterwards reflects exactly the entries that
/// made it in.
pub async fn add_to_index(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AddRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.texts.is_empty() {
        return Err(ServerError::BadRequest(
            "At least 1 text is required".to_string(),
        ));
    }

    let embeddings = embedding::get_batch_embeddings(&request.texts, &state.embedding).await?;
    let vectors: Vec<Vec<f32>> = embeddings
        .iter()
        .map(|v| v.iter().map(|x| *x as f32).collect())
        .collect();

    let report = {
        let mut index = state.index.write().map_err(lock_poisoned)?;
        index.add_batch(&request.texts, &vectors)?
    };

    Ok(Json(json!({
        "success": true,
        "added_count": report.added,
        "total_count": report.total,
    })))
}

/// Embed the query text and return its nearest stored entries.
pub async fn search_index(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SearchRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.query.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "Query text must not be empty".to_string(),
        ));
    }

    let query_embedding = embedding::get_embedding(&request.query, &state.embedding).await?;
    let query: Vec<f32> = query_embedding.iter().map(|x| *x as f32).collect();

    let results = {
        let index = state.index.read().map_err(lock_poisoned)?;
        index.search(&query, request.k)?
    };

    Ok(Json(SearchResponse {
        success: true,
        results_count: results.len(),
        results,
    }))
}

/// Index size and configured dimension.
///
/// Fails with `NotInitialized` until `initialize` has been called, the
/// same as `add` and `search`.
pub async fn index_stats(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let index = state.index.read().map_err(lock_poisoned)?;
    let dimension = index
        .dimension()
        .ok_or(IndexError::NotInitialized)?;

    Ok(Json(json!({
        "success": true,
        "total": index.total(),
        "dimension": dimension,
    })))
}

fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> ServerError {
    ServerError::Internal("index lock poisoned".to_string())
}
