use super::Json;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use similarity::SimilarityResult;
use std::sync::Arc;

/// Replica check request
#[derive(Debug, Deserialize)]
pub struct ReplicaCheckRequest {
    /// Question texts, at least 2
    pub questions: Vec<String>,

    /// Replica cutoff; defaults to the server-configured threshold
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Replica check response
#[derive(Debug, Serialize)]
pub struct ReplicaCheckResponse {
    pub success: bool,
    pub total_pairs: usize,
    pub replica_count: usize,
    pub threshold_used: f64,
    pub replicas: Vec<SimilarityResult>,
    pub all_results: Vec<SimilarityResult>,
}

/// Detect replica pairs among a batch of questions.
///
/// Rejects batches of fewer than 2 questions with a 400 *before* any
/// embedding retrieval — no external calls are wasted on an invalid batch.
/// Once embeddings are materialized (one vector per question, same order),
/// every unique pair is scored with the server-configured strategy and the
/// full result list is returned alongside the replica subset.
pub async fn replica_check(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ReplicaCheckRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.questions.len() < 2 {
        return Err(ServerError::BadRequest(
            "At least 2 questions are required".to_string(),
        ));
    }

    let threshold = request
        .threshold
        .unwrap_or(state.config.default_threshold);

    let embeddings = embedding::get_batch_embeddings(&request.questions, &state.embedding).await?;

    let all_results = similarity::score_pairs(
        &request.questions,
        &embeddings,
        threshold,
        state.strategy(),
    )?;

    let replicas: Vec<SimilarityResult> = all_results
        .iter()
        .filter(|r| r.is_replica)
        .cloned()
        .collect();

    tracing::info!(
        questions = request.questions.len(),
        total_pairs = all_results.len(),
        replica_count = replicas.len(),
        threshold,
        "replica check completed"
    );

    Ok(Json(ReplicaCheckResponse {
        success: true,
        total_pairs: all_results.len(),
        replica_count: replicas.len(),
        threshold_used: threshold,
        replicas,
        all_results,
    }))
}

/// Serve the bundled sample-question dataset.
pub async fn sample_questions(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "success": true,
        "questions": state.sample_questions,
        "total_questions": state.sample_questions.len(),
    })))
}

/// Health check endpoint (liveness)
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "status": "OK",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
