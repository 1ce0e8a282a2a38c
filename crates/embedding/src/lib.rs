//! Embedding collaborator: turns question texts into semantic vectors.
//!
//! The scoring engine treats this crate as an external collaborator with an
//! all-or-nothing contract: [`get_batch_embeddings`] returns exactly one
//! vector per input text, in input order, or fails the whole batch. Two
//! modes are dispatched from [`EmbeddingConfig::mode`]:
//!
//! - `"api"`: one batched request to a Gemini-style `batchEmbedContents`
//!   endpoint, authenticated by API key.
//! - `"stub"`: deterministic hash-seeded vectors, for tests and keyless
//!   development. Identical text always yields the identical vector.

mod api;
mod config;
mod error;
mod stub;

pub use config::EmbeddingConfig;
pub use error::EmbeddingError;

/// Embed a batch of texts, one vector per text in input order.
///
/// Fails the entire batch if any input is blank or the provider rejects or
/// short-changes the request — callers must never score a partial batch.
pub async fn get_batch_embeddings(
    texts: &[String],
    cfg: &EmbeddingConfig,
) -> Result<Vec<Vec<f64>>, EmbeddingError> {
    if texts.is_empty() {
        return Err(EmbeddingError::InvalidInput(
            "at least one text is required".into(),
        ));
    }
    if let Some(pos) = texts.iter().position(|t| t.trim().is_empty()) {
        return Err(EmbeddingError::InvalidInput(format!(
            "text {pos} is empty; all inputs must be non-empty strings"
        )));
    }

    match cfg.mode.as_str() {
        "stub" => Ok(texts
            .iter()
            .map(|text| stub::make_stub_embedding(text, cfg))
            .collect()),
        "api" => api::embed_batch_via_api(texts, cfg).await,
        other => Err(EmbeddingError::InvalidConfig(format!(
            "unknown embedding mode {other:?} (expected \"api\" or \"stub\")"
        ))),
    }
}

/// Embed a single text.
pub async fn get_embedding(text: &str, cfg: &EmbeddingConfig) -> Result<Vec<f64>, EmbeddingError> {
    let texts = [text.to_string()];
    let mut vectors = get_batch_embeddings(&texts, cfg).await?;
    vectors
        .pop()
        .ok_or_else(|| EmbeddingError::Response("provider returned no embedding".into()))
}
