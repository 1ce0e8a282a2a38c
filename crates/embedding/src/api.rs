//! Remote embedding provider client.
//!
//! One batched `batchEmbedContents` request covers the whole question set,
//! so the all-or-nothing contract falls out naturally: either the provider
//! returns a vector for every text or the call fails as a unit.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{EmbeddingConfig, EmbeddingError};

// Global HTTP client with connection pooling.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(8)
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Serialize)]
struct BatchEmbedRequest {
    requests: Vec<EmbedContentRequest>,
}

#[derive(Serialize)]
struct EmbedContentRequest {
    model: String,
    content: Content,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f64>,
}

/// Embed every text in one provider round trip.
pub(crate) async fn embed_batch_via_api(
    texts: &[String],
    cfg: &EmbeddingConfig,
) -> Result<Vec<Vec<f64>>, EmbeddingError> {
    let api_key = cfg.api_key.as_deref().ok_or_else(|| {
        EmbeddingError::InvalidConfig(
            "api mode requires an API key (set GEMINI_API_KEY or embedding.api_key)".into(),
        )
    })?;

    let url = format!(
        "{}/models/{}:batchEmbedContents?key={}",
        cfg.api_base_url.trim_end_matches('/'),
        cfg.model_name,
        api_key
    );

    let payload = BatchEmbedRequest {
        requests: texts
            .iter()
            .map(|text| EmbedContentRequest {
                model: format!("models/{}", cfg.model_name),
                content: Content {
                    parts: vec![Part { text: text.clone() }],
                },
            })
            .collect(),
    };

    tracing::debug!(count = texts.len(), model = %cfg.model_name, "requesting batch embeddings");

    let response = HTTP_CLIENT
        .post(&url)
        .timeout(Duration::from_secs(cfg.api_timeout_secs))
        .json(&payload)
        .send()
        .await
        .map_err(|e| EmbeddingError::Request(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(EmbeddingError::Provider { status, body });
    }

    let parsed: BatchEmbedResponse = response
        .json()
        .await
        .map_err(|e| EmbeddingError::Response(format!("invalid JSON body: {e}")))?;

    if parsed.embeddings.len() != texts.len() {
        return Err(EmbeddingError::Response(format!(
            "provider returned {} embeddings for {} texts",
            parsed.embeddings.len(),
            texts.len()
        )));
    }

    let mut vectors = Vec::with_capacity(parsed.embeddings.len());
    for (i, embedding) in parsed.embeddings.into_iter().enumerate() {
        if embedding.values.is_empty() {
            return Err(EmbeddingError::Response(format!(
                "provider returned an empty vector for text {i}"
            )));
        }
        vectors.push(embedding.values);
    }

    Ok(vectors)
}
