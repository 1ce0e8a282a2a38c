use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use embedding::EmbeddingConfig;
use similarity::ScoringStrategy;
use std::sync::{Arc, RwLock};
use vector_index::FlatIndex;

/// Bundled dataset served by `GET /api/questions/sample-questions`.
const SAMPLE_QUESTIONS: &str = include_str!("../../../data/sample_questions.json");

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Embedding provider settings (shared across requests)
    pub embedding: EmbeddingConfig,

    /// Process-wide vector index. Accumulates across requests until
    /// explicitly reinitialized; the lock is what makes that safe under
    /// concurrent handlers.
    pub index: RwLock<FlatIndex>,

    /// Parsed sample-question dataset
    pub sample_questions: Vec<String>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let sample_questions: Vec<String> = serde_json::from_str(SAMPLE_QUESTIONS)
            .map_err(|e| ServerError::Config(format!("invalid sample question dataset: {e}")))?;

        Ok(Self {
            embedding: config.embedding.clone(),
            config: Arc::new(config),
            index: RwLock::new(FlatIndex::new()),
            sample_questions,
        })
    }

    /// Scoring policy for this deployment.
    pub fn strategy(&self) -> ScoringStrategy {
        self.config.strategy()
    }
}
