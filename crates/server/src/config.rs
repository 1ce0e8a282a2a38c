use embedding::EmbeddingConfig;
use serde::{Deserialize, Serialize};
use similarity::{ScoringStrategy, DEFAULT_BLEND_ALPHA, DEFAULT_THRESHOLD};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pairwise scoring policy: `"cosine"` (cosine similarity with ordinal
    /// categories) or `"blended"` (cosine/Manhattan mix, no categories)
    #[serde(default = "default_scoring_strategy")]
    pub scoring_strategy: String,

    /// Mixing weight for the blended policy
    #[serde(default = "default_blend_alpha")]
    pub blend_alpha: f64,

    /// Replica threshold used when a request supplies none
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Embedding provider settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            scoring_strategy: default_scoring_strategy(),
            blend_alpha: default_blend_alpha(),
            default_threshold: default_threshold(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files.
    ///
    /// A keyless `"api"` embedding mode is downgraded to the deterministic
    /// stub so the server stays usable in development; production setups
    /// must provide `GEMINI_API_KEY`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("replicheck").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("REPLICHECK").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;

        let mut config = config;
        config.embedding = config.embedding.with_env_api_key();
        if config.embedding.mode == "api" && config.embedding.api_key.is_none() {
            tracing::warn!(
                "No embedding API key configured, falling back to deterministic stub embeddings"
            );
            config.embedding.mode = "stub".to_string();
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Resolve the configured scoring policy.
    pub fn strategy(&self) -> ScoringStrategy {
        match self.scoring_strategy.as_str() {
            "blended" => ScoringStrategy::Blended {
                alpha: self.blend_alpha,
            },
            _ => ScoringStrategy::CosineClassified,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scoring_strategy() -> String {
    "cosine".to_string()
}

fn default_blend_alpha() -> f64 {
    DEFAULT_BLEND_ALPHA
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert!(cfg.enable_cors);
        assert_eq!(cfg.default_threshold, 0.8);
        assert_eq!(cfg.blend_alpha, 0.95);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_strategy_resolution() {
        let mut cfg = ServerConfig::default();
        assert_eq!(cfg.strategy(), ScoringStrategy::CosineClassified);

        cfg.scoring_strategy = "blended".to_string();
        assert_eq!(cfg.strategy(), ScoringStrategy::Blended { alpha: 0.95 });

        cfg.blend_alpha = 0.5;
        assert_eq!(cfg.strategy(), ScoringStrategy::Blended { alpha: 0.5 });
    }
}
