use serde::{Deserialize, Serialize};

/// Runtime configuration for the embedding collaborator.
///
/// # Example
/// ```no_run
/// use embedding::EmbeddingConfig;
///
/// let cfg = EmbeddingConfig {
///     mode: "api".into(),
///     api_key: Some("your-key".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Provider selector: `"api"` (remote batch endpoint) or `"stub"`
    /// (deterministic local vectors for tests and keyless development).
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Model identifier sent to the provider and echoed in logs.
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Base URL of the Generative Language REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Provider API key. Read from `GEMINI_API_KEY` when absent.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub api_timeout_secs: u64,

    /// Vector dimension produced in stub mode.
    #[serde(default = "default_stub_dimension")]
    pub stub_dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            model_name: default_model_name(),
            api_base_url: default_api_base_url(),
            api_key: None,
            api_timeout_secs: default_timeout_secs(),
            stub_dimension: default_stub_dimension(),
        }
    }
}

impl EmbeddingConfig {
    /// Fill the API key from `GEMINI_API_KEY` if the config carries none.
    pub fn with_env_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        }
        self
    }
}

fn default_mode() -> String {
    "api".to_string()
}

fn default_model_name() -> String {
    "embedding-001".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_stub_dimension() -> usize {
    768
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = EmbeddingConfig::default();
        assert_eq!(cfg.mode, "api");
        assert_eq!(cfg.model_name, "embedding-001");
        assert!(cfg.api_base_url.contains("generativelanguage"));
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.api_timeout_secs, 30);
        assert_eq!(cfg.stub_dimension, 768);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let cfg: EmbeddingConfig = serde_json::from_str(r#"{"mode": "stub"}"#).unwrap();
        assert_eq!(cfg.mode, "stub");
        assert_eq!(cfg.stub_dimension, 768);
    }
}
