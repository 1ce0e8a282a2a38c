use fxhash::hash64;

use crate::EmbeddingConfig;

/// Deterministic stub used in `"stub"` mode. Generates sinusoid values
/// derived from a hash of the input text so identical texts always map to
/// identical vectors, with minimal CPU cost and no network.
pub(crate) fn make_stub_embedding(text: &str, cfg: &EmbeddingConfig) -> Vec<f64> {
    let h = hash64(text.as_bytes());
    (0..cfg.stub_dimension)
        .map(|idx| (((h >> (idx % 32)) as f64) * 0.0001).sin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_has_configured_dimension() {
        let cfg = EmbeddingConfig {
            stub_dimension: 32,
            ..Default::default()
        };
        assert_eq!(make_stub_embedding("hello", &cfg).len(), 32);
    }

    #[test]
    fn identical_texts_give_identical_vectors() {
        let cfg = EmbeddingConfig::default();
        assert_eq!(
            make_stub_embedding("What is AI?", &cfg),
            make_stub_embedding("What is AI?", &cfg)
        );
    }

    #[test]
    fn distinct_texts_give_distinct_vectors() {
        let cfg = EmbeddingConfig::default();
        assert_ne!(
            make_stub_embedding("What is AI?", &cfg),
            make_stub_embedding("How to cook rice?", &cfg)
        );
    }

    #[test]
    fn stub_vectors_are_nonzero() {
        let cfg = EmbeddingConfig::default();
        let v = make_stub_embedding("anything", &cfg);
        assert!(v.iter().any(|x| *x != 0.0));
    }
}
