//! Pairwise similarity scoring over embedding vectors.
//!
//! This crate is the scoring engine behind the replica-check API:
//!
//! - [`math`]: vector primitives (dot product, norm, cosine similarity,
//!   a sigmoid-squashed Manhattan distance, vector averaging)
//! - [`classify`]: replica decision against a caller threshold,
//!   fixed-breakpoint ordinal categories, and a best-match search over
//!   candidate vectors
//! - [`scorer`]: upper-triangular enumeration of all unique question pairs,
//!   parameterized by a pluggable [`ScoringStrategy`]
//!
//! All operations are pure in-memory arithmetic; embeddings are expected to
//! be fully materialized (one vector per question, same order) before
//! scoring starts. A batch either fully succeeds or fails as a whole with
//! [`SimilarityError::ProcessingFailed`] — there are no partial results.

pub mod classify;
pub mod error;
pub mod math;
pub mod scorer;

pub use classify::{
    check_is_replica, classify_similarity, find_most_similar, Classification, MostSimilar,
    ReplicaCheck, SimilarityCategory, DEFAULT_THRESHOLD,
};
pub use error::SimilarityError;
pub use math::{
    average_vectors, cosine_similarity, dot, manhattan_distance_score, norm,
    similarity_percentage,
};
pub use scorer::{score_pairs, ScoringStrategy, SimilarityResult, DEFAULT_BLEND_ALPHA};
