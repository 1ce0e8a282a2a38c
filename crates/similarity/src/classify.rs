//! Replica decision and ordinal similarity categories.
//!
//! Two independent tiers deliberately coexist here: the binary replica
//! decision compares against a *caller-supplied* threshold, while the
//! ordinal category buckets use *fixed* breakpoints. A caller can lower the
//! replica threshold to 0.5 and still see `highly_similar` categories — the
//! two outputs answer different questions and both are exposed.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::math::{cosine_similarity, similarity_percentage};

/// Default replica threshold when the caller supplies none.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Ordinal similarity buckets with fixed breakpoints, independent of the
/// caller's replica threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityCategory {
    Replica,
    HighlySimilar,
    ModeratelySimilar,
    Dissimilar,
}

impl SimilarityCategory {
    /// Bucket a raw (unrounded) cosine similarity.
    ///
    /// Breakpoints: `[0.8, inf) -> replica`, `[0.6, 0.8) -> highly_similar`,
    /// `[0.4, 0.6) -> moderately_similar`, else `dissimilar`.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= 0.8 {
            SimilarityCategory::Replica
        } else if similarity >= 0.6 {
            SimilarityCategory::HighlySimilar
        } else if similarity >= 0.4 {
            SimilarityCategory::ModeratelySimilar
        } else {
            SimilarityCategory::Dissimilar
        }
    }
}

/// Outcome of a direct replica check between two vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicaCheck {
    pub is_replica: bool,
    pub similarity: f64,
    pub percentage: f64,
    pub threshold: f64,
}

/// Outcome of classifying two vectors into an ordinal category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: SimilarityCategory,
    pub similarity: f64,
    pub percentage: f64,
}

/// Decide whether two vectors are replicas of each other.
///
/// `is_replica = similarity >= threshold` over the raw cosine similarity.
/// Vector-math failures propagate unchanged.
pub fn check_is_replica(
    a: &[f64],
    b: &[f64],
    threshold: f64,
) -> Result<ReplicaCheck, SimilarityError> {
    let similarity = cosine_similarity(a, b)?;
    Ok(ReplicaCheck {
        is_replica: similarity >= threshold,
        similarity,
        percentage: similarity_percentage(similarity),
        threshold,
    })
}

/// Best match among a set of candidate vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostSimilar {
    /// Position of the winning candidate in the input slice.
    pub index: usize,
    pub similarity: f64,
    pub percentage: f64,
}

/// Find the candidate most similar to `target` by cosine similarity.
///
/// Ties go to the earliest candidate. Fails with `EmptyInput` when there
/// are no candidates; a dimension mismatch on any candidate propagates
/// instead of being skipped.
pub fn find_most_similar(
    target: &[f64],
    candidates: &[Vec<f64>],
) -> Result<MostSimilar, SimilarityError> {
    if candidates.is_empty() {
        return Err(SimilarityError::EmptyInput(
            "at least one candidate vector is required".to_string(),
        ));
    }

    let mut best: Option<MostSimilar> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let similarity = cosine_similarity(target, candidate)?;
        let better = match &best {
            Some(current) => similarity > current.similarity,
            None => true,
        };
        if better {
            best = Some(MostSimilar {
                index,
                similarity,
                percentage: similarity_percentage(similarity),
            });
        }
    }

    // candidates is non-empty, so at least one iteration ran
    best.ok_or_else(|| SimilarityError::ProcessingFailed("no candidates scored".to_string()))
}

/// Classify the similarity of two vectors into a fixed-breakpoint category.
pub fn classify_similarity(a: &[f64], b: &[f64]) -> Result<Classification, SimilarityError> {
    let similarity = cosine_similarity(a, b)?;
    Ok(Classification {
        category: SimilarityCategory::from_similarity(similarity),
        similarity,
        percentage: similarity_percentage(similarity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_breakpoints_are_exact() {
        use SimilarityCategory::*;
        assert_eq!(SimilarityCategory::from_similarity(1.0), Replica);
        assert_eq!(SimilarityCategory::from_similarity(0.8), Replica);
        assert_eq!(SimilarityCategory::from_similarity(0.79999), HighlySimilar);
        assert_eq!(SimilarityCategory::from_similarity(0.6), HighlySimilar);
        assert_eq!(
            SimilarityCategory::from_similarity(0.59999),
            ModeratelySimilar
        );
        assert_eq!(SimilarityCategory::from_similarity(0.4), ModeratelySimilar);
        assert_eq!(SimilarityCategory::from_similarity(0.39999), Dissimilar);
        assert_eq!(SimilarityCategory::from_similarity(-1.0), Dissimilar);
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SimilarityCategory::HighlySimilar).unwrap(),
            "\"highly_similar\""
        );
        assert_eq!(
            serde_json::to_string(&SimilarityCategory::Replica).unwrap(),
            "\"replica\""
        );
    }

    #[test]
    fn identical_vectors_are_replicas_at_default_threshold() {
        let v = vec![0.2, 0.4, 0.6];
        let check = check_is_replica(&v, &v, DEFAULT_THRESHOLD).unwrap();
        assert!(check.is_replica);
        assert!((check.similarity - 1.0).abs() < 1e-9);
        assert_eq!(check.percentage, 100.0);
        assert_eq!(check.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn orthogonal_vectors_are_not_replicas() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let check = check_is_replica(&a, &b, DEFAULT_THRESHOLD).unwrap();
        assert!(!check.is_replica);
        assert_eq!(check.similarity, 0.0);
    }

    #[test]
    fn threshold_is_caller_controlled_and_inclusive() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0, 0.0];
        // similarity == 1.0, threshold == 1.0 -> >= is inclusive
        assert!(check_is_replica(&a, &b, 1.0).unwrap().is_replica);
        // orthogonal pair becomes a "replica" at threshold 0.0
        let c = vec![0.0, 1.0];
        assert!(check_is_replica(&a, &c, 0.0).unwrap().is_replica);
    }

    #[test]
    fn classification_ignores_caller_threshold() {
        // No threshold parameter at all: buckets are fixed by design.
        let a = vec![1.0, 0.0];
        let classified = classify_similarity(&a, &a).unwrap();
        assert_eq!(classified.category, SimilarityCategory::Replica);
        assert_eq!(classified.percentage, 100.0);
    }

    #[test]
    fn most_similar_picks_best_candidate() {
        let target = vec![1.0, 0.0];
        let candidates = vec![
            vec![0.0, 1.0],  // orthogonal
            vec![1.0, 1.0],  // ~0.707
            vec![2.0, 0.0],  // parallel
            vec![-1.0, 0.0], // opposite
        ];
        let best = find_most_similar(&target, &candidates).unwrap();
        assert_eq!(best.index, 2);
        assert!((best.similarity - 1.0).abs() < 1e-9);
        assert_eq!(best.percentage, 100.0);
    }

    #[test]
    fn most_similar_ties_go_to_earliest_candidate() {
        let target = vec![1.0, 0.0];
        let candidates = vec![vec![1.0, 0.0], vec![3.0, 0.0]];
        assert_eq!(find_most_similar(&target, &candidates).unwrap().index, 0);
    }

    #[test]
    fn most_similar_requires_candidates() {
        let target = vec![1.0, 0.0];
        assert!(matches!(
            find_most_similar(&target, &[]),
            Err(SimilarityError::EmptyInput(_))
        ));
    }

    #[test]
    fn most_similar_propagates_dimension_mismatch() {
        let target = vec![1.0, 0.0];
        let candidates = vec![vec![1.0, 0.0], vec![1.0]];
        assert_eq!(
            find_most_similar(&target, &candidates),
            Err(SimilarityError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn classify_propagates_dimension_mismatch() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0];
        assert_eq!(
            classify_similarity(&a, &b),
            Err(SimilarityError::DimensionMismatch { left: 2, right: 1 })
        );
    }
}
