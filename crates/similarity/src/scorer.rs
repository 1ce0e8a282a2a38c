//! Batch pairwise scoring over a set of question embeddings.
//!
//! One enumeration loop, two scoring policies. The original service grew two
//! near-identical N^2 processors (pure cosine with categories, and a
//! cosine/Manhattan blend); here the loop is written once and the policy is
//! a [`ScoringStrategy`] value, selected by server configuration.

use serde::{Deserialize, Serialize};

use crate::classify::SimilarityCategory;
use crate::error::SimilarityError;
use crate::math::{cosine_similarity, manhattan_distance_score, round_score};

/// Default mixing weight for the blended strategy: 95% cosine, 5% squashed
/// Manhattan term.
pub const DEFAULT_BLEND_ALPHA: f64 = 0.95;

/// Scoring policy applied to every pair in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringStrategy {
    /// Cosine similarity plus a fixed-breakpoint `similarity_category`.
    CosineClassified,
    /// `cosine * alpha + manhattan_squashed * (1 - alpha)`, no category.
    ///
    /// Note the Manhattan term's counter-intuitive polarity (see
    /// [`manhattan_distance_score`]); it contributes *positively* for
    /// distant vectors. Preserved for compatibility with existing callers.
    Blended { alpha: f64 },
}

impl Default for ScoringStrategy {
    fn default() -> Self {
        ScoringStrategy::CosineClassified
    }
}

/// One scored question pair. Field names and rounding are a serialization
/// contract: `similarity_score` carries four decimals, and
/// `similarity_category` is omitted entirely (not null) under the blended
/// strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub question1: String,
    pub question2: String,
    pub similarity_score: f64,
    pub is_replica: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_category: Option<SimilarityCategory>,
}

/// Score every unique question pair.
///
/// Enumerates `(i, j)` with `0 <= i < j < N` in ascending `i`, then ascending
/// `j` — exactly `N * (N - 1) / 2` results. Identical texts are not
/// deduplicated; each index is its own question.
///
/// The replica decision uses the *rounded* four-decimal score
/// (`is_replica = similarity_score >= threshold`) so that the flag always
/// agrees with the number callers see on the wire.
///
/// The batch is all-or-nothing: a question/embedding count mismatch or any
/// pairwise failure aborts the whole call with
/// [`SimilarityError::ProcessingFailed`].
pub fn score_pairs(
    questions: &[String],
    embeddings: &[Vec<f64>],
    threshold: f64,
    strategy: ScoringStrategy,
) -> Result<Vec<SimilarityResult>, SimilarityError> {
    if questions.len() < 2 {
        return Err(SimilarityError::InvalidInput(
            "at least 2 questions are required".into(),
        ));
    }
    if embeddings.len() != questions.len() {
        return Err(SimilarityError::ProcessingFailed(format!(
            "{} embeddings for {} questions",
            embeddings.len(),
            questions.len()
        )));
    }

    let n = questions.len();
    let mut results = Vec::with_capacity(n * (n - 1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let scored = score_pair(&embeddings[i], &embeddings[j], threshold, strategy)
                .map_err(|e| {
                    SimilarityError::ProcessingFailed(format!(
                        "similarity computation failed for questions {i} and {j}: {e}"
                    ))
                })?;

            results.push(SimilarityResult {
                question1: questions[i].clone(),
                question2: questions[j].clone(),
                similarity_score: scored.score,
                is_replica: scored.is_replica,
                similarity_category: scored.category,
            });
        }
    }

    Ok(results)
}

struct PairScore {
    score: f64,
    is_replica: bool,
    category: Option<SimilarityCategory>,
}

fn score_pair(
    a: &[f64],
    b: &[f64],
    threshold: f64,
    strategy: ScoringStrategy,
) -> Result<PairScore, SimilarityError> {
    match strategy {
        ScoringStrategy::CosineClassified => {
            let similarity = cosine_similarity(a, b)?;
            let score = round_score(similarity);
            Ok(PairScore {
                score,
                is_replica: score >= threshold,
                // Category buckets the raw similarity so 0.79999 stays
                // highly_similar even though the wire score rounds to 0.8.
                category: Some(SimilarityCategory::from_similarity(similarity)),
            })
        }
        ScoringStrategy::Blended { alpha } => {
            let cosine = cosine_similarity(a, b)?;
            let manhattan = manhattan_distance_score(a, b)?;
            let score = round_score(cosine * alpha + manhattan * (1.0 - alpha));
            Ok(PairScore {
                score,
                is_replica: score >= threshold,
                category: None,
            })
        }
    }
}
