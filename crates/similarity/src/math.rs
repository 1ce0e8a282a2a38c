//! Vector math primitives used by the scorers.
//!
//! Everything here is a pure function over `&[f64]` slices of equal length.
//! The one semantic quirk worth reading twice: [`manhattan_distance_score`]
//! squashes the raw L1 distance so that *larger* distances land *closer to
//! +1*. That polarity is kept for wire compatibility with existing callers
//! of the blended score — see the function docs.

use crate::error::SimilarityError;

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean (L2) norm.
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity in [-1, 1].
///
/// If either vector has norm exactly zero the result is `0.0` rather than a
/// division-by-zero: a zero vector signals "no semantic content", not a
/// caller error.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    check_dims(a, b)?;

    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Manhattan (L1) distance squashed into (-1, 1) via `2/(1+e^-x) - 1`.
///
/// The mapping is monotonic in the raw distance, which means it is NOT a
/// similarity in the conventional sense: two identical vectors score exactly
/// 0, and the score climbs toward +1 as the vectors move apart. Callers that
/// blend this into a similarity score inherit that polarity. Kept as-is for
/// compatibility; changing the sign is a product decision, not a bug fix.
pub fn manhattan_distance_score(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    check_dims(a, b)?;
    let l1: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    Ok(2.0 / (1.0 + (-l1).exp()) - 1.0)
}

/// Element-wise mean of a non-empty list of equal-dimension vectors.
pub fn average_vectors(vectors: &[Vec<f64>]) -> Result<Vec<f64>, SimilarityError> {
    let first = vectors
        .first()
        .ok_or_else(|| SimilarityError::EmptyInput("no vectors to average".into()))?;

    let dim = first.len();
    let mut sum = vec![0.0; dim];
    for vector in vectors {
        if vector.len() != dim {
            return Err(SimilarityError::DimensionMismatch {
                left: dim,
                right: vector.len(),
            });
        }
        for (acc, value) in sum.iter_mut().zip(vector) {
            *acc += value;
        }
    }

    let count = vectors.len() as f64;
    Ok(sum.into_iter().map(|v| v / count).collect())
}

/// Similarity expressed as a percentage, rounded to two decimals.
pub fn similarity_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}

/// Round a score to four decimals for the wire contract.
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

fn check_dims(a: &[f64], b: &[f64]) -> Result<(), SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
