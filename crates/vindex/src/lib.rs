//! Exact nearest-neighbor search over accumulated text embeddings.
//!
//! [`FlatIndex`] is a brute-force linear scan by Euclidean distance: no
//! graph, no quantization, 100% recall. At the batch sizes this service
//! handles (one request's worth of questions, or a few thousand accumulated
//! entries) a flat scan comfortably beats the bookkeeping cost of an
//! approximate index, and approximate search is explicitly out of scope.
//!
//! The index is a plain owned struct; callers that share it across threads
//! wrap it in a lock (the server keeps it behind an `RwLock`). Vectors are
//! stored as `f32`, matching the wire format of the search backends this
//! interface was shaped after.

mod error;

pub use error::IndexError;

use serde::Serialize;

/// One search hit: the stable insertion-order label, the Euclidean distance
/// to the query, and the stored text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub label: usize,
    pub distance: f32,
    pub text: String,
}

/// Outcome of a batch insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Entries added by this call.
    pub added: usize,
    /// Total entries stored after this call.
    pub total: usize,
}

/// Exact L2 flat index mapping insertion-order labels to (text, vector)
/// entries. Starts uninitialized; `initialize` fixes the dimension and
/// clears any previous contents.
#[derive(Debug, Default)]
pub struct FlatIndex {
    dimension: Option<usize>,
    vectors: Vec<Vec<f32>>,
    texts: Vec<String>,
}

impl FlatIndex {
    /// New, uninitialized index. Every mutating or querying operation fails
    /// with [`IndexError::NotInitialized`] until [`initialize`](Self::initialize)
    /// is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// New index with the dimension already fixed.
    pub fn with_dimension(dimension: usize) -> Self {
        let mut index = Self::default();
        index.initialize(dimension);
        index
    }

    /// Fix the vector dimension and drop all stored entries.
    pub fn initialize(&mut self, dimension: usize) {
        self.dimension = Some(dimension);
        self.vectors.clear();
        self.texts.clear();
    }

    /// Configured dimension, if initialized.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Number of stored entries.
    pub fn total(&self) -> usize {
        self.texts.len()
    }

    /// Append one entry, returning its stable label (insertion order).
    pub fn add(&mut self, text: impl Into<String>, vector: Vec<f32>) -> Result<usize, IndexError> {
        let dimension = self.dimension.ok_or(IndexError::NotInitialized)?;
        if vector.len() != dimension {
            return Err(IndexError::DimensionMismatch {
                expected: dimension,
                actual: vector.len(),
            });
        }

        let label = self.texts.len();
        self.vectors.push(vector);
        self.texts.push(text.into());
        Ok(label)
    }

    /// Apply [`add`](Self::add) elementwise over paired slices.
    ///
    /// NOT atomic: entries added before the first failure persist, and the
    /// error for that failure is returned. `total()` afterwards reflects
    /// exactly the successfully added entries.
    pub fn add_batch(
        &mut self,
        texts: &[String],
        vectors: &[Vec<f32>],
    ) -> Result<BatchReport, IndexError> {
        if self.dimension.is_none() {
            return Err(IndexError::NotInitialized);
        }
        if texts.len() != vectors.len() {
            return Err(IndexError::InvalidInput(format!(
                "{} texts for {} vectors",
                texts.len(),
                vectors.len()
            )));
        }

        let mut added = 0;
        for (text, vector) in texts.iter().zip(vectors) {
            self.add(text.clone(), vector.clone())?;
            added += 1;
        }

        Ok(BatchReport {
            added,
            total: self.total(),
        })
    }

    /// Up to `min(k, total)` nearest entries to `query` by Euclidean
    /// distance, closest first. An empty index returns an empty result, not
    /// an error.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let dimension = self.dimension.ok_or(IndexError::NotInitialized)?;
        if query.len() != dimension {
            return Err(IndexError::DimensionMismatch {
                expected: dimension,
                actual: query.len(),
            });
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .zip(&self.texts)
            .enumerate()
            .map(|(label, (vector, text))| SearchHit {
                label,
                distance: l2_distance(query, vector),
                text: text.clone(),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(k.min(hits.len()));
        Ok(hits)
    }
}

fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_index() -> FlatIndex {
        let mut index = FlatIndex::with_dimension(2);
        index.add("origin", vec![0.0, 0.0]).unwrap();
        index.add("east", vec![1.0, 0.0]).unwrap();
        index.add("far-north", vec![0.0, 10.0]).unwrap();
        index
    }

    #[test]
    fn add_before_initialize_fails() {
        let mut index = FlatIndex::new();
        assert_eq!(
            index.add("q", vec![1.0, 2.0]),
            Err(IndexError::NotInitialized)
        );
        assert_eq!(index.search(&[1.0], 3), Err(IndexError::NotInitialized));
    }

    #[test]
    fn labels_follow_insertion_order() {
        let mut index = FlatIndex::with_dimension(2);
        assert_eq!(index.add("a", vec![0.0, 0.0]).unwrap(), 0);
        assert_eq!(index.add("b", vec![1.0, 1.0]).unwrap(), 1);
        assert_eq!(index.total(), 2);
    }

    #[test]
    fn add_rejects_wrong_dimension() {
        let mut index = FlatIndex::with_dimension(3);
        assert_eq!(
            index.add("bad", vec![1.0, 2.0]),
            Err(IndexError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(index.total(), 0);
    }

    #[test]
    fn initialize_resets_stored_entries() {
        let mut index = seeded_index();
        assert_eq!(index.total(), 3);
        index.initialize(4);
        assert_eq!(index.total(), 0);
        assert_eq!(index.dimension(), Some(4));
    }

    #[test]
    fn search_returns_closest_first() {
        let index = seeded_index();
        let hits = index.search(&[0.9, 0.1], 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].text, "east");
        assert_eq!(hits[0].label, 1);
        assert_eq!(hits[1].text, "origin");
        assert_eq!(hits[2].text, "far-north");
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[1].distance <= hits[2].distance);
    }

    #[test]
    fn search_truncates_to_stored_count() {
        let index = seeded_index();
        let hits = index.search(&[0.0, 0.0], 10).unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn search_empty_index_returns_empty() {
        let index = FlatIndex::with_dimension(2);
        assert!(index.search(&[0.0, 0.0], 5).unwrap().is_empty());
    }

    #[test]
    fn search_rejects_wrong_query_dimension() {
        let index = seeded_index();
        assert_eq!(
            index.search(&[1.0], 1),
            Err(IndexError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn distance_is_euclidean() {
        let mut index = FlatIndex::with_dimension(2);
        index.add("a", vec![3.0, 4.0]).unwrap();
        let hits = index.search(&[0.0, 0.0], 1).unwrap();
        assert!((hits[0].distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn batch_partial_failure_keeps_earlier_entries() {
        let mut index = FlatIndex::with_dimension(2);
        let texts = vec!["ok1".to_string(), "bad".to_string(), "ok2".to_string()];
        let vectors = vec![vec![0.0, 0.0], vec![1.0, 2.0, 3.0], vec![1.0, 1.0]];

        let err = index.add_batch(&texts, &vectors).unwrap_err();
        assert_eq!(
            err,
            IndexError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        // Non-atomic by contract: the entry before the failure persists.
        assert_eq!(index.total(), 1);
    }

    #[test]
    fn batch_rejects_count_skew() {
        let mut index = FlatIndex::with_dimension(2);
        let texts = vec!["a".to_string()];
        let vectors = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        assert!(matches!(
            index.add_batch(&texts, &vectors),
            Err(IndexError::InvalidInput(_))
        ));
        assert_eq!(index.total(), 0);
    }

    #[test]
    fn batch_success_reports_counts() {
        let mut index = seeded_index();
        let texts = vec!["x".to_string(), "y".to_string()];
        let vectors = vec![vec![2.0, 2.0], vec![3.0, 3.0]];
        let report = index.add_batch(&texts, &vectors).unwrap();
        assert_eq!(report, BatchReport { added: 2, total: 5 });
    }
}
