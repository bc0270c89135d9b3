//! Flat cosine-similarity vector index with a lock-step excerpt table.
//!
//! Index position `i` in the vector table corresponds to excerpt `i` in the
//! excerpt table — that correspondence is validated once at construction
//! and can never drift afterwards, so a mismatch is a deployment fault
//! caught at load time, not a query-time error.

use tracing::debug;

use solocase_core::{Error, Result};

/// One nearest-neighbor hit: an ordinal into the index and its cosine
/// distance from the query (lower is closer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// An immutable vector index over a corpus of text excerpts.
pub struct SemanticIndex {
    vectors: Vec<Vec<f32>>,
    excerpts: Vec<String>,
    dimension: usize,
}

impl SemanticIndex {
    /// Build an index from parallel vector and excerpt tables.
    ///
    /// Fails with [`Error::IndexIntegrity`] when the tables differ in
    /// length, and with [`Error::InvalidInput`] when vectors disagree on
    /// dimension.
    pub fn new(vectors: Vec<Vec<f32>>, excerpts: Vec<String>) -> Result<Self> {
        if vectors.len() != excerpts.len() {
            return Err(Error::IndexIntegrity {
                vectors: vectors.len(),
                excerpts: excerpts.len(),
            });
        }

        let dimension = vectors.first().map(|v| v.len()).unwrap_or(0);
        if let Some(bad) = vectors.iter().position(|v| v.len() != dimension) {
            return Err(Error::InvalidInput(format!(
                "vector {} has dimension {} but the index is {}-dimensional",
                bad,
                vectors[bad].len(),
                dimension
            )));
        }

        debug!(
            entries = vectors.len(),
            dimension, "semantic index loaded"
        );

        Ok(Self {
            vectors,
            excerpts,
            dimension,
        })
    }

    /// An empty index; every search returns no neighbors.
    pub fn empty() -> Self {
        Self {
            vectors: Vec::new(),
            excerpts: Vec::new(),
            dimension: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimension of the stored vectors; 0 for an empty index.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The excerpt stored at an ordinal position.
    pub fn excerpt(&self, index: usize) -> Option<&str> {
        self.excerpts.get(index).map(String::as_str)
    }

    /// Exhaustive nearest-neighbor search, at most `k` results ordered by
    /// ascending cosine distance. Ties retain ordinal order.
    pub fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        if query.len() != self.dimension {
            return Err(Error::Search(format!(
                "query vector has dimension {} but the index is {}-dimensional",
                query.len(),
                self.dimension
            )));
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| Neighbor {
                index,
                distance: 1.0 - cosine_similarity(query, vector),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }
}

/// Cosine similarity between two equal-length vectors. Zero-magnitude
/// inputs yield 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(vectors: Vec<Vec<f32>>, excerpts: &[&str]) -> SemanticIndex {
        SemanticIndex::new(vectors, excerpts.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_length_mismatch_fails_at_load() {
        let result = SemanticIndex::new(
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec!["only one excerpt".to_string()],
        );
        match result {
            Err(Error::IndexIntegrity { vectors, excerpts }) => {
                assert_eq!(vectors, 2);
                assert_eq!(excerpts, 1);
            }
            _ => panic!("Expected IndexIntegrity error"),
        }
    }

    #[test]
    fn test_ragged_dimensions_fail_at_load() {
        let result = SemanticIndex::new(
            vec![vec![1.0, 0.0], vec![0.0, 1.0, 0.5]],
            vec!["a".to_string(), "b".to_string()],
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_nearest_orders_by_distance() {
        let index = index_of(
            vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.7, 0.7]],
            &["orthogonal", "aligned", "diagonal"],
        );

        let neighbors = index.nearest(&[1.0, 0.0], 2).unwrap();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].index, 1);
        assert!(neighbors[0].distance < 1e-6);
        assert_eq!(neighbors[1].index, 2);
        assert_eq!(index.excerpt(neighbors[0].index), Some("aligned"));
    }

    #[test]
    fn test_nearest_caps_at_k_and_corpus_size() {
        let index = index_of(vec![vec![1.0, 0.0]], &["only"]);
        assert_eq!(index.nearest(&[1.0, 0.0], 5).unwrap().len(), 1);
        assert!(index.nearest(&[1.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let index = index_of(vec![vec![1.0, 0.0]], &["only"]);
        assert!(matches!(
            index.nearest(&[1.0, 0.0, 0.0], 1),
            Err(Error::Search(_))
        ));
    }

    #[test]
    fn test_empty_index_returns_nothing() {
        let index = SemanticIndex::empty();
        assert!(index.nearest(&[1.0, 0.0], 3).unwrap().is_empty());
        assert_eq!(index.dimension(), 0);
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
