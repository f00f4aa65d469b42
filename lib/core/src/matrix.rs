use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Dense, row-major square matrix of pairwise similarity scores.
///
/// Cell (i, j) holds the similarity of course i to course j. Scores are
/// unconstrained reals with higher meaning more similar; no symmetry or
/// diagonal value is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build from a row-major score buffer. Fails unless the buffer holds
    /// exactly `dim * dim` entries.
    pub fn new(dim: usize, scores: Vec<f32>) -> Result<Self> {
        let expected = dim * dim;
        if scores.len() != expected {
            return Err(Error::MatrixShape {
                expected,
                actual: scores.len(),
            });
        }
        Ok(Self { dim, scores })
    }

    /// Build from per-course rows. Every row must match the outer length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dim = rows.len();
        let mut scores = Vec::with_capacity(dim * dim);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != dim {
                return Err(Error::RaggedRow {
                    row,
                    expected: dim,
                    actual: entries.len(),
                });
            }
            scores.extend(entries);
        }
        Ok(Self { dim, scores })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The similarity row for course `index`, or `None` when out of range.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.scores[start..start + self.dim])
    }
}
