use std::cmp::Ordering;

use tracing::debug;

use super::error::IndexError;
use super::{CandidateIndex, Neighbor};

/// Exact brute-force index over squared Euclidean distance.
///
/// Vectors are stored contiguously in slot order, so slot `i` is the `i`-th vector passed
/// to [`FlatL2Index::build`].
#[derive(Debug, Clone)]
pub struct FlatL2Index {
    dim: usize,
    data: Vec<f32>,
}

impl FlatL2Index {
    /// Builds the index, checking that every vector has dimension `dim`.
    pub fn build(dim: usize, vectors: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        if dim == 0 {
            return Err(IndexError::ZeroDimension);
        }
        if vectors.is_empty() {
            return Err(IndexError::Empty);
        }

        let mut data = Vec::with_capacity(dim * vectors.len());
        for (slot, vector) in vectors.into_iter().enumerate() {
            if vector.len() != dim {
                return Err(IndexError::DimensionMismatch {
                    slot,
                    expected: dim,
                    actual: vector.len(),
                });
            }
            data.extend_from_slice(&vector);
        }

        debug!(dim, vectors = data.len() / dim, "Flat L2 index built");

        Ok(Self { dim, data })
    }
}

impl CandidateIndex for FlatL2Index {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if query.len() != self.dim {
            return Err(IndexError::QueryDimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(slot, vector)| Neighbor {
                slot,
                distance: squared_l2(query, vector),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then(a.slot.cmp(&b.slot))
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }

    fn vector(&self, slot: usize) -> Option<&[f32]> {
        let start = slot.checked_mul(self.dim)?;
        self.data.get(start..start + self.dim)
    }

    fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

/// Squared Euclidean distance. Extra trailing elements of the longer slice are ignored.
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
