//! Nearest-neighbor retrieval over corpus embeddings.
//!
//! The index is built once from the full corpus and is read-only afterwards. Callers only
//! consume the returned slot list, so [`FlatL2Index`] can be swapped for an approximate
//! structure implementing [`CandidateIndex`] without touching the engine.

pub mod error;
pub mod flat;


pub use error::IndexError;
pub use flat::{FlatL2Index, squared_l2};

/// One search hit: a corpus slot and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position in the corpus the index was built from.
    pub slot: usize,
    /// Squared Euclidean distance (smaller is closer).
    pub distance: f32,
}

/// Read-only top-K retrieval by metric distance.
pub trait CandidateIndex: Send + Sync {
    /// Returns up to `k` neighbors, ascending by distance.
    ///
    /// Fewer than `k` results are returned only when the index holds fewer than `k`
    /// vectors. Every returned slot is `< self.len()`.
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError>;

    /// Stored vector for `slot`, if the slot exists.
    fn vector(&self, slot: usize) -> Option<&[f32]>;

    /// Number of indexed vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension every stored and query vector must have.
    fn dim(&self) -> usize;
}
