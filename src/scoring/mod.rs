//! Multi-signal similarity between a query title and retrieved corpus candidates.
//!
//! Each candidate gets three [0, 1] signals (semantic cosine, token Jaccard, normalized
//! Levenshtein) averaged into a base score, plus a flat bonus when the titles share a
//! phonetic code pair. The fused value is **not clamped**: an exact match scores
//! `1.0 + PHONETIC_BONUS`.
//!
//! Only the top-K candidates from the [`CandidateIndex`](crate::index::CandidateIndex) are
//! scored; the semantic index provides recall and these signals refine precision.

pub mod scorer;
pub mod types;


pub use scorer::{
    SimilarityScorer, cosine_similarity, edit_similarity, jaccard_similarity,
};
pub use types::{Candidate, ScoredCandidate, SimilarityBreakdown};
