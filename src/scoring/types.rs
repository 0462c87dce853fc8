use crate::text::Title;

/// The individual similarity signals for one (query, candidate) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityBreakdown {
    /// Cosine similarity of the embeddings.
    pub semantic: f64,
    /// Token-set Jaccard index.
    pub jaccard: f64,
    /// Normalized Levenshtein similarity of the normalized strings.
    pub edit: f64,
    /// Whether any phonetic code pair is shared.
    pub phonetic_match: bool,
}

impl SimilarityBreakdown {
    /// Unweighted mean of the three continuous signals.
    pub fn base(&self) -> f64 {
        (self.semantic + self.jaccard + self.edit) / 3.0
    }

    /// Base score plus `bonus` when phonetics match. Not clamped.
    pub fn fused(&self, bonus: f64) -> f64 {
        if self.phonetic_match {
            self.base() + bonus
        } else {
            self.base()
        }
    }
}

/// A retrieved corpus entry ready for scoring.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub slot: usize,
    /// Index distance, kept for diagnostics.
    pub distance: f32,
    pub title: &'a Title,
    pub vector: &'a [f32],
}

/// A candidate annotated with its signals and fused score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub slot: usize,
    pub distance: f32,
    pub breakdown: SimilarityBreakdown,
    pub fused: f64,
}

impl ScoredCandidate {
    /// Returns `true` if `fused` is at or above `threshold`.
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.fused >= threshold
    }
}
