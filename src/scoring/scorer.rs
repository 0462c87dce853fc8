use std::collections::HashSet;

use rapidfuzz::distance::levenshtein;
use tracing::debug;

use crate::constants::PHONETIC_BONUS;
use crate::text::{Title, phonetic_match};

use super::types::{Candidate, ScoredCandidate, SimilarityBreakdown};

/// Computes and fuses per-candidate similarity signals.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    phonetic_bonus: f64,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            phonetic_bonus: PHONETIC_BONUS,
        }
    }

    pub fn phonetic_bonus(&self) -> f64 {
        self.phonetic_bonus
    }

    /// Computes the four signals for one pair.
    pub fn breakdown(
        &self,
        query: &Title,
        query_vector: &[f32],
        candidate: &Title,
        candidate_vector: &[f32],
    ) -> SimilarityBreakdown {
        SimilarityBreakdown {
            semantic: cosine_similarity(query_vector, candidate_vector),
            jaccard: jaccard_similarity(query, candidate),
            edit: edit_similarity(query.normalized(), candidate.normalized()),
            phonetic_match: phonetic_match(query.phonetic(), candidate.phonetic()),
        }
    }

    /// Scores one candidate.
    pub fn score(
        &self,
        query: &Title,
        query_vector: &[f32],
        candidate: &Candidate<'_>,
    ) -> ScoredCandidate {
        let breakdown = self.breakdown(query, query_vector, candidate.title, candidate.vector);
        let fused = breakdown.fused(self.phonetic_bonus);

        debug!(
            slot = candidate.slot,
            distance = candidate.distance,
            semantic = breakdown.semantic,
            jaccard = breakdown.jaccard,
            edit = breakdown.edit,
            phonetic_match = breakdown.phonetic_match,
            fused,
            "Scored candidate"
        );

        ScoredCandidate {
            slot: candidate.slot,
            distance: candidate.distance,
            breakdown,
            fused,
        }
    }

    /// Scores every candidate and keeps the highest fused score above zero.
    ///
    /// On ties the earlier candidate (closer in the index) wins. Returns `None` when
    /// `candidates` is empty or no candidate scores above zero.
    pub fn best_match<'a>(
        &self,
        query: &Title,
        query_vector: &[f32],
        candidates: impl IntoIterator<Item = Candidate<'a>>,
    ) -> Option<ScoredCandidate> {
        candidates
            .into_iter()
            .map(|candidate| self.score(query, query_vector, &candidate))
            .fold(None, |best: Option<ScoredCandidate>, scored| {
                let floor = best.as_ref().map_or(0.0, |current| current.fused);
                if scored.fused > floor { Some(scored) } else { best }
            })
    }
}

/// Cosine similarity accumulated in `f64`; `0.0` for mismatched lengths or zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b.iter()).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

/// |tokens(a) ∩ tokens(b)| / |tokens(a) ∪ tokens(b)|; `0.0` when both are empty.
pub fn jaccard_similarity(a: &Title, b: &Title) -> f64 {
    let set_a = a.token_set();
    let set_b = b.token_set();
    jaccard(&set_a, &set_b)
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Levenshtein similarity scaled to [0, 1], where 1.0 means identical strings.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    levenshtein::normalized_similarity(a.chars(), b.chars())
}
