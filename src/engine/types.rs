use crate::policy::{Decision, RejectionReason};

/// Final verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Accepted,
    Rejected,
}

impl From<Decision> for VerificationStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => VerificationStatus::Accepted,
            Decision::Rejected => VerificationStatus::Rejected,
        }
    }
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Accepted => "Accepted",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}

/// Outcome of [`Engine::verify`](super::Engine::verify).
///
/// Score fields are present only when the similarity stage ran, i.e. never for lexical
/// rejections.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub status: VerificationStatus,
    /// Present only when rejected.
    pub reason: Option<RejectionReason>,
    /// Best fused score among the retrieved candidates, floored at 0.0. May exceed 1.0.
    pub similarity_score: Option<f64>,
    /// Raw text of the corpus title that produced `similarity_score`; absent when no
    /// candidate scored above zero.
    pub matched_title: Option<String>,
    /// `similarity_score` as a percentage rounded to 2 decimals. May exceed 100.
    pub verification_probability: Option<f64>,
}

impl VerificationResult {
    /// A rejection from a lexical gate.
    pub fn lexical_rejection(reason: RejectionReason) -> Self {
        Self {
            status: VerificationStatus::Rejected,
            reason: Some(reason),
            similarity_score: None,
            matched_title: None,
            verification_probability: None,
        }
    }

    /// A similarity-gate outcome for `score` against `matched_title`.
    pub fn scored(
        decision: Decision,
        score: f64,
        slot: usize,
        matched_title: impl Into<String>,
    ) -> Self {
        let matched_title = matched_title.into();
        let reason = match decision {
            Decision::Rejected => Some(RejectionReason::TooSimilar {
                matched_title: matched_title.clone(),
                slot,
                score,
            }),
            Decision::Accepted => None,
        };

        Self {
            status: decision.into(),
            reason,
            similarity_score: Some(score),
            matched_title: Some(matched_title),
            verification_probability: Some(verification_probability(score)),
        }
    }

    /// Accepted with a zero score: no retrieved candidate scored above zero.
    pub fn no_match() -> Self {
        Self {
            status: VerificationStatus::Accepted,
            reason: None,
            similarity_score: Some(0.0),
            matched_title: None,
            verification_probability: Some(0.0),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == VerificationStatus::Accepted
    }

    pub fn is_rejected(&self) -> bool {
        self.status == VerificationStatus::Rejected
    }

    /// Reason code when rejected.
    pub fn reason_code(&self) -> Option<&'static str> {
        self.reason.as_ref().map(RejectionReason::code)
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.reason, self.similarity_score) {
            (Some(reason), _) => write!(f, "{} ({})", self.status.as_str(), reason.code()),
            (None, Some(score)) => write!(f, "{} (score: {:.4})", self.status.as_str(), score),
            (None, None) => write!(f, "{}", self.status.as_str()),
        }
    }
}

/// Scales a fused score to a percentage rounded to 2 decimals.
///
/// The score is not clamped first, so an exact match with a phonetic bonus reports 110.0.
/// Halves round away from zero, so an exact `.xx5` percentage can differ in the last
/// digit from banker's rounding.
pub fn verification_probability(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}
