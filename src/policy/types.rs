/// A policy gate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    RestrictedWord,
    ForbiddenAffix,
    Similarity,
}

impl Gate {
    /// Stable reason code reported when this gate rejects.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Gate::RestrictedWord => "restricted-word",
            Gate::ForbiddenAffix => "forbidden-affix",
            Gate::Similarity => "too-similar",
        }
    }
}

/// Why a title was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    RestrictedWord {
        /// The offending token.
        word: String,
    },
    ForbiddenAffix {
        /// The offending token.
        word: String,
    },
    TooSimilar {
        /// Raw text of the corpus title with the highest fused score.
        matched_title: String,
        /// Corpus slot of that title.
        slot: usize,
        /// Fused similarity score.
        score: f64,
    },
}

impl RejectionReason {
    pub fn gate(&self) -> Gate {
        match self {
            RejectionReason::RestrictedWord { .. } => Gate::RestrictedWord,
            RejectionReason::ForbiddenAffix { .. } => Gate::ForbiddenAffix,
            RejectionReason::TooSimilar { .. } => Gate::Similarity,
        }
    }

    /// Stable machine-readable code (`restricted-word`, `forbidden-affix`, `too-similar`).
    pub fn code(&self) -> &'static str {
        self.gate().reason_code()
    }

    /// Human-readable explanation.
    pub fn message(&self) -> String {
        match self {
            RejectionReason::RestrictedWord { .. } => "Contains restricted words".to_string(),
            RejectionReason::ForbiddenAffix { .. } => {
                "Contains forbidden prefix/suffix".to_string()
            }
            RejectionReason::TooSimilar { matched_title, .. } => {
                format!("Too similar to existing title '{}'", matched_title)
            }
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// Outcome of the similarity gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
}

/// Per-request policy state.
///
/// Transitions: `Unchecked -> RestrictedRejected | AffixRejected | Unchecked` after the
/// lexical gates, then `Unchecked -> SimilarityChecked` once a score is available. Rejected
/// states are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyState {
    Unchecked,
    RestrictedRejected { word: String },
    AffixRejected { word: String },
    SimilarityChecked(Decision),
}

impl PolicyState {
    /// Returns `true` once no further gate may run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PolicyState::Unchecked)
    }

    /// The lexical rejection, if a lexical gate fired.
    pub fn lexical_rejection(&self) -> Option<RejectionReason> {
        match self {
            PolicyState::RestrictedRejected { word } => {
                Some(RejectionReason::RestrictedWord { word: word.clone() })
            }
            PolicyState::AffixRejected { word } => {
                Some(RejectionReason::ForbiddenAffix { word: word.clone() })
            }
            PolicyState::Unchecked | PolicyState::SimilarityChecked(_) => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            PolicyState::Unchecked => "UNCHECKED",
            PolicyState::RestrictedRejected { .. } => "RESTRICTED_REJECTED",
            PolicyState::AffixRejected { .. } => "AFFIX_REJECTED",
            PolicyState::SimilarityChecked(Decision::Accepted) => "ACCEPTED",
            PolicyState::SimilarityChecked(Decision::Rejected) => "SIMILARITY_REJECTED",
        }
    }
}
