use std::collections::HashSet;

use tracing::debug;

use crate::constants::SIMILARITY_THRESHOLD;
use crate::text::{Title, normalize};

use super::types::{Decision, Gate, PolicyState};

/// A word-set gate: rejects when any token is a member.
#[derive(Debug, Clone)]
struct LexicalGate {
    gate: Gate,
    words: HashSet<String>,
    on_hit: fn(String) -> PolicyState,
}

impl LexicalGate {
    fn new<I, S>(gate: Gate, words: I, on_hit: fn(String) -> PolicyState) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            gate,
            words,
            on_hit,
        }
    }

    fn first_hit<'t>(&self, title: &'t Title) -> Option<&'t str> {
        title
            .tokens()
            .iter()
            .map(String::as_str)
            .find(|token| self.words.contains(*token))
    }
}

/// Ordered policy gates built once from the startup word lists.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    lexical_gates: Vec<LexicalGate>,
    threshold: f64,
}

impl PolicyEngine {
    /// Builds the engine; every entry is normalized so membership matches title tokens.
    pub fn new<R, A, S1, S2>(restricted_words: R, forbidden_affixes: A) -> Self
    where
        R: IntoIterator<Item = S1>,
        A: IntoIterator<Item = S2>,
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        let lexical_gates = vec![
            LexicalGate::new(Gate::RestrictedWord, restricted_words, |word| {
                PolicyState::RestrictedRejected { word }
            }),
            LexicalGate::new(Gate::ForbiddenAffix, forbidden_affixes, |word| {
                PolicyState::AffixRejected { word }
            }),
        ];

        Self {
            lexical_gates,
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    /// Runs the lexical gates in priority order.
    ///
    /// Returns [`PolicyState::Unchecked`] when all pass, otherwise the first rejection.
    pub fn screen(&self, title: &Title) -> PolicyState {
        for gate in &self.lexical_gates {
            if let Some(word) = gate.first_hit(title) {
                debug!(gate = gate.gate.reason_code(), word, "Lexical gate rejected title");
                return (gate.on_hit)(word.to_string());
            }
        }
        PolicyState::Unchecked
    }

    /// Applies the similarity gate to the best fused score.
    pub fn decide(&self, best_score: f64) -> Decision {
        if best_score >= self.threshold {
            Decision::Rejected
        } else {
            Decision::Accepted
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of restricted words after normalization.
    pub fn restricted_word_count(&self) -> usize {
        self.gate_size(Gate::RestrictedWord)
    }

    /// Number of forbidden affixes after normalization.
    pub fn forbidden_affix_count(&self) -> usize {
        self.gate_size(Gate::ForbiddenAffix)
    }

    fn gate_size(&self, gate: Gate) -> usize {
        self.lexical_gates
            .iter()
            .find(|g| g.gate == gate)
            .map_or(0, |g| g.words.len())
    }
}
