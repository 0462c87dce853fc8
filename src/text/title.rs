use std::collections::HashSet;

use super::normalize::{normalize, tokenize};
use super::phonetic::{PhoneticCode, PhoneticEncoder};

/// A title in raw and derived forms.
///
/// Embeddings are not stored here. The candidate index owns corpus vectors and query
/// vectors live only for the duration of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    raw: String,
    normalized: String,
    tokens: Vec<String>,
    phonetic: Vec<PhoneticCode>,
}

impl Title {
    /// Normalizes, tokenizes and phonetically encodes `raw`.
    pub fn parse(raw: impl Into<String>, encoder: &PhoneticEncoder) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        let tokens = tokenize(&normalized);
        let phonetic = encoder.encode(&normalized);

        Self {
            raw,
            normalized,
            tokens,
            phonetic,
        }
    }

    /// The text as submitted.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Distinct tokens, for set-based lexical comparison.
    pub fn token_set(&self) -> HashSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }

    /// One code pair per token, in token order.
    pub fn phonetic(&self) -> &[PhoneticCode] {
        &self.phonetic
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
