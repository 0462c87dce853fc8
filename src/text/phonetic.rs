//! Double Metaphone codes for sound-alike matching.

use rphonetic::DoubleMetaphone;

/// Primary and alternate Double Metaphone codes for one word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneticCode {
    pub primary: String,
    pub alternate: String,
}

impl PhoneticCode {
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: alternate.into(),
        }
    }
}

/// Encodes normalized text into one [`PhoneticCode`] per token.
///
/// Codes are never truncated. A shared prefix of two long words is not a sound-alike
/// match.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneticEncoder;

impl PhoneticEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a single word.
    pub fn encode_word(&self, word: &str) -> PhoneticCode {
        let result = DoubleMetaphone::new(Some(max_code_len(word))).double_metaphone(word);
        PhoneticCode::new(result.primary().to_string(), result.alternate().to_string())
    }

    /// Encodes each whitespace-separated token independently, in token order.
    pub fn encode(&self, normalized: &str) -> Vec<PhoneticCode> {
        normalized
            .split_whitespace()
            .map(|word| self.encode_word(word))
            .collect()
    }
}

/// Double Metaphone emits at most two code characters per input character.
fn max_code_len(word: &str) -> usize {
    word.chars().count().saturating_mul(2).max(4)
}

/// Returns `true` if any query code pair appears, as a whole pair, anywhere in `candidate`.
///
/// Membership only; token positions are ignored.
pub fn phonetic_match(query: &[PhoneticCode], candidate: &[PhoneticCode]) -> bool {
    query.iter().any(|code| candidate.contains(code))
}
