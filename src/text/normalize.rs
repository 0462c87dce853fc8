/// Canonicalizes raw title text.
///
/// Lowercases, drops every character that is not an ASCII letter, ASCII digit or
/// whitespace, collapses whitespace runs to a single space and trims both ends.
/// An all-punctuation input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}
