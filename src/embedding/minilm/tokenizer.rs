use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use crate::embedding::error::EmbeddingError;

/// Reads `tokenizer.json`, truncating to `max_seq_len` tokens with padding disabled.
///
/// Titles are encoded one at a time, so padding would only add masked positions.
pub(crate) fn load_title_tokenizer(
    path: &Path,
    max_seq_len: usize,
) -> Result<Tokenizer, EmbeddingError> {
    let mut tokenizer =
        Tokenizer::from_file(path).map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("cannot read tokenizer at {}: {e}", path.display()),
        })?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_seq_len,
            ..TruncationParams::default()
        }))
        .map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("invalid truncation length {max_seq_len}: {e}"),
        })?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
