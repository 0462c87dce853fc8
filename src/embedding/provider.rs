use std::sync::Arc;

use super::error::EmbeddingError;

/// Maps normalized title text to a fixed-dimension vector.
///
/// Implementations must be deterministic for a given model version and safe to call from
/// several request tasks at once. [`embedding_dim`](EmbeddingProvider::embedding_dim) must
/// not change over the provider's lifetime.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds several strings, preserving order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Output dimension of every vector this provider returns.
    fn embedding_dim(&self) -> usize;

    /// Returns `true` when vectors are synthetic rather than model output.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for Arc<T> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
