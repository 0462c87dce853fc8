use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading or running an [`EmbeddingProvider`](super::EmbeddingProvider).
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The configured model directory does not exist.
    #[error("model directory not found: {path}")]
    ModelDirNotFound { path: PathBuf },

    /// A required model file is absent from the model directory.
    #[error("model file missing: {path}")]
    ModelFileMissing { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    /// Model output width differs from the configured embedding dimension.
    #[error("model produces {actual}-dim vectors, configured for {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The provider could not serve this request.
    #[error("embedding provider unavailable: {reason}")]
    Unavailable { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
