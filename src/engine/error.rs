use thiserror::Error;

use crate::constants::DimValidationError;
use crate::embedding::EmbeddingError;
use crate::index::IndexError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("embedding dimension error: {0}")]
    Dimension(#[from] DimValidationError),

    #[error("candidate index error: {0}")]
    Index(#[from] IndexError),

    #[error("embedding provider returned {actual} vectors for {expected} corpus titles")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    #[error("index holds {index} vectors but corpus has {corpus} titles")]
    IndexCorpusMismatch { index: usize, corpus: usize },

    #[error("index returned slot {slot} with no corpus entry")]
    SlotOutOfRange { slot: usize },

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

impl EngineError {
    /// Returns `true` for errors that mean the engine is misconfigured and must not serve.
    ///
    /// Embedding failures are the only per-request errors; callers may retry those.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, EngineError::Embedding(_))
    }
}
