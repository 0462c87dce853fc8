//! Process-wide constants.
//!
//! Threshold, phonetic bonus and retrieval depth are fixed and are not read from
//! [`crate::config::Config`].
//!
//! The embedding dimension is declared by the embedder, used to build the candidate index
//! and checked against every query vector. [`DimConfig`] carries it through startup and
//! [`validate_embedding_dim`] enforces it at each boundary.

/// Output dimension of `paraphrase-MiniLM-L6-v2`.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the embedding model per title.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// Number of nearest corpus entries rescored per request.
pub const DEFAULT_TOP_K: usize = 5;

/// Fused scores at or above this value are rejected as too similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Added to the fused score when any phonetic code pair is shared.
pub const PHONETIC_BONUS: f64 = 0.1;

/// Embedding width agreed between the provider and the candidate index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimConfig {
    pub embedding_dim: usize,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl DimConfig {
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    /// A zero width can never index anything.
    pub fn validate(&self) -> Result<(), DimValidationError> {
        match self.embedding_dim {
            0 => Err(DimValidationError::ZeroDimension),
            _ => Ok(()),
        }
    }

    /// Bytes one stored `f32` vector occupies.
    pub fn f32_bytes(&self) -> usize {
        self.embedding_dim * std::mem::size_of::<f32>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimValidationError {
    #[error("embedding dimension must be non-zero")]
    ZeroDimension,

    /// A vector's width differs from the width fixed at startup.
    #[error("expected {expected}-dim embedding, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Checks a vector width against the process-wide embedding dimension.
///
/// ```
/// use title_guard::constants::{DEFAULT_EMBEDDING_DIM, validate_embedding_dim};
///
/// assert!(validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).is_ok());
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual == expected {
        Ok(())
    } else {
        Err(DimValidationError::DimensionMismatch { expected, actual })
    }
}
