use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default MiniLM embedding dimension.
pub const MINILM_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
pub struct MiniLmConfig {
    /// Directory holding `config.json` and `model.safetensors`.
    pub model_dir: PathBuf,
    /// Path to `tokenizer.json`.
    pub tokenizer_path: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Expected output embedding dimension.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            tokenizer_path: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Creates a config for a model directory, expecting `tokenizer.json` inside it.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        let model_dir = model_dir.into();
        let tokenizer_path = model_dir.join("tokenizer.json");

        Self {
            model_dir,
            tokenizer_path,
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Overrides the expected embedding dimension.
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelDirNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// First required model file that is absent, in load order.
    pub fn missing_file(&self) -> Option<PathBuf> {
        [
            self.model_dir.join("config.json"),
            self.model_dir.join("model.safetensors"),
            self.tokenizer_path.clone(),
        ]
        .into_iter()
        .find(|path| !path.is_file())
    }
}
