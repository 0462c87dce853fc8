//! MiniLM sentence embedder (BERT + tokenizer, mean pooling).
//!
//! Defaults target `paraphrase-MiniLM-L6-v2`. Use [`MiniLmConfig::stub`] for tests and
//! local runs without model files.

/// MiniLM configuration.
pub mod config;
mod tokenizer;


pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};

use std::sync::Arc;

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::bert::BertEncoder;
use crate::embedding::device::{device_label, select_device};
use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::EmbeddingProvider;

use self::tokenizer::load_title_tokenizer;

enum EmbedderBackend {
    Model {
        encoder: Arc<BertEncoder>,
        tokenizer: Arc<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Sentence embedder for title similarity (supports stub mode).
pub struct MiniLmEmbedder {
    backend: EmbedderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device();
        debug!(device = device_label(&device), "Selected compute device for MiniLM");

        if config.testing_stub {
            warn!("MiniLM running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub { device },
                config,
            });
        }

        if let Some(path) = config.missing_file() {
            return Err(EmbeddingError::ModelFileMissing { path });
        }

        let encoder = BertEncoder::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if encoder.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: config.embedding_dim,
                actual: encoder.hidden_size(),
            });
        }

        let tokenizer = load_title_tokenizer(&config.tokenizer_path, config.max_seq_len)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            device = device_label(&device),
            "MiniLM model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder: Arc::new(encoder),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(MiniLmConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertEncoder,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Generating embedding (BERT forward pass)"
        );

        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = encoder
            .mean_pooled(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("BERT forward pass failed: {}", e),
            })?;

        let embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;

        if embedding.len() != self.config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.embedding_dim,
                actual: embedding.len(),
            });
        }

        Ok(embedding)
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding: Vec<f32> = (0..self.config.embedding_dim)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut embedding {
                *x /= norm;
            }
        }

        embedding
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the compute device label (`cpu`, `cuda`, `metal`).
    pub fn device(&self) -> &'static str {
        match &self.backend {
            EmbedderBackend::Model { device, .. } | EmbedderBackend::Stub { device } => {
                device_label(device)
            }
        }
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl EmbeddingProvider for MiniLmEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_with_model(text, encoder, tokenizer, device),
            EmbedderBackend::Stub { .. } => {
                debug!(text_len = text.len(), "Generating stub embedding");
                Ok(self.embed_stub(text))
            }
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub { .. })
    }
}
