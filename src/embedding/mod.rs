//! Embedding provider seam and implementations.
//!
//! - [`EmbeddingProvider`] is the contract the engine consumes.
//! - [`minilm`] provides a sentence-transformers BERT embedder (with a stub mode).
//! - `mock` provides a scriptable provider for tests.

/// Mean-pooled BERT encoder.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Sentence-transformers MiniLM embedder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod provider;

pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use provider::EmbeddingProvider;
