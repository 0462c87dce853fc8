//! Title Guard library crate (used by the server and integration tests).
//!
//! Decides whether a proposed title duplicates an existing one by fusing semantic,
//! lexical and phonetic similarity, behind a small set of policy gates.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Engine`], [`VerificationResult`] - The verification service and its verdict
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`PolicyEngine`], [`RejectionReason`] - Gates and rejection reasons
//!
//! ## Embedding & Retrieval
//! - [`EmbeddingProvider`] - The embedding seam
//! - [`MiniLmEmbedder`], [`MiniLmConfig`] - Sentence-transformers BERT embedder
//! - [`CandidateIndex`], [`FlatL2Index`] - Nearest-neighbor candidate retrieval
//!
//! ## Scoring & Text
//! - [`SimilarityScorer`] - Cosine, Jaccard, edit similarity and phonetic bonus
//! - [`normalize`], [`PhoneticEncoder`], [`Title`] - Text canonicalization
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod gateway;
pub mod index;
pub mod policy;
pub mod scoring;
pub mod text;
pub mod wordlist;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_TOP_K, DimConfig, DimValidationError, PHONETIC_BONUS,
    SIMILARITY_THRESHOLD, validate_embedding_dim,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{EmbeddingError, EmbeddingProvider, MiniLmConfig, MiniLmEmbedder};
pub use engine::{Corpus, Engine, EngineError, VerificationResult, VerificationStatus};
pub use gateway::{AppState, GatewayError, create_router_with_state};
pub use index::{CandidateIndex, FlatL2Index, IndexError, Neighbor};
pub use policy::{Decision, Gate, PolicyEngine, PolicyState, RejectionReason};
pub use scoring::{SimilarityBreakdown, SimilarityScorer};
pub use text::{PhoneticEncoder, Title, normalize};
pub use wordlist::{WordListError, load_titles, load_word_list};
