//! Title verification service.
//!
//! [`Engine`] owns everything a request needs: the corpus, the candidate index built from
//! it, the policy gates and the embedding provider. It is built once at startup and is
//! read-only afterwards, so a single instance can be shared across request tasks behind an
//! `Arc` without locking.
//!
//! Request flow: normalize → lexical gates → embed → top-K search → score each candidate
//! → similarity gate.

pub mod corpus;
pub mod error;
pub mod service;
pub mod types;


pub use corpus::Corpus;
pub use error::EngineError;
pub use service::Engine;
pub use types::{VerificationResult, VerificationStatus, verification_probability};
