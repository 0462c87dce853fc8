//! Accept/reject policy.
//!
//! Three gates run in fixed priority order and stop at the first rejection:
//!
//! 1. restricted word (any token in the restricted set)
//! 2. forbidden prefix/suffix (any token in the affix set, whole-token match)
//! 3. similarity (best fused score `>= SIMILARITY_THRESHOLD`)
//!
//! Gates 1 and 2 are lexical and run before any embedding or index work. Gate 3 needs
//! the scorer's output and is applied by the engine through [`PolicyEngine::decide`].

pub mod gates;
pub mod types;


pub use gates::PolicyEngine;
pub use types::{Decision, Gate, PolicyState, RejectionReason};
