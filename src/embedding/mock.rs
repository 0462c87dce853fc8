//! Scriptable [`EmbeddingProvider`] for tests.

use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::EmbeddingError;
use super::provider::EmbeddingProvider;

/// In-memory provider with fixed vectors per text and failure injection.
///
/// Texts without a registered vector get a deterministic hash-seeded unit vector, so
/// identical inputs always embed identically and distinct inputs are nearly orthogonal.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Returns `vector` for `text`. The vector may have any length, which lets tests
    /// exercise dimension checks.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Fails whenever `text` is embedded.
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.failing.insert(text.into());
        self
    }

    /// Fails on every call.
    pub fn always_failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Number of `embed` calls so far (batch calls count each text).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hashed_vector(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish() | 1;

        let mut vector: Vec<f32> = (0..self.dim)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 2001) as f32 / 1000.0 - 1.0
            })
            .collect();

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl EmbeddingProvider for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_all || self.failing.contains(text) {
            return Err(EmbeddingError::Unavailable {
                reason: format!("mock failure for '{}'", text),
            });
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.hashed_vector(text)))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
