use tracing::{debug, info, instrument};

use crate::constants::{DEFAULT_TOP_K, DimConfig, validate_embedding_dim};
use crate::embedding::EmbeddingProvider;
use crate::index::{CandidateIndex, FlatL2Index};
use crate::policy::{PolicyEngine, PolicyState};
use crate::scoring::{Candidate, SimilarityScorer};
use crate::text::{PhoneticEncoder, Title};

use super::corpus::Corpus;
use super::error::EngineError;
use super::types::VerificationResult;

/// Duplicate-title verification engine.
pub struct Engine<E, I = FlatL2Index>
where
    E: EmbeddingProvider,
    I: CandidateIndex,
{
    corpus: Corpus,
    index: I,
    policy: PolicyEngine,
    scorer: SimilarityScorer,
    embedder: E,
    encoder: PhoneticEncoder,
    top_k: usize,
}

impl<E, I> std::fmt::Debug for Engine<E, I>
where
    E: EmbeddingProvider,
    I: CandidateIndex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("corpus_len", &self.corpus.len())
            .field("embedding_dim", &self.index.dim())
            .field("top_k", &self.top_k)
            .field("embedder_stub", &self.embedder.is_stub())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<E: EmbeddingProvider> Engine<E, FlatL2Index> {
    /// Embeds every corpus title and builds a flat L2 index over them.
    ///
    /// Fails on an empty corpus, a zero embedding dimension, any corpus vector whose
    /// dimension differs from the provider's declared one, or an embedding failure.
    pub fn build<T, S>(embedder: E, raw_titles: T, policy: PolicyEngine) -> Result<Self, EngineError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let encoder = PhoneticEncoder::new();
        let corpus = Corpus::new(raw_titles, &encoder)?;

        let dim = DimConfig::new(embedder.embedding_dim());
        dim.validate()?;

        debug!(
            corpus_len = corpus.len(),
            embedding_dim = dim.embedding_dim,
            "Embedding corpus"
        );

        let vectors = embedder.embed_batch(&corpus.normalized())?;
        if vectors.len() != corpus.len() {
            return Err(EngineError::EmbeddingCountMismatch {
                expected: corpus.len(),
                actual: vectors.len(),
            });
        }

        let index = FlatL2Index::build(dim.embedding_dim, vectors)?;

        info!(
            corpus_len = corpus.len(),
            embedding_dim = dim.embedding_dim,
            index_bytes = dim.f32_bytes() * corpus.len(),
            embedder_stub = embedder.is_stub(),
            restricted_words = policy.restricted_word_count(),
            forbidden_affixes = policy.forbidden_affix_count(),
            "Engine ready"
        );

        Ok(Self::assemble(corpus, index, policy, embedder, encoder))
    }
}

impl<E, I> Engine<E, I>
where
    E: EmbeddingProvider,
    I: CandidateIndex,
{
    /// Wraps a prebuilt index. The index must hold one vector per corpus title, in corpus
    /// order, with the provider's dimension.
    pub fn with_index<T, S>(
        embedder: E,
        raw_titles: T,
        index: I,
        policy: PolicyEngine,
    ) -> Result<Self, EngineError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let encoder = PhoneticEncoder::new();
        let corpus = Corpus::new(raw_titles, &encoder)?;

        if index.len() != corpus.len() {
            return Err(EngineError::IndexCorpusMismatch {
                index: index.len(),
                corpus: corpus.len(),
            });
        }
        validate_embedding_dim(index.dim(), embedder.embedding_dim())?;

        Ok(Self::assemble(corpus, index, policy, embedder, encoder))
    }

    fn assemble(
        corpus: Corpus,
        index: I,
        policy: PolicyEngine,
        embedder: E,
        encoder: PhoneticEncoder,
    ) -> Self {
        Self {
            corpus,
            index,
            policy,
            scorer: SimilarityScorer::new(),
            embedder,
            encoder,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Verifies a proposed title against the corpus and policy.
    ///
    /// Callers must reject empty input before calling. Policy rejections are `Ok`;
    /// `Err` means the embedding provider failed or the engine is misconfigured.
    #[instrument(skip(self, raw_title), fields(title_len = raw_title.len()))]
    pub fn verify(&self, raw_title: &str) -> Result<VerificationResult, EngineError> {
        let title = Title::parse(raw_title, &self.encoder);

        let state = self.policy.screen(&title);
        if let Some(reason) = state.lexical_rejection() {
            debug!(status = state.debug_status(), "Rejected before similarity");
            return Ok(VerificationResult::lexical_rejection(reason));
        }

        let query_vector = self.embedder.embed(title.normalized())?;
        validate_embedding_dim(query_vector.len(), self.index.dim())?;

        let neighbors = self.index.search(&query_vector, self.top_k)?;
        debug!(candidates = neighbors.len(), "Candidate search complete");

        let candidates = neighbors
            .iter()
            .map(|n| {
                let title = self.corpus.get(n.slot);
                let vector = self.index.vector(n.slot);
                match (title, vector) {
                    (Some(title), Some(vector)) => Ok(Candidate {
                        slot: n.slot,
                        distance: n.distance,
                        title,
                        vector,
                    }),
                    _ => Err(EngineError::SlotOutOfRange { slot: n.slot }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some(best) = self.scorer.best_match(&title, &query_vector, candidates) else {
            debug!(
                candidates = neighbors.len(),
                "No candidate scored above zero"
            );
            return Ok(VerificationResult::no_match());
        };

        let matched = self
            .corpus
            .get(best.slot)
            .ok_or(EngineError::SlotOutOfRange { slot: best.slot })?;

        let decision = self.policy.decide(best.fused);
        let state = PolicyState::SimilarityChecked(decision);

        debug!(
            status = state.debug_status(),
            score = best.fused,
            slot = best.slot,
            threshold = self.policy.threshold(),
            "Similarity gate applied"
        );

        Ok(VerificationResult::scored(
            decision,
            best.fused,
            best.slot,
            matched.raw(),
        ))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn policy(&self) -> &PolicyEngine {
        &self.policy
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn embedding_dim(&self) -> usize {
        self.index.dim()
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn is_embedder_stub(&self) -> bool {
        self.embedder.is_stub()
    }
}
