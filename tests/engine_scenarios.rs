//! Engine scenarios run against scripted embeddings.

use std::collections::HashSet;
use std::io::Write;

use title_guard::embedding::{EmbeddingProvider, MockEmbedder};
use title_guard::engine::{Engine, EngineError, VerificationStatus};
use title_guard::index::{CandidateIndex, FlatL2Index};
use title_guard::policy::{PolicyEngine, RejectionReason};
use title_guard::text::normalize;
use title_guard::wordlist::{load_titles, load_word_list};

fn scenario_engine() -> Engine<MockEmbedder> {
    Engine::build(
        MockEmbedder::new(384),
        ["Space Adventure"],
        PolicyEngine::new(["banned"], ["xx"]),
    )
    .unwrap()
}

#[test]
fn scenario_exact_title_is_too_similar() {
    let result = scenario_engine().verify("space adventure").unwrap();

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.reason_code(), Some("too-similar"));
    assert_eq!(result.matched_title.as_deref(), Some("Space Adventure"));
    assert!((result.similarity_score.unwrap() - 1.1).abs() < 1e-6);
    assert!(result.verification_probability.unwrap() >= 75.0);
}

#[test]
fn scenario_restricted_word() {
    let result = scenario_engine().verify("banned story").unwrap();
    assert_eq!(result.reason_code(), Some("restricted-word"));
}

#[test]
fn scenario_unrelated_phrase() {
    let result = scenario_engine()
        .verify("completely unrelated phrase")
        .unwrap();
    assert_eq!(result.status, VerificationStatus::Accepted);
    assert!(result.verification_probability.unwrap() < 75.0);
}

#[test]
fn restricted_word_needs_no_neighbors_or_embeddings() {
    let embedder = MockEmbedder::new(8).failing_on("banned story");
    let engine = Engine::build(embedder, ["Space Adventure"], PolicyEngine::new(["banned"], ["xx"]))
        .unwrap();

    let result = engine.verify("Banned Story").unwrap();
    assert!(matches!(
        result.reason,
        Some(RejectionReason::RestrictedWord { ref word }) if word == "banned"
    ));
}

#[test]
fn phonetic_bonus_can_push_over_threshold() {
    // cosine 0.9, jaccard 1/3, edit 12/13: base ~0.719, bonus lifts it to ~0.819.
    let embedder = MockEmbedder::new(2)
        .with_vector("smith journal", vec![1.0, 0.0])
        .with_vector("smyth journal", vec![0.9, 0.19f32.sqrt()]);
    let engine = Engine::build(
        embedder,
        ["Smith Journal"],
        PolicyEngine::new(Vec::<String>::new(), Vec::<String>::new()),
    )
    .unwrap();

    let result = engine.verify("Smyth Journal").unwrap();
    let score = result.similarity_score.unwrap();

    assert!(score >= 0.75, "score was {score}");
    assert!(score - 0.1 < 0.75, "score was {score}");
    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.matched_title.as_deref(), Some("Smith Journal"));
}

#[test]
fn index_results_are_bounded_and_sorted() {
    let titles: Vec<String> = (0..12).map(|i| format!("Weekly Bulletin {i}")).collect();
    let embedder = MockEmbedder::new(16);
    let engine = Engine::build(
        embedder,
        titles.clone(),
        PolicyEngine::new(Vec::<String>::new(), Vec::<String>::new()),
    )
    .unwrap();

    let query = engine.embedder().embed("weekly bulletin 3").unwrap();
    let neighbors = engine.index().search(&query, 5).unwrap();

    assert_eq!(neighbors.len(), 5);
    assert_eq!(neighbors[0].slot, 3);
    assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert!(neighbors.iter().all(|n| n.slot < titles.len()));
}

#[test]
fn custom_index_can_be_substituted() {
    let embedder = MockEmbedder::new(2)
        .with_vector("north star", vec![1.0, 0.0])
        .with_vector("south wind", vec![0.0, 1.0]);
    let index = FlatL2Index::build(2, vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let engine = Engine::with_index(
        embedder,
        ["North Star", "South Wind"],
        index,
        PolicyEngine::new(Vec::<String>::new(), Vec::<String>::new()),
    )
    .unwrap();

    let result = engine.verify("North Star").unwrap();
    assert_eq!(result.matched_title.as_deref(), Some("North Star"));
    assert_eq!(result.status, VerificationStatus::Rejected);
}

#[test]
fn empty_corpus_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# no titles yet").unwrap();

    let titles = load_titles(file.path()).unwrap();
    let err = Engine::build(
        MockEmbedder::new(384),
        titles,
        PolicyEngine::new(Vec::<String>::new(), Vec::<String>::new()),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::EmptyCorpus));
}

#[test]
fn bundled_data_files_build_an_engine() {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let titles = load_titles(&data.join("existing_titles.txt")).unwrap();
    let restricted: HashSet<String> = load_word_list(&data.join("restricted_words.txt")).unwrap();
    let affixes = load_word_list(&data.join("forbidden_prefix_suffix.txt")).unwrap();

    let engine = Engine::build(
        MockEmbedder::new(384),
        titles.clone(),
        PolicyEngine::new(&restricted, &affixes),
    )
    .unwrap();

    assert_eq!(engine.corpus().len(), titles.len());
    for title in titles.iter().take(3) {
        let result = engine.verify(title).unwrap();
        assert!(result.is_rejected(), "{title} should be rejected");
    }

    assert_eq!(normalize("  The  TIMES!! "), "the times");
}
