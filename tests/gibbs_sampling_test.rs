//! Integration tests for the collapsed Gibbs sampling engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use topica::corpus::Corpus;
use topica::model::CountTables;
use topica::sampler::{GibbsConfig, GibbsSampler, recompute_tables};

fn tiny_corpus() -> Corpus {
    Corpus::from_slices(&[&["a", "b", "a"], &["b", "c"]])
}

fn config(num_topics: usize, num_sweeps: usize) -> GibbsConfig {
    GibbsConfig {
        num_topics,
        num_sweeps,
        seed: 42,
        ..Default::default()
    }
}

#[test]
fn test_zero_sweep_scenario() {
    // Corpus [["a","b","a"], ["b","c"]], K=2, fixed seed, no sweeps.
    let corpus = tiny_corpus();
    let sampler = GibbsSampler::new(config(2, 0)).unwrap();
    let model = sampler.fit(&corpus).unwrap();

    let counts = model.counts();
    assert_eq!(counts.doc_total(0), 3);
    assert_eq!(counts.doc_total(1), 2);
    assert_eq!(counts.total_tokens(), 5);
    counts.check_consistency().unwrap();

    // Regression oracle for the seeded initialization. With zero sweeps
    // the assignments are exactly the initial draws: one uniform label in
    // [0, K) per token, document order then position order, from
    // StdRng::seed_from_u64(seed) and nothing else. Re-derive that stream
    // here, independently of the engine, and pin the labels against it;
    // any change to the draw order, the generator, the range call, or the
    // seed handling shows up as a mismatch.
    let mut rng = StdRng::seed_from_u64(42);
    let expected: Vec<Vec<usize>> = [3usize, 2]
        .iter()
        .map(|&len| (0..len).map(|_| rng.random_range(0..2)).collect())
        .collect();
    assert_eq!(model.assignments().doc(0), &expected[0][..]);
    assert_eq!(model.assignments().doc(1), &expected[1][..]);

    // And the tables must be the ones those exact labels induce.
    let mut expected_doc_topic = [[0u32; 2]; 2];
    for (d, labels) in expected.iter().enumerate() {
        for &k in labels {
            expected_doc_topic[d][k] += 1;
        }
    }
    for d in 0..2 {
        for k in 0..2 {
            assert_eq!(counts.doc_topic(d, k), expected_doc_topic[d][k]);
        }
    }
}

#[test]
fn test_zero_sweeps_return_raw_initialization() {
    // Without sweeps the hyperparameters are never consulted, so models
    // differing only in alpha/beta must carry identical assignments.
    let corpus = tiny_corpus();

    let base = GibbsSampler::new(config(4, 0)).unwrap().fit(&corpus).unwrap();
    let other_config = GibbsConfig {
        alpha: 5.0,
        beta: 2.0,
        ..config(4, 0)
    };
    let other = GibbsSampler::new(other_config)
        .unwrap()
        .fit(&corpus)
        .unwrap();

    assert_eq!(base.assignments(), other.assignments());
    assert_eq!(base.counts(), other.counts());
}

#[test]
fn test_determinism_across_runs() {
    let corpus = tiny_corpus();
    let sampler = GibbsSampler::new(config(3, 25)).unwrap();

    let first = sampler.fit(&corpus).unwrap();
    let second = sampler.fit(&corpus).unwrap();

    assert_eq!(first.assignments(), second.assignments());
    assert_eq!(first.counts(), second.counts());
}

#[test]
fn test_recomputation_equivalence() {
    // The central CGS correctness property: the incrementally maintained
    // tables equal a from-scratch rebuild off the final assignments.
    let corpus = Corpus::from_slices(&[
        &["a", "b", "a", "c", "d"],
        &["b", "c"],
        &[],
        &["d", "d", "a", "b"],
    ]);

    for num_sweeps in [0, 1, 7, 30] {
        let sampler = GibbsSampler::new(config(3, num_sweeps)).unwrap();
        let model = sampler.fit(&corpus).unwrap();

        let rebuilt = recompute_tables(&corpus, &model).unwrap();
        assert_eq!(model.counts(), &rebuilt, "num_sweeps={num_sweeps}");
        model.counts().check_consistency().unwrap();
    }
}

#[test]
fn test_consistency_after_every_sweep_count() {
    let corpus = tiny_corpus();
    for num_sweeps in 0..10 {
        let sampler = GibbsSampler::new(config(2, num_sweeps)).unwrap();
        let model = sampler.fit(&corpus).unwrap();
        model.counts().check_consistency().unwrap();

        // topic_total summed over k equals n, constant across the run.
        let total: u64 = (0..2).map(|k| u64::from(model.counts().topic_total(k))).sum();
        assert_eq!(total, 5);
    }
}

#[test]
fn test_single_topic_is_a_fixed_point() {
    // With K = 1 every occurrence stays topic 0 regardless of sweeps.
    let corpus = tiny_corpus();
    let sampler = GibbsSampler::new(config(1, 50)).unwrap();
    let model = sampler.fit(&corpus).unwrap();

    for d in 0..corpus.num_documents() {
        assert!(model.assignments().doc(d).iter().all(|&k| k == 0));
        assert_eq!(
            model.counts().doc_topic(d, 0),
            model.counts().doc_total(d)
        );
    }
}

#[test]
fn test_empty_documents_are_skipped() {
    let corpus = Corpus::from_slices(&[&[], &["a", "b"], &[]]);
    let sampler = GibbsSampler::new(config(2, 10)).unwrap();
    let model = sampler.fit(&corpus).unwrap();

    assert_eq!(model.counts().doc_total(0), 0);
    assert_eq!(model.counts().doc_total(2), 0);
    assert_eq!(model.counts().total_tokens(), 2);
    assert_eq!(model.assignments().doc(0).len(), 0);
    model.counts().check_consistency().unwrap();
}

#[test]
fn test_empty_corpus_returns_empty_model() {
    let corpus = Corpus::from_slices(&[]);
    let sampler = GibbsSampler::new(config(5, 100)).unwrap();
    let model = sampler.fit(&corpus).unwrap();

    assert!(model.assignments().is_empty());
    assert_eq!(model.counts().total_tokens(), 0);
    assert_eq!(model.counts().num_topics(), 5);
    model.counts().check_consistency().unwrap();
}

#[test]
fn test_rebuild_rejects_mismatched_topic_count() {
    let corpus = tiny_corpus();
    let sampler = GibbsSampler::new(config(4, 5)).unwrap();
    let model = sampler.fit(&corpus).unwrap();

    // Rebuilding with fewer topics than some label must fail, not wrap.
    let result = CountTables::from_assignments(&corpus, model.assignments(), 1);
    // With 4 topics and 5 tokens at least one label exceeds 0 with
    // overwhelming probability under the pinned seed; tolerate the
    // alternative by checking the rebuild agrees when it succeeds.
    match result {
        Err(_) => {}
        Ok(tables) => assert_eq!(&tables, model.counts()),
    }
}

#[test]
fn test_dominant_alpha_spreads_topics_by_length() {
    // With alpha huge the document-affinity factor swamps word identity,
    // so each topic's share of a document approaches doc_total / K.
    // Distinct words keep the word-affinity factor flat across topics, so
    // the draw is near-uniform and the tolerance below is conservative.
    let tokens: Vec<String> = (0..200).map(|i| format!("w{i}")).collect();
    let corpus = Corpus::from_documents(vec![tokens]);

    let dominant = GibbsConfig {
        num_topics: 2,
        alpha: 1000.0,
        num_sweeps: 5,
        seed: 42,
        ..Default::default()
    };
    let model = GibbsSampler::new(dominant).unwrap().fit(&corpus).unwrap();

    let expected = 200.0 / 2.0;
    for k in 0..2 {
        let count = f64::from(model.counts().doc_topic(0, k));
        assert!(
            (count - expected).abs() < 0.3 * expected,
            "topic {k} holds {count} of 200 tokens, expected about {expected}"
        );
    }
}

#[test]
fn test_dominant_alpha_on_tiny_corpus() {
    // The same property on [["a","b","a"], ["b","c"]] with 5 sweeps. The
    // documents are too short for tight count bounds, so assert
    // sum-consistency plus the loose smoothed-distribution bound: with
    // alpha = 1000 every per-document topic probability is pinned near
    // 1 / K no matter how the handful of tokens lands.
    let corpus = tiny_corpus();
    let dominant = GibbsConfig {
        num_topics: 2,
        alpha: 1000.0,
        num_sweeps: 5,
        seed: 42,
        ..Default::default()
    };
    let model = GibbsSampler::new(dominant).unwrap().fit(&corpus).unwrap();

    model.counts().check_consistency().unwrap();
    assert_eq!(model.counts().doc_total(0), 3);
    assert_eq!(model.counts().doc_total(1), 2);

    for d in 0..2 {
        let dist = model.document_topic_distribution(d);
        for (k, &p) in dist.iter().enumerate() {
            assert!(
                (p - 0.5).abs() < 1e-3,
                "doc {d} topic {k} has probability {p}, expected about 0.5"
            );
        }
    }
}
