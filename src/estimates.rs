//! Read-only views over a fitted model.
//!
//! A [`TopicModel`] is what [`crate::sampler::GibbsSampler::fit`] returns:
//! the final assignment store and count tables, plus the smoothing
//! hyperparameters needed to turn raw counts into probability estimates.
//! Everything here is a pure view; nothing mutates the sampler's output.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::model::{AssignmentStore, CountTables};
use crate::sampler::GibbsConfig;

/// The outcome of a sampling run.
///
/// Point estimates are the standard smoothed-count ratios:
/// `p(topic k | doc d) ∝ doc_topic[d][k] + alpha` and
/// `p(word w | topic k) ∝ topic_word[k][w] + beta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicModel {
    config: GibbsConfig,
    assignments: AssignmentStore,
    counts: CountTables,
}

/// One term's weight within a topic, for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// Per-document frequency of a (term, assigned topic) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTopicCount {
    pub term: String,
    pub topic: usize,
    pub count: usize,
}

impl TopicModel {
    pub(crate) fn new(
        config: GibbsConfig,
        assignments: AssignmentStore,
        counts: CountTables,
    ) -> Self {
        Self {
            config,
            assignments,
            counts,
        }
    }

    /// Number of topics the model was fitted with.
    pub fn num_topics(&self) -> usize {
        self.config.num_topics
    }

    /// The configuration the model was fitted with.
    pub fn config(&self) -> &GibbsConfig {
        &self.config
    }

    /// The final per-occurrence topic labels.
    pub fn assignments(&self) -> &AssignmentStore {
        &self.assignments
    }

    /// The final sufficient-statistics tables.
    pub fn counts(&self) -> &CountTables {
        &self.counts
    }

    /// The final topic of the occurrence at `(d, pos)`.
    pub fn topic(&self, d: usize, pos: usize) -> usize {
        self.assignments.topic(d, pos)
    }

    /// Smoothed topic mixture of document `d`; sums to 1.
    pub fn document_topic_distribution(&self, d: usize) -> Vec<f64> {
        let k = self.config.num_topics;
        let total = f64::from(self.counts.doc_total(d)) + k as f64 * self.config.alpha;
        (0..k)
            .map(|topic| (f64::from(self.counts.doc_topic(d, topic)) + self.config.alpha) / total)
            .collect()
    }

    /// Smoothed word distribution of topic `k`; sums to 1 over the
    /// vocabulary (empty if the vocabulary is empty).
    pub fn topic_word_distribution(&self, k: usize) -> Vec<f64> {
        let num_terms = self.counts.num_terms();
        let total =
            f64::from(self.counts.topic_total(k)) + num_terms as f64 * self.config.beta;
        (0..num_terms)
            .map(|w| (f64::from(self.counts.topic_word(k, w)) + self.config.beta) / total)
            .collect()
    }

    /// The `n_words` highest-probability terms of every topic, descending.
    pub fn top_words(&self, corpus: &Corpus, n_words: usize) -> Vec<Vec<TermWeight>> {
        (0..self.config.num_topics)
            .map(|k| {
                let distribution = self.topic_word_distribution(k);
                let mut ranked: Vec<TermWeight> = distribution
                    .into_iter()
                    .enumerate()
                    .map(|(w, weight)| TermWeight {
                        term: corpus.term(w).to_string(),
                        weight,
                    })
                    .collect();
                ranked.sort_by(|a, b| {
                    b.weight
                        .partial_cmp(&a.weight)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                ranked.truncate(n_words);
                ranked
            })
            .collect()
    }

    /// Frequency of each (term, assigned topic) pair in document `d`,
    /// sorted by count descending, then term, then topic.
    ///
    /// This is the reporting view downstream consumers aggregate from; it
    /// reflects the final assignment store exactly.
    pub fn document_word_topics(&self, corpus: &Corpus, d: usize) -> Vec<WordTopicCount> {
        let mut frequencies: AHashMap<(usize, usize), usize> = AHashMap::new();
        for (&w, &k) in corpus.document(d).iter().zip(self.assignments.doc(d)) {
            *frequencies.entry((w, k)).or_insert(0) += 1;
        }

        let mut pairs: Vec<WordTopicCount> = frequencies
            .into_iter()
            .map(|((w, topic), count)| WordTopicCount {
                term: corpus.term(w).to_string(),
                topic,
                count,
            })
            .collect();
        pairs.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.term.cmp(&b.term))
                .then_with(|| a.topic.cmp(&b.topic))
        });
        pairs
    }
}
