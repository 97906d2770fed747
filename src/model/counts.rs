//! Sufficient-statistics count tables.
//!
//! Four integer tables fully determine the collapsed conditional the
//! resampler draws from:
//!
//! - `doc_topic[d][k]`: occurrences in document `d` currently labeled `k`
//! - `topic_word[k][w]`: corpus-wide occurrences of word `w` labeled `k`
//! - `topic_total[k]`: corpus-wide occurrences labeled `k`
//! - `doc_total[d]`: length of document `d` in tokens (constant)
//!
//! All tables are dense vectors indexed by small integers, so "absent"
//! reads as zero by construction and there is no delete-when-zero case to
//! get wrong. Counts are unsigned; a decrement below zero is an invariant
//! violation and surfaces as an error instead of wrapping.

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::error::{Result, TopicaError};
use crate::model::assignments::AssignmentStore;

/// Integer sufficient statistics for a set of topic assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTables {
    /// `num_docs x num_topics`.
    doc_topic: Vec<Vec<u32>>,
    /// `num_topics x num_terms`.
    topic_word: Vec<Vec<u32>>,
    /// Per-topic totals, length `num_topics`.
    topic_total: Vec<u32>,
    /// Per-document token counts, length `num_docs`; constant for a run.
    doc_total: Vec<u32>,
    /// Total token occurrences (`n`); constant for a run.
    total_tokens: u64,
}

impl CountTables {
    /// All-zero tables for the given shape.
    pub(crate) fn zeroed(num_docs: usize, num_topics: usize, num_terms: usize) -> Self {
        Self {
            doc_topic: vec![vec![0; num_topics]; num_docs],
            topic_word: vec![vec![0; num_terms]; num_topics],
            topic_total: vec![0; num_topics],
            doc_total: vec![0; num_docs],
            total_tokens: 0,
        }
    }

    /// Rebuild the tables from scratch off an assignment store.
    ///
    /// One pass over every occurrence, in document order then position
    /// order. Used by the initializer, and by tests to verify that the
    /// incrementally maintained tables match a direct recomputation.
    pub fn from_assignments(
        corpus: &Corpus,
        assignments: &AssignmentStore,
        num_topics: usize,
    ) -> Result<Self> {
        if assignments.num_documents() != corpus.num_documents() {
            return Err(TopicaError::internal(format!(
                "assignment store covers {} documents, corpus has {}",
                assignments.num_documents(),
                corpus.num_documents()
            )));
        }

        let mut tables = Self::zeroed(corpus.num_documents(), num_topics, corpus.num_terms());

        for d in 0..corpus.num_documents() {
            let words = corpus.document(d);
            let labels = assignments.doc(d);
            if words.len() != labels.len() {
                return Err(TopicaError::internal(format!(
                    "document {d} has {} tokens but {} labels",
                    words.len(),
                    labels.len()
                )));
            }
            for (&w, &k) in words.iter().zip(labels) {
                if k >= num_topics {
                    return Err(TopicaError::internal(format!(
                        "topic label {k} out of range for {num_topics} topics"
                    )));
                }
                tables.doc_topic[d][k] += 1;
                tables.topic_word[k][w] += 1;
                tables.topic_total[k] += 1;
                tables.doc_total[d] += 1;
                tables.total_tokens += 1;
            }
        }

        Ok(tables)
    }

    /// Number of topics the tables are shaped for.
    pub fn num_topics(&self) -> usize {
        self.topic_total.len()
    }

    /// Number of documents the tables are shaped for.
    pub fn num_documents(&self) -> usize {
        self.doc_total.len()
    }

    /// Number of distinct terms the tables are shaped for.
    pub fn num_terms(&self) -> usize {
        self.topic_word.first().map_or(0, Vec::len)
    }

    /// Occurrences in document `d` currently labeled `k`.
    pub fn doc_topic(&self, d: usize, k: usize) -> u32 {
        self.doc_topic[d][k]
    }

    /// Corpus-wide occurrences of word `w` currently labeled `k`.
    pub fn topic_word(&self, k: usize, w: usize) -> u32 {
        self.topic_word[k][w]
    }

    /// Corpus-wide occurrences currently labeled `k`.
    pub fn topic_total(&self, k: usize) -> u32 {
        self.topic_total[k]
    }

    /// Length of document `d` in tokens.
    pub fn doc_total(&self, d: usize) -> u32 {
        self.doc_total[d]
    }

    /// Total token occurrences across the corpus (`n`).
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Count one occurrence of word `w` in document `d` as topic `k`.
    ///
    /// `doc_total` and `total_tokens` are not touched: document lengths are
    /// fixed at initialization, and remove/reinsert must leave them alone.
    pub(crate) fn increment(&mut self, d: usize, w: usize, k: usize) {
        self.doc_topic[d][k] += 1;
        self.topic_word[k][w] += 1;
        self.topic_total[k] += 1;
    }

    /// Uncount one occurrence of word `w` in document `d` as topic `k`.
    ///
    /// Fails if any affected cell is already zero: that would mean the
    /// tables have drifted from the assignment store, and a wrapped count
    /// would silently corrupt every subsequent draw.
    pub(crate) fn decrement(&mut self, d: usize, w: usize, k: usize) -> Result<()> {
        let dt = &mut self.doc_topic[d][k];
        let tw = &mut self.topic_word[k][w];
        let tt = &mut self.topic_total[k];
        if *dt == 0 || *tw == 0 || *tt == 0 {
            return Err(TopicaError::internal(format!(
                "count underflow removing occurrence of word {w} (doc {d}, topic {k})"
            )));
        }
        *dt -= 1;
        *tw -= 1;
        *tt -= 1;
        Ok(())
    }

    /// Verify the cross-table sum invariants.
    ///
    /// - `sum_k doc_topic[d][k] == doc_total[d]` for every document
    /// - `sum_w topic_word[k][w] == topic_total[k]` for every topic
    /// - `sum_k topic_total[k] == total_tokens`
    ///
    /// Holds at every point between completed token updates; only inside
    /// the remove/reinsert window of a single update may it be violated.
    pub fn check_consistency(&self) -> Result<()> {
        for (d, row) in self.doc_topic.iter().enumerate() {
            let sum: u64 = row.iter().map(|&c| u64::from(c)).sum();
            if sum != u64::from(self.doc_total[d]) {
                return Err(TopicaError::internal(format!(
                    "doc_topic[{d}] sums to {sum}, expected doc_total {}",
                    self.doc_total[d]
                )));
            }
        }
        for (k, row) in self.topic_word.iter().enumerate() {
            let sum: u64 = row.iter().map(|&c| u64::from(c)).sum();
            if sum != u64::from(self.topic_total[k]) {
                return Err(TopicaError::internal(format!(
                    "topic_word[{k}] sums to {sum}, expected topic_total {}",
                    self.topic_total[k]
                )));
            }
        }
        let sum: u64 = self.topic_total.iter().map(|&c| u64::from(c)).sum();
        if sum != self.total_tokens {
            return Err(TopicaError::internal(format!(
                "topic_total sums to {sum}, expected total_tokens {}",
                self.total_tokens
            )));
        }
        Ok(())
    }
}
