//! Per-occurrence topic labels.

use serde::{Deserialize, Serialize};

/// The current topic label of every token occurrence.
///
/// Labels are keyed by `(document_index, position)` and shaped exactly like
/// the corpus: one inner vector per document, one entry per token. The
/// sampler is the only mutator; everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStore {
    topics: Vec<Vec<usize>>,
}

impl AssignmentStore {
    /// Wrap pre-drawn labels. The shape must match the corpus.
    pub(crate) fn new(topics: Vec<Vec<usize>>) -> Self {
        Self { topics }
    }

    /// Number of documents covered by the store.
    pub fn num_documents(&self) -> usize {
        self.topics.len()
    }

    /// Total number of labeled token occurrences.
    pub fn len(&self) -> usize {
        self.topics.iter().map(Vec::len).sum()
    }

    /// True if no occurrence is labeled.
    pub fn is_empty(&self) -> bool {
        self.topics.iter().all(Vec::is_empty)
    }

    /// The current topic of the occurrence at `(d, pos)`.
    pub fn topic(&self, d: usize, pos: usize) -> usize {
        self.topics[d][pos]
    }

    /// All labels of document `d`, in position order.
    pub fn doc(&self, d: usize) -> &[usize] {
        &self.topics[d]
    }

    /// Relabel the occurrence at `(d, pos)`.
    pub(crate) fn set_topic(&mut self, d: usize, pos: usize, topic: usize) {
        self.topics[d][pos] = topic;
    }
}
