//! Tokenized corpus representation.
//!
//! The sampler consumes documents that have already been tokenized,
//! lowercased, stopword-filtered, etc. by an external preprocessing stage.
//! `Corpus` interns each distinct token string to a dense word id so that
//! the count tables can be plain fixed-shape vectors indexed by small
//! integers instead of nested string-keyed maps.

use ahash::AHashMap;

/// An immutable collection of tokenized documents.
///
/// Word ids are assigned in first-occurrence order while scanning documents
/// in document order, then position order, so corpus construction is
/// deterministic for a given input.
///
/// # Examples
///
/// ```
/// use topica::corpus::Corpus;
///
/// let corpus = Corpus::from_documents(vec![
///     vec!["cat".to_string(), "dog".to_string(), "cat".to_string()],
///     vec!["dog".to_string(), "fish".to_string()],
/// ]);
///
/// assert_eq!(corpus.num_documents(), 2);
/// assert_eq!(corpus.num_terms(), 3);
/// assert_eq!(corpus.total_tokens(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Term string -> word id.
    vocabulary: AHashMap<String, usize>,
    /// Word id -> term string.
    terms: Vec<String>,
    /// Documents as sequences of word ids, preserving token order.
    documents: Vec<Vec<usize>>,
    /// Total number of token occurrences across all documents.
    total_tokens: u64,
}

impl Corpus {
    /// Build a corpus from pre-tokenized documents.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut corpus = Corpus::default();

        for document in documents {
            let mut doc_ids = Vec::with_capacity(document.len());
            for token in document {
                let next_id = corpus.terms.len();
                let id = match corpus.vocabulary.get(&token) {
                    Some(&id) => id,
                    None => {
                        corpus.vocabulary.insert(token.clone(), next_id);
                        corpus.terms.push(token);
                        next_id
                    }
                };
                doc_ids.push(id);
            }
            corpus.total_tokens += doc_ids.len() as u64;
            corpus.documents.push(doc_ids);
        }

        corpus
    }

    /// Build a corpus from borrowed string slices (convenient for tests).
    pub fn from_slices(documents: &[&[&str]]) -> Self {
        Self::from_documents(
            documents
                .iter()
                .map(|doc| doc.iter().map(|t| (*t).to_string()).collect()),
        )
    }

    /// Number of documents, including empty ones.
    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Total number of token occurrences across the corpus.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// The word ids of document `d`, in token order.
    pub fn document(&self, d: usize) -> &[usize] {
        &self.documents[d]
    }

    /// Length of document `d` in tokens.
    pub fn doc_len(&self, d: usize) -> usize {
        self.documents[d].len()
    }

    /// The term string for a word id.
    pub fn term(&self, word_id: usize) -> &str {
        &self.terms[word_id]
    }

    /// Look up the word id of a term, if present.
    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// True if the corpus contains no token occurrences at all.
    ///
    /// A corpus with documents that are all empty is considered empty.
    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }
}
