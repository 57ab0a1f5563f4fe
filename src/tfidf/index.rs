//! Index storage and document lifecycle.
//!
//! [`SearchIndex`] owns the stop-word set, the forward index (document to
//! word frequencies), the inverted index (word to postings), per-document
//! metadata, and the live id set. The inverted index owns the canonical
//! storage of every indexed word as an `Arc<str>`; the forward index shares
//! those allocations, so a word's bytes are stored once no matter how many
//! documents contain it.
//!
//! The index is read-many/write-one: any number of concurrent readers is
//! safe, but mutations (`add_document`, `remove_document*`) must be
//! serialized by the caller — `&mut self` makes the compiler enforce this.

use crate::document::DocumentStatus;
use crate::error::SearchError;
use crate::tfidf::tokenizer::{is_valid_word, split_into_words};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

static EMPTY_WORD_FREQUENCIES: BTreeMap<Arc<str>, f64> = BTreeMap::new();

/// Per-document metadata recorded at insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// In-memory inverted-index search engine with TF-IDF ranking.
///
/// Construction fixes the stop-word set for the index's lifetime. Documents
/// are inserted with [`add_document`](SearchIndex::add_document) and removed
/// with [`remove_document`](SearchIndex::remove_document); ranked retrieval
/// and per-document matching live in their own `impl` blocks.
#[derive(Debug, Default)]
pub struct SearchIndex {
    pub(crate) stop_words: HashSet<String>,
    /// word → (document id → term frequency)
    pub(crate) inverted_index: HashMap<Arc<str>, BTreeMap<i32, f64>>,
    /// document id → (word → term frequency)
    pub(crate) forward_index: BTreeMap<i32, BTreeMap<Arc<str>, f64>>,
    pub(crate) documents: BTreeMap<i32, DocumentData>,
    pub(crate) document_ids: BTreeSet<i32>,
}

impl SearchIndex {
    /// Creates an index with the given stop words.
    ///
    /// Empty strings are skipped; a stop word containing a control character
    /// fails with [`SearchError::InvalidStopWord`].
    pub fn new<I, S>(stop_words: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(SearchError::InvalidStopWord(word.to_string()));
            }
            unique.insert(word.to_string());
        }
        Ok(Self {
            stop_words: unique,
            ..Self::default()
        })
    }

    /// Creates an index from a space-separated stop-word string.
    pub fn from_text(stop_words_text: &str) -> Result<Self, SearchError> {
        Self::new(split_into_words(stop_words_text))
    }

    /// Inserts a document and indexes its non-stop words.
    ///
    /// Term frequency for each word is its occurrence count divided by the
    /// document's non-stop word count. The rating stored with the document is
    /// the truncated integer mean of `ratings` (0 if empty).
    ///
    /// Fails with [`SearchError::InvalidDocumentId`] if `document_id` is
    /// negative or already present, [`SearchError::InvalidDocumentWord`] if a
    /// word contains a control character, and [`SearchError::EmptyDocument`]
    /// if no words survive stop-word filtering. Validation happens before any
    /// index is touched, so a rejected call leaves the index unchanged.
    pub fn add_document(
        &mut self,
        document_id: i32,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<(), SearchError> {
        if document_id < 0 || self.documents.contains_key(&document_id) {
            return Err(SearchError::InvalidDocumentId(document_id));
        }
        let words = self.split_into_words_no_stop(text)?;
        if words.is_empty() {
            return Err(SearchError::EmptyDocument(document_id));
        }

        let inverse_word_count = 1.0 / words.len() as f64;
        for word in words {
            // Reuse the canonical allocation if the word is already indexed.
            let canonical: Arc<str> = match self.inverted_index.get_key_value(word) {
                Some((existing, _)) => Arc::clone(existing),
                None => Arc::from(word),
            };
            *self
                .inverted_index
                .entry(Arc::clone(&canonical))
                .or_default()
                .entry(document_id)
                .or_insert(0.0) += inverse_word_count;
            *self
                .forward_index
                .entry(document_id)
                .or_default()
                .entry(canonical)
                .or_insert(0.0) += inverse_word_count;
        }

        self.documents.insert(
            document_id,
            DocumentData {
                rating: average_rating(ratings),
                status,
            },
        );
        self.document_ids.insert(document_id);
        tracing::debug!("indexed document {}", document_id);
        Ok(())
    }

    /// Removes a document and all its index entries. Unknown ids are a no-op.
    pub fn remove_document(&mut self, document_id: i32) {
        let Some(word_freqs) = self.forward_index.remove(&document_id) else {
            return;
        };
        for word in word_freqs.keys() {
            let now_empty = match self.inverted_index.get_mut(word) {
                Some(postings) => {
                    postings.remove(&document_id);
                    postings.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.inverted_index.remove(word);
            }
        }
        self.documents.remove(&document_id);
        self.document_ids.remove(&document_id);
        tracing::debug!("removed document {}", document_id);
    }

    /// Parallel variant of [`remove_document`](SearchIndex::remove_document).
    ///
    /// Postings erasure fans out over the worker pool; each worker holds
    /// exclusive access to one postings entry, so no locking is needed.
    /// Metadata and id-set deletions happen after the fan-out joins.
    pub fn remove_document_par(&mut self, document_id: i32) {
        let Some(word_freqs) = self.forward_index.get(&document_id) else {
            return;
        };
        self.inverted_index.par_iter_mut().for_each(|(word, postings)| {
            if word_freqs.contains_key(word) {
                postings.remove(&document_id);
            }
        });
        self.inverted_index.retain(|_, postings| !postings.is_empty());
        self.forward_index.remove(&document_id);
        self.documents.remove(&document_id);
        self.document_ids.remove(&document_id);
        tracing::debug!("removed document {}", document_id);
    }

    /// Returns the word → term frequency view of a document, or an empty
    /// view for unknown ids.
    pub fn get_word_frequencies(&self, document_id: i32) -> &BTreeMap<Arc<str>, f64> {
        self.forward_index
            .get(&document_id)
            .unwrap_or(&EMPTY_WORD_FREQUENCIES)
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.document_ids.iter().copied()
    }

    pub(crate) fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, SearchError> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(SearchError::InvalidDocumentWord(word.to_string()));
            }
            if !self.is_stop_word(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    ratings.iter().sum::<i32>() / ratings.len() as i32
}
