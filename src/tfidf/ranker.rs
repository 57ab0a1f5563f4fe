//! TF-IDF scoring and ranked top-K retrieval.
//!
//! The sequential path accumulates `tf * idf` per document in an ordered
//! map; the parallel path fans plus-words out over the worker pool and
//! accumulates into the sharded [`ConcurrentMap`]. Both paths apply
//! minus-word exclusion, sort with the same comparator (relevance
//! descending, rating descending inside the tolerance), and truncate to
//! [`MAX_RESULT_DOCUMENT_COUNT`].

use crate::concurrent_map::ConcurrentMap;
use crate::config::{ACCUMULATOR_SHARD_COUNT, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_TOLERANCE};
use crate::document::{Document, DocumentStatus};
use crate::error::SearchError;
use crate::tfidf::index::SearchIndex;
use crate::tfidf::query::{self, Query};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;

impl SearchIndex {
    /// Ranked top-K search over [`DocumentStatus::Actual`] documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Ranked top-K search over documents with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_by(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Ranked top-K search over documents accepted by `predicate`.
    ///
    /// The predicate receives `(document_id, status, rating)` and is
    /// evaluated during scoring, before minus-word exclusion.
    pub fn find_top_documents_by<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, SearchError>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool,
    {
        let query = query::parse_query(raw_query, &self.stop_words)?;
        let mut matched = self.find_all_documents(&query, predicate);
        matched.sort_unstable_by(ranking_order);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(matched)
    }

    /// Parallel variant of [`find_top_documents`](SearchIndex::find_top_documents).
    pub fn find_top_documents_par(&self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_par_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Parallel variant of
    /// [`find_top_documents_with_status`](SearchIndex::find_top_documents_with_status).
    pub fn find_top_documents_par_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, SearchError> {
        self.find_top_documents_par_by(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Parallel variant of
    /// [`find_top_documents_by`](SearchIndex::find_top_documents_by).
    ///
    /// Returns the same documents with the same relevances (within the
    /// tolerance) as the sequential path. Scoring writes go through the
    /// sharded accumulator, so writers only contend when their document ids
    /// share a shard.
    pub fn find_top_documents_par_by<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, SearchError>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool + Sync,
    {
        let query = query::parse_flat_query(raw_query, &self.stop_words)?;
        let mut plus_words = query.plus_words;
        plus_words.par_sort_unstable();
        plus_words.dedup();

        let accumulator: ConcurrentMap<i32, f64> = ConcurrentMap::new(ACCUMULATOR_SHARD_COUNT);
        plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.inverted_index.get(word.as_str()) else {
                return;
            };
            let idf = self.inverse_document_frequency(postings.len());
            for (&document_id, &term_freq) in postings {
                let Some(data) = self.documents.get(&document_id) else {
                    continue;
                };
                if predicate(document_id, data.status, data.rating) {
                    *accumulator.at(document_id) += term_freq * idf;
                }
            }
        });
        query.minus_words.par_iter().for_each(|word| {
            let Some(postings) = self.inverted_index.get(word.as_str()) else {
                return;
            };
            for document_id in postings.keys() {
                accumulator.erase(document_id);
            }
        });

        let mut matched: Vec<Document> = accumulator
            .into_ordered()
            .into_iter()
            .filter_map(|(document_id, relevance)| {
                self.documents
                    .get(&document_id)
                    .map(|data| Document::new(document_id, relevance, data.rating))
            })
            .collect();
        matched.par_sort_unstable_by(ranking_order);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(matched)
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool,
    {
        let mut relevance_by_id: BTreeMap<i32, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.inverted_index.get(word.as_str()) else {
                continue;
            };
            let idf = self.inverse_document_frequency(postings.len());
            for (&document_id, &term_freq) in postings {
                let Some(data) = self.documents.get(&document_id) else {
                    continue;
                };
                if predicate(document_id, data.status, data.rating) {
                    *relevance_by_id.entry(document_id).or_insert(0.0) += term_freq * idf;
                }
            }
        }
        for word in &query.minus_words {
            let Some(postings) = self.inverted_index.get(word.as_str()) else {
                continue;
            };
            for document_id in postings.keys() {
                relevance_by_id.remove(document_id);
            }
        }

        relevance_by_id
            .into_iter()
            .filter_map(|(document_id, relevance)| {
                self.documents
                    .get(&document_id)
                    .map(|data| Document::new(document_id, relevance, data.rating))
            })
            .collect()
    }

    fn inverse_document_frequency(&self, documents_with_word: usize) -> f64 {
        (self.document_count() as f64 / documents_with_word as f64).ln()
    }
}

/// Relevance descending; ties inside the tolerance fall back to rating
/// descending. Deterministic for unstable sorts modulo exact rating ties.
fn ranking_order(a: &Document, b: &Document) -> Ordering {
    if (a.relevance - b.relevance).abs() < RELEVANCE_TOLERANCE {
        b.rating.cmp(&a.rating)
    } else {
        OrderedFloat(b.relevance).cmp(&OrderedFloat(a.relevance))
    }
}
