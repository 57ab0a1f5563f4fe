//! Duplicate document detection and removal.

use crate::tfidf::index::SearchIndex;
use std::collections::HashSet;
use std::sync::Arc;

/// Removes every document whose word set equals that of an earlier document.
///
/// Documents are scanned in ascending id order and keyed by their sorted word
/// set, so term frequencies and word order don't matter and the smallest id
/// among duplicates survives. One notice is logged per removed id.
pub fn remove_duplicates(index: &mut SearchIndex) {
    let mut seen_word_sets: HashSet<Vec<Arc<str>>> = HashSet::new();
    let mut duplicate_ids = Vec::new();
    for document_id in index.document_ids() {
        let word_set: Vec<Arc<str>> = index
            .get_word_frequencies(document_id)
            .keys()
            .cloned()
            .collect();
        if !seen_word_sets.insert(word_set) {
            duplicate_ids.push(document_id);
        }
    }

    for document_id in duplicate_ids {
        tracing::info!("found duplicate document id {}", document_id);
        index.remove_document(document_id);
    }
}
