//! Per-document query matching.
//!
//! Given a query and a document id, returns the plus-words present in the
//! document (none if any minus-word hits) along with the document's status.

use crate::document::DocumentStatus;
use crate::error::SearchError;
use crate::tfidf::index::SearchIndex;
use crate::tfidf::query;
use rayon::prelude::*;

impl SearchIndex {
    /// Returns the query's plus-words appearing in the document and its
    /// status, sorted and deduplicated. A minus-word hit yields an empty
    /// word list.
    ///
    /// Fails with [`SearchError::UnknownDocument`] for an absent id.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: i32,
    ) -> Result<(Vec<String>, DocumentStatus), SearchError> {
        let Some(data) = self.documents.get(&document_id) else {
            return Err(SearchError::UnknownDocument(document_id));
        };
        let query = query::parse_query(raw_query, &self.stop_words)?;

        for word in &query.minus_words {
            if self.word_occurs_in(word, document_id) {
                return Ok((Vec::new(), data.status));
            }
        }
        let matched = query
            .plus_words
            .iter()
            .filter(|word| self.word_occurs_in(word, document_id))
            .cloned()
            .collect();
        Ok((matched, data.status))
    }

    /// Parallel variant of [`match_document`](SearchIndex::match_document).
    /// Per-word presence checks fan out over the worker pool; survivors are
    /// sorted and deduplicated so the output order is deterministic.
    pub fn match_document_par(
        &self,
        raw_query: &str,
        document_id: i32,
    ) -> Result<(Vec<String>, DocumentStatus), SearchError> {
        let Some(data) = self.documents.get(&document_id) else {
            return Err(SearchError::UnknownDocument(document_id));
        };
        let query = query::parse_flat_query(raw_query, &self.stop_words)?;

        if query
            .minus_words
            .par_iter()
            .any(|word| self.word_occurs_in(word, document_id))
        {
            return Ok((Vec::new(), data.status));
        }
        let mut matched: Vec<String> = query
            .plus_words
            .into_par_iter()
            .filter(|word| self.word_occurs_in(word, document_id))
            .collect();
        matched.par_sort_unstable();
        matched.dedup();
        Ok((matched, data.status))
    }

    fn word_occurs_in(&self, word: &str, document_id: i32) -> bool {
        self.inverted_index
            .get(word)
            .is_some_and(|postings| postings.contains_key(&document_id))
    }
}
