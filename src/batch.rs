//! Parallel batch query execution.
//!
//! Fans a list of raw queries out over the worker pool against a shared
//! read-only index. Output order always follows input order; rayon's indexed
//! collect keeps the i-th result aligned with the i-th query, and the joined
//! variant concatenates per-query results without reordering them.

use crate::document::Document;
use crate::error::SearchError;
use crate::tfidf::SearchIndex;
use rayon::prelude::*;

/// Runs every query through [`SearchIndex::find_top_documents`] in parallel.
///
/// The i-th entry of the output is the result list for the i-th query. The
/// first query error encountered is propagated.
pub fn process_queries(
    index: &SearchIndex,
    queries: &[String],
) -> Result<Vec<Vec<Document>>, SearchError> {
    queries
        .par_iter()
        .map(|query| index.find_top_documents(query))
        .collect()
}

/// Like [`process_queries`], but flattens the per-query result lists into a
/// single sequence, preserving query order.
pub fn process_queries_joined(
    index: &SearchIndex,
    queries: &[String],
) -> Result<Vec<Document>, SearchError> {
    let per_query = process_queries(index, queries)?;
    Ok(per_query.into_iter().flatten().collect())
}
