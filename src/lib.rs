//! # memsearch
//!
//! Embeddable in-memory inverted-index search engine with TF-IDF ranking,
//! boolean minus-word exclusion, stop-word filtering, rating tie-breaks,
//! and data-parallel query execution backed by a sharded concurrent
//! accumulator.
//!
//! The engine is read-many/write-one: ranked queries, matching, and batch
//! execution may run concurrently against a shared [`SearchIndex`], while
//! insertions and removals take `&mut self`. Every query-side operation has
//! a sequential and a parallel flavor producing equivalent results.
//!
//! ```
//! use memsearch::{DocumentStatus, SearchIndex};
//!
//! let mut index = SearchIndex::from_text("in the")?;
//! index.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])?;
//! let found = index.find_top_documents("cat -dog")?;
//! assert_eq!(found[0].id, 42);
//! # Ok::<(), memsearch::SearchError>(())
//! ```

/// Parallel batch query execution over a shared index.
pub mod batch;
/// Global configuration constants: result limits, tolerances, shard counts.
pub mod config;
/// Fixed-shard concurrent map used as the parallel ranker's accumulator.
pub mod concurrent_map;
/// Core result types: `Document` and `DocumentStatus`.
pub mod document;
/// Error taxonomy for index construction, mutation, and queries.
pub mod error;
/// Sliding-window request statistics over a shared index.
pub mod request_queue;
/// TF-IDF engine: tokenizer, query grammar, index, ranking, matching, dedup.
pub mod tfidf;

pub use batch::{process_queries, process_queries_joined};
pub use concurrent_map::ConcurrentMap;
pub use document::{Document, DocumentStatus};
pub use error::SearchError;
pub use request_queue::RequestQueue;
pub use tfidf::{remove_duplicates, SearchIndex};
