//! Error taxonomy for index construction, mutation, and queries.
//!
//! Every fallible public operation raises one of these synchronously at the
//! API boundary. A rejected mutation leaves the index unchanged.

use std::error::Error;
use std::fmt;

/// Errors raised by [`SearchIndex`](crate::SearchIndex) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A stop word supplied at construction contains a control character.
    InvalidStopWord(String),
    /// A document id is negative or already present in the index.
    InvalidDocumentId(i32),
    /// A document word contains a control character.
    InvalidDocumentWord(String),
    /// A document has no words left after stop-word filtering.
    EmptyDocument(i32),
    /// A query word is empty, starts with `--`, equals `-`, or contains a
    /// control character.
    InvalidQuery(String),
    /// A match was requested for a document id that does not exist.
    UnknownDocument(i32),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidStopWord(word) => {
                write!(f, "stop word {word:?} contains a control character")
            }
            SearchError::InvalidDocumentId(id) => {
                write!(f, "document id {id} is negative or already present")
            }
            SearchError::InvalidDocumentWord(word) => {
                write!(f, "document word {word:?} contains a control character")
            }
            SearchError::EmptyDocument(id) => {
                write!(f, "document {id} has no words left after stop-word filtering")
            }
            SearchError::InvalidQuery(word) => write!(f, "query word {word:?} is malformed"),
            SearchError::UnknownDocument(id) => write!(f, "document {id} does not exist"),
        }
    }
}

impl Error for SearchError {}
