//! Core result types for memsearch.
//!
//! A [`Document`] is a single ranked search hit; [`DocumentStatus`] is the
//! moderation state attached to every indexed document and used by the
//! status-filtered search variants.

use serde::{Deserialize, Serialize};

/// Moderation status of an indexed document.
///
/// Ranked queries filter on status; the default variants search only
/// [`DocumentStatus::Actual`] documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Live, searchable content.
    Actual,
    /// Outdated content, kept but excluded from default searches.
    Irrelevant,
    /// Moderated out.
    Banned,
    /// Marked for deletion.
    Removed,
}

/// A single search hit: document id, TF-IDF relevance, and average rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned non-negative id.
    pub id: i32,
    /// Sum of `tf * idf` over the query's plus-words present in the document.
    pub relevance: f64,
    /// Truncated integer mean of the ratings supplied at insertion.
    pub rating: i32,
}

impl Document {
    /// Creates a search hit from its parts.
    pub fn new(id: i32, relevance: f64, rating: i32) -> Self {
        Self {
            id,
            relevance,
            rating,
        }
    }
}
