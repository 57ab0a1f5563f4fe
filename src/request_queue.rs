//! Sliding-window request statistics.
//!
//! Wraps a shared index and records the outcome of every ranked query it
//! runs, keeping one day's worth of history. The clock is logical: each
//! request advances it by one minute, and entries older than the window are
//! evicted before the new one is recorded.

use crate::config::REQUEST_WINDOW_MINUTES;
use crate::document::{Document, DocumentStatus};
use crate::error::SearchError;
use crate::tfidf::SearchIndex;
use std::collections::VecDeque;

struct QueryResult {
    timestamp: u64,
    result_count: usize,
}

/// Tracks how many of the last day's requests produced no results.
pub struct RequestQueue<'a> {
    index: &'a SearchIndex,
    requests: VecDeque<QueryResult>,
    current_time: u64,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    /// Creates an empty queue over the given index.
    pub fn new(index: &'a SearchIndex) -> Self {
        Self {
            index,
            requests: VecDeque::new(),
            current_time: 0,
            no_result_requests: 0,
        }
    }

    /// Runs a default ranked query and records its outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        let results = self.index.find_top_documents(raw_query)?;
        self.record(results.len());
        Ok(results)
    }

    /// Runs a status-filtered ranked query and records its outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, SearchError> {
        let results = self.index.find_top_documents_with_status(raw_query, status)?;
        self.record(results.len());
        Ok(results)
    }

    /// Runs a predicate-filtered ranked query and records its outcome.
    pub fn add_find_request_by<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, SearchError>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool,
    {
        let results = self.index.find_top_documents_by(raw_query, predicate)?;
        self.record(results.len());
        Ok(results)
    }

    /// Number of windowed requests that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    fn record(&mut self, result_count: usize) {
        self.current_time += 1;
        while let Some(front) = self.requests.front() {
            if self.current_time - front.timestamp < REQUEST_WINDOW_MINUTES {
                break;
            }
            if front.result_count == 0 {
                self.no_result_requests -= 1;
            }
            self.requests.pop_front();
        }
        if result_count == 0 {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryResult {
            timestamp: self.current_time,
            result_count,
        });
    }
}
