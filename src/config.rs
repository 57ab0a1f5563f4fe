//! Global configuration constants for memsearch.
//!
//! All tuning parameters and fixed limits are defined here as compile-time
//! constants.

/// Maximum number of documents returned by a single ranked query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Absolute tolerance when comparing relevance values.
///
/// Documents whose relevances differ by less than this are considered tied
/// and ordered by rating instead.
pub const RELEVANCE_TOLERANCE: f64 = 1e-6;

/// Number of independently locked shards in the parallel ranker's
/// accumulator map.
pub const ACCUMULATOR_SHARD_COUNT: usize = 8;

/// Length of the request statistics sliding window, in minutes (one day).
pub const REQUEST_WINDOW_MINUTES: u64 = 1440;
