//! Response types for the pay calculation engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::CombinedResult;

/// Response body for a completed aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResponse {
    /// The combined per-employee pay summaries.
    pub combined: CombinedResult,
    /// How many batches contributed to the combined result.
    pub batches_processed: usize,
    /// Batches that were skipped, with the reason for each.
    pub skipped_batches: Vec<SkippedBatch>,
}

/// A batch that did not contribute to the combined result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedBatch {
    /// The zero-based position of the batch in the request.
    pub index: usize,
    /// Why the batch was skipped.
    pub reason: String,
}

/// API error response structure.
///
/// Only request-level failures (an unparseable request body) produce this
/// body; batch-level failures are reported as [`SkippedBatch`] entries in a
/// successful [`AggregationResponse`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
