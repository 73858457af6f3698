//! HTTP API module for the pay calculation engine.
//!
//! This module provides the REST API endpoints for aggregating punch
//! batches into combined pay summaries.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{AggregationRequest, BatchRequest};
pub use response::{AggregationResponse, ApiError, SkippedBatch};
