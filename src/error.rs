//! Error types for the pay calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing punch batches.

use thiserror::Error;

/// The main error type for the pay calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use punch_engine::error::EngineError;
///
/// let error = EngineError::UnknownJob {
///     job: "Welding".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown job: Welding");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A punch timestamp did not match the expected `YYYY-MM-DD HH:MM:SS` format.
    #[error("Malformed timestamp: {value}")]
    MalformedTimestamp {
        /// The timestamp string that failed to parse.
        value: String,
    },

    /// A punch referenced a job that is absent from the batch's rate table.
    #[error("Unknown job: {job}")]
    UnknownJob {
        /// The job identifier that was not found.
        job: String,
    },

    /// A punch ended before it started.
    #[error("Invalid punch duration for '{employee}': end {end} precedes start {start}")]
    InvalidPunchDuration {
        /// The employee whose punch is invalid.
        employee: String,
        /// The punch start timestamp.
        start: String,
        /// The punch end timestamp.
        end: String,
    },

    /// A batch was missing one of its required top-level keys.
    #[error("Missing required key: {key}")]
    MissingRequiredKey {
        /// The key that was absent (`jobMeta` or `employeeData`).
        key: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
