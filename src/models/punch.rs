//! Time punch and employee record models.
//!
//! This module defines the TimePunch and EmployeeRecord structs that mirror
//! one batch's `employeeData` entries as they appear on the wire.

use serde::{Deserialize, Serialize};

/// A single clock-in/clock-out pair against a job.
///
/// Timestamps stay in their wire form (`YYYY-MM-DD HH:MM:SS`, naive local
/// time, second resolution); parsing happens in the calculation layer so a
/// malformed value surfaces as a typed error rather than a deserialization
/// failure for the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePunch {
    /// The job identifier this punch was worked against.
    pub job: String,
    /// The punch-in timestamp.
    pub start: String,
    /// The punch-out timestamp.
    pub end: String,
}

/// One employee's punches within a single batch.
///
/// The punch order is significant: pay tiers depend on cumulative hours in
/// the order given, so the sequence is processed as-is and never re-sorted
/// by timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee name, used as the merge key across batches.
    pub employee: String,
    /// The ordered punch sequence for this employee.
    #[serde(rename = "timePunch", default)]
    pub time_punch: Vec<TimePunch>,
}
