//! Batch model.
//!
//! A batch is one self-contained input unit (for example one file per pay
//! period or per site): the job metadata and the employee punch data that
//! are priced together.

use serde::{Deserialize, Serialize};

use crate::rates::JobRate;

use super::punch::EmployeeRecord;

/// One validated input batch.
///
/// Both keys are required; an input document missing either never becomes a
/// `Batch` (the request layer skips it instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// The pay-rate metadata for every job referenced in this batch.
    pub job_meta: Vec<JobRate>,
    /// The employee punch records for this batch.
    pub employee_data: Vec<EmployeeRecord>,
}
