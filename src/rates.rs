//! Job pay-rate metadata and the per-batch rate table.
//!
//! Each batch carries its own `jobMeta` list; the [`RateTable`] is built once
//! from that list and consulted for every punch in the batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Pay-rate metadata for a single job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRate {
    /// The job identifier, unique within a batch.
    pub job: String,
    /// The hourly wage rate before tier multipliers.
    pub rate: Decimal,
    /// The hourly benefit rate, flat across all tiers.
    #[serde(rename = "benefitsRate")]
    pub benefits_rate: Decimal,
}

/// An immutable job-to-rate mapping scoped to one batch.
///
/// Lookup failure is a typed [`EngineError::UnknownJob`] rather than an
/// unchecked index: a punch against a job the batch never declared must
/// abort that batch, since paying zero for unknown work is a silent
/// correctness bug.
///
/// # Example
///
/// ```
/// use punch_engine::rates::{JobRate, RateTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::new(vec![JobRate {
///     job: "Hand prep".to_string(),
///     rate: Decimal::from_str("20").unwrap(),
///     benefits_rate: Decimal::from_str("2").unwrap(),
/// }]);
///
/// let entry = table.lookup("Hand prep").unwrap();
/// assert_eq!(entry.rate, Decimal::from_str("20").unwrap());
/// assert!(table.lookup("Sanding").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, JobRate>,
}

impl RateTable {
    /// Builds a rate table from a batch's job metadata list.
    ///
    /// A job identifier repeated in the list keeps its last entry.
    pub fn new(job_meta: Vec<JobRate>) -> Self {
        let rates = job_meta
            .into_iter()
            .map(|entry| (entry.job.clone(), entry))
            .collect();
        Self { rates }
    }

    /// Looks up the rate entry for a job identifier.
    ///
    /// Returns [`EngineError::UnknownJob`] when the job is absent from this
    /// batch's metadata.
    pub fn lookup(&self, job: &str) -> EngineResult<&JobRate> {
        self.rates.get(job).ok_or_else(|| EngineError::UnknownJob {
            job: job.to_string(),
        })
    }

    /// Returns the number of jobs in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
