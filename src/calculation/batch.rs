//! Batch processing.
//!
//! This module orchestrates the rate table and the tiered pay calculator
//! across every employee record in one batch.

use std::collections::BTreeMap;

use crate::error::EngineResult;
use crate::models::{Batch, PaySummary};
use crate::rates::RateTable;

use super::tiered_pay::calculate_employee_pay;

/// Processes one batch into its per-employee pay summaries.
///
/// Builds the batch's [`RateTable`] once, then runs the tiered calculator
/// for each employee record in order. The function is stateless across
/// batches; nothing carries over except through the aggregator.
///
/// Two records for the same employee name within one batch are folded with
/// the same summation rule the aggregator uses; each record's punches are
/// tiered independently.
///
/// # Errors
///
/// Any punch-level error (malformed timestamp, unknown job, negative
/// duration) aborts the whole batch so its data never contributes a partial
/// result.
///
/// # Examples
///
/// ```
/// use punch_engine::calculation::process_batch;
/// use punch_engine::models::{Batch, EmployeeRecord, TimePunch};
/// use punch_engine::rates::JobRate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let batch = Batch {
///     job_meta: vec![JobRate {
///         job: "Hand prep".to_string(),
///         rate: Decimal::from_str("20").unwrap(),
///         benefits_rate: Decimal::from_str("2").unwrap(),
///     }],
///     employee_data: vec![EmployeeRecord {
///         employee: "Mike".to_string(),
///         time_punch: vec![TimePunch {
///             job: "Hand prep".to_string(),
///             start: "2022-02-18 00:00:00".to_string(),
///             end: "2022-02-18 10:00:00".to_string(),
///         }],
///     }],
/// };
///
/// let summaries = process_batch(&batch).unwrap();
/// assert_eq!(summaries["Mike"].wage_total, Decimal::from_str("200").unwrap());
/// ```
pub fn process_batch(batch: &Batch) -> EngineResult<BTreeMap<String, PaySummary>> {
    let rates = RateTable::new(batch.job_meta.clone());
    let mut summaries: BTreeMap<String, PaySummary> = BTreeMap::new();

    for record in &batch.employee_data {
        let summary = calculate_employee_pay(record, &rates)?;
        match summaries.get(&record.employee) {
            Some(existing) => {
                let merged = existing.merge(&summary);
                summaries.insert(record.employee.clone(), merged);
            }
            None => {
                summaries.insert(record.employee.clone(), summary);
            }
        }
    }

    Ok(summaries)
}
