//! Cross-batch aggregation.
//!
//! This module folds per-batch pay summaries into a running combined result,
//! summing the numeric fields for employees that appear in more than one
//! batch.

use std::collections::BTreeMap;

use crate::models::{CombinedResult, PaySummary};

/// Accumulates per-employee pay summaries across batches.
///
/// The aggregator is the sole owner of the combined mapping for the duration
/// of a run. Each fold is atomic: a caller may stop between batches without
/// leaving a partially merged entry behind. Folding is order-independent;
/// summaries carry 4-decimal values whose sums are exact, so any fold order
/// produces an identical combined result.
///
/// # Example
///
/// ```
/// use punch_engine::calculation::Aggregator;
/// use punch_engine::models::PaySummary;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let mut summary = PaySummary::zero("Mike");
/// summary.regular = Decimal::from_str("10").unwrap();
///
/// let mut batch = BTreeMap::new();
/// batch.insert("Mike".to_string(), summary);
///
/// let mut aggregator = Aggregator::new();
/// aggregator.fold_batch(batch.clone());
/// aggregator.fold_batch(batch);
///
/// let combined = aggregator.into_combined();
/// assert_eq!(combined["Mike"].regular, Decimal::from_str("20").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    combined: CombinedResult,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one batch's per-employee summaries into the combined result.
    ///
    /// An employee seen for the first time is inserted verbatim; an employee
    /// already present gets a new summary whose numeric fields are the sum
    /// of the existing combined values and the batch's values, re-rounded to
    /// 4 decimal places.
    pub fn fold_batch(&mut self, summaries: BTreeMap<String, PaySummary>) {
        for (employee, summary) in summaries {
            match self.combined.get(&employee) {
                Some(existing) => {
                    let merged = existing.merge(&summary);
                    self.combined.insert(employee, merged);
                }
                None => {
                    self.combined.insert(employee, summary);
                }
            }
        }
    }

    /// Returns the combined result accumulated so far.
    pub fn combined(&self) -> &CombinedResult {
        &self.combined
    }

    /// Consumes the aggregator, handing the combined result to the caller.
    pub fn into_combined(self) -> CombinedResult {
        self.combined
    }
}
