//! Calculation logic for the pay calculation engine.
//!
//! This module contains the punch normalizer, the tiered pay calculator,
//! the per-batch processor, and the cross-batch aggregator.

mod aggregate;
mod batch;
mod punch_hours;
mod tiered_pay;

pub use aggregate::Aggregator;
pub use batch::process_batch;
pub use punch_hours::{PUNCH_TIMESTAMP_FORMAT, punch_hours};
pub use tiered_pay::{
    DOUBLETIME_MULTIPLIER, OVERTIME_HOURS_LIMIT, OVERTIME_MULTIPLIER, REGULAR_HOURS_LIMIT,
    TierSplit, calculate_employee_pay, split_hours,
};
