//! Tiered pay calculation.
//!
//! This module buckets an employee's worked hours into three pay tiers based
//! on a running total of hours processed so far within the batch.
//!
//! ## Rate Structure
//!
//! **Hours are drained through three ordered tiers:**
//! - Regular: while the running total is under 40 hours, at 1.0x
//! - Overtime: while the running total is under 48 hours, at 1.5x
//! - Doubletime: everything beyond 48 hours, at 2.0x
//!
//! Benefits accrue at the flat benefit rate for every hour regardless of tier.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PAY_DECIMAL_PLACES, PaySummary};
use crate::rates::RateTable;

use super::punch_hours::punch_hours;

/// The running-total limit of the regular tier, in hours.
pub const REGULAR_HOURS_LIMIT: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The running-total limit of the overtime tier, in hours.
pub const OVERTIME_HOURS_LIMIT: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Wage multiplier for overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Wage multiplier for doubletime hours.
pub const DOUBLETIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The tier allocation of one punch's hours.
///
/// `new_total` is the running total after this punch; threading it back into
/// the next [`split_hours`] call keeps the accumulator explicit rather than
/// hidden in enclosing scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSplit {
    /// Hours allocated to the regular tier.
    pub regular: Decimal,
    /// Hours allocated to the overtime tier.
    pub overtime: Decimal,
    /// Hours allocated to the doubletime tier.
    pub doubletime: Decimal,
    /// The running total of hours after this punch.
    pub new_total: Decimal,
}

/// Drains one punch's hours through the three pay tiers.
///
/// Each tier consumes up to its remaining headroom against the running
/// total, advances the total, and passes the rest on; a single long punch
/// can span all three tiers by crossing both the 40-hour and 48-hour
/// boundaries.
///
/// # Arguments
///
/// * `running_total` - Hours already processed for this employee in this batch
/// * `hours` - The normalized hours of the punch being processed
///
/// # Examples
///
/// ```
/// use punch_engine::calculation::split_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // A punch taking the running total from 39 to 41 splits 1/1.
/// let split = split_hours(dec("39"), dec("2"));
/// assert_eq!(split.regular, dec("1"));
/// assert_eq!(split.overtime, dec("1"));
/// assert_eq!(split.doubletime, Decimal::ZERO);
/// assert_eq!(split.new_total, dec("41"));
/// ```
pub fn split_hours(running_total: Decimal, hours: Decimal) -> TierSplit {
    let mut total = running_total;
    let mut unprocessed = hours;

    let regular = if total < REGULAR_HOURS_LIMIT {
        (REGULAR_HOURS_LIMIT - total).min(unprocessed)
    } else {
        Decimal::ZERO
    };
    total += regular;
    unprocessed -= regular;

    let overtime = if total < OVERTIME_HOURS_LIMIT {
        (OVERTIME_HOURS_LIMIT - total).min(unprocessed)
    } else {
        Decimal::ZERO
    };
    total += overtime;
    unprocessed -= overtime;

    let doubletime = unprocessed;
    total += doubletime;

    TierSplit {
        regular,
        overtime,
        doubletime,
        new_total: total,
    }
}

/// Calculates the pay summary for one employee's punch sequence.
///
/// Punches are processed in input order with a single running total-hours
/// counter threaded across them; the counter is never reset between punches.
/// Per punch the hours are normalized, the job rate is looked up, and the
/// hours are drained through the tiers. The five output fields are rounded
/// to 4 decimal places, the representation the aggregator consumes.
///
/// # Errors
///
/// * [`EngineError::MalformedTimestamp`] - a punch timestamp failed to parse
/// * [`EngineError::UnknownJob`] - a punch references a job absent from the
///   batch's rate table
/// * [`EngineError::InvalidPunchDuration`] - a punch ends before it starts
///
/// All three abort the owning batch; silently skipping a punch would
/// understate pay.
///
/// # Examples
///
/// ```
/// use punch_engine::calculation::calculate_employee_pay;
/// use punch_engine::models::{EmployeeRecord, TimePunch};
/// use punch_engine::rates::{JobRate, RateTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable::new(vec![JobRate {
///     job: "Hand prep".to_string(),
///     rate: Decimal::from_str("20").unwrap(),
///     benefits_rate: Decimal::from_str("2").unwrap(),
/// }]);
/// let record = EmployeeRecord {
///     employee: "Mike".to_string(),
///     time_punch: vec![TimePunch {
///         job: "Hand prep".to_string(),
///         start: "2022-02-18 00:00:00".to_string(),
///         end: "2022-02-18 10:00:00".to_string(),
///     }],
/// };
///
/// let summary = calculate_employee_pay(&record, &rates).unwrap();
/// assert_eq!(summary.regular, Decimal::from_str("10").unwrap());
/// assert_eq!(summary.wage_total, Decimal::from_str("200").unwrap());
/// assert_eq!(summary.benefit_total, Decimal::from_str("20").unwrap());
/// ```
pub fn calculate_employee_pay(
    record: &EmployeeRecord,
    rates: &RateTable,
) -> EngineResult<PaySummary> {
    let mut regular = Decimal::ZERO;
    let mut overtime = Decimal::ZERO;
    let mut doubletime = Decimal::ZERO;
    let mut wage_total = Decimal::ZERO;
    let mut benefit_total = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for punch in &record.time_punch {
        let hours = punch_hours(punch)?;
        let job = rates.lookup(&punch.job)?;

        if hours < Decimal::ZERO {
            return Err(EngineError::InvalidPunchDuration {
                employee: record.employee.clone(),
                start: punch.start.clone(),
                end: punch.end.clone(),
            });
        }

        let split = split_hours(total_hours, hours);

        wage_total += split.regular * job.rate
            + split.overtime * job.rate * OVERTIME_MULTIPLIER
            + split.doubletime * job.rate * DOUBLETIME_MULTIPLIER;
        benefit_total += hours * job.benefits_rate;

        regular += split.regular;
        overtime += split.overtime;
        doubletime += split.doubletime;
        total_hours = split.new_total;
    }

    Ok(PaySummary {
        employee: record.employee.clone(),
        regular: regular.round_dp(PAY_DECIMAL_PLACES),
        overtime: overtime.round_dp(PAY_DECIMAL_PLACES),
        doubletime: doubletime.round_dp(PAY_DECIMAL_PLACES),
        wage_total: wage_total.round_dp(PAY_DECIMAL_PLACES),
        benefit_total: benefit_total.round_dp(PAY_DECIMAL_PLACES),
    })
}
