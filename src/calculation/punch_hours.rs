//! Time punch normalization.
//!
//! This module parses a punch's start/end timestamps and converts the pair
//! into an elapsed-hours value for the tier calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PAY_DECIMAL_PLACES, TimePunch};

/// The timestamp format punches are recorded in (naive local time).
pub const PUNCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Parses a punch timestamp, surfacing failures as a typed error.
fn parse_timestamp(value: &str) -> EngineResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, PUNCH_TIMESTAMP_FORMAT).map_err(|_| {
        EngineError::MalformedTimestamp {
            value: value.to_string(),
        }
    })
}

/// Returns the elapsed hours covered by a punch, rounded to 4 decimal places.
///
/// The result is negative when the punch ends before it starts; the caller
/// decides how to surface that, this function never clamps or wraps the
/// duration.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimestamp`] when either timestamp does not
/// match [`PUNCH_TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use punch_engine::calculation::punch_hours;
/// use punch_engine::models::TimePunch;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let punch = TimePunch {
///     job: "Hand prep".to_string(),
///     start: "2022-02-18 09:00:00".to_string(),
///     end: "2022-02-18 17:30:00".to_string(),
/// };
/// assert_eq!(punch_hours(&punch).unwrap(), Decimal::from_str("8.5").unwrap());
/// ```
pub fn punch_hours(punch: &TimePunch) -> EngineResult<Decimal> {
    let start = parse_timestamp(&punch.start)?;
    let end = parse_timestamp(&punch.end)?;

    let seconds = (end - start).num_seconds();
    let hours = Decimal::new(seconds, 0) / SECONDS_PER_HOUR;
    Ok(hours.round_dp(PAY_DECIMAL_PLACES))
}
