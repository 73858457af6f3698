//! Pay summary models for the pay calculation engine.
//!
//! This module contains the [`PaySummary`] type produced per employee per
//! batch, and the [`CombinedResult`] mapping accumulated across batches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The number of decimal places carried by every summary field.
///
/// Four decimals is the canonical representation for both display and merge
/// arithmetic; precision beyond this must not leak between batches.
pub const PAY_DECIMAL_PLACES: u32 = 4;

/// The combined per-employee results of an aggregation run.
///
/// Keyed by employee name; a `BTreeMap` keeps iteration (and therefore
/// serialized output) deterministic across runs.
pub type CombinedResult = BTreeMap<String, PaySummary>;

/// The pay outcome for one employee within one scope (batch or aggregate).
///
/// All five numeric fields are held at 4-decimal precision and serialize as
/// fixed 4-decimal strings (e.g. `"200.0000"`).
///
/// Invariant: `regular + overtime + doubletime` equals the total normalized
/// punch hours processed for the employee in that scope.
///
/// # Example
///
/// ```
/// use punch_engine::models::PaySummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = PaySummary {
///     employee: "Mike".to_string(),
///     regular: Decimal::from_str("10").unwrap(),
///     overtime: Decimal::ZERO,
///     doubletime: Decimal::ZERO,
///     wage_total: Decimal::from_str("200").unwrap(),
///     benefit_total: Decimal::from_str("20").unwrap(),
/// };
/// let json = serde_json::to_string(&summary).unwrap();
/// assert!(json.contains("\"wageTotal\":\"200.0000\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// The employee name this summary belongs to.
    pub employee: String,
    /// Hours paid at the regular rate.
    #[serde(with = "fixed4")]
    pub regular: Decimal,
    /// Hours paid at the overtime rate.
    #[serde(with = "fixed4")]
    pub overtime: Decimal,
    /// Hours paid at the doubletime rate.
    #[serde(with = "fixed4")]
    pub doubletime: Decimal,
    /// Total wages across all tiers.
    #[serde(rename = "wageTotal", with = "fixed4")]
    pub wage_total: Decimal,
    /// Total benefits, accrued at the flat benefit rate for every hour.
    #[serde(rename = "benefitTotal", with = "fixed4")]
    pub benefit_total: Decimal,
}

impl PaySummary {
    /// Returns a zeroed summary for the given employee.
    pub fn zero(employee: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            regular: Decimal::ZERO,
            overtime: Decimal::ZERO,
            doubletime: Decimal::ZERO,
            wage_total: Decimal::ZERO,
            benefit_total: Decimal::ZERO,
        }
    }

    /// Returns the total hours covered by this summary across all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }

    /// Sums this summary with another for the same employee.
    ///
    /// Each field is added numerically and re-rounded to 4 decimal places,
    /// the representation the next merge consumes. Sums of 4-decimal inputs
    /// are exact in `Decimal`, so folding is order-independent.
    pub fn merge(&self, other: &PaySummary) -> PaySummary {
        PaySummary {
            employee: self.employee.clone(),
            regular: (self.regular + other.regular).round_dp(PAY_DECIMAL_PLACES),
            overtime: (self.overtime + other.overtime).round_dp(PAY_DECIMAL_PLACES),
            doubletime: (self.doubletime + other.doubletime).round_dp(PAY_DECIMAL_PLACES),
            wage_total: (self.wage_total + other.wage_total).round_dp(PAY_DECIMAL_PLACES),
            benefit_total: (self.benefit_total + other.benefit_total)
                .round_dp(PAY_DECIMAL_PLACES),
        }
    }
}

/// Serde codec rendering a `Decimal` as a fixed 4-decimal string.
mod fixed4 {
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.4}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Decimal::from_str(&raw).map_err(D::Error::custom)
    }
}
