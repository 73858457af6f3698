//! Core data models for the pay calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod batch;
mod punch;
mod summary;

pub use batch::Batch;
pub use punch::{EmployeeRecord, TimePunch};
pub use summary::{CombinedResult, PAY_DECIMAL_PLACES, PaySummary};
