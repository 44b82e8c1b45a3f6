//! Metrics calculation module
//!
//! This module contains the calculators behind the summary cards:
//! - Field and count aggregation over REST collections
//! - Month-over-month change with direction

pub mod aggregate;
pub mod change;

pub use aggregate::{count_matching, field_value, sum_count, sum_field};
pub use change::{calculate_change, compare_periods};
