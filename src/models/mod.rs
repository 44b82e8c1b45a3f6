//! Data models module
//!
//! Contains the data structures shared across the crate:
//! - Dated REST records and their source descriptions
//! - Schedule days, slots and recurring classes
//! - Summary card metric types

pub mod metrics;
pub mod record;
pub mod schedule;
