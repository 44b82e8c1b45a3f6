//! Metrics data types
//!
//! Types for summary cards and month-over-month comparisons

use serde::{Deserialize, Serialize};

use crate::trends::BucketKey;

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Neutral,
}

/// Rounded percentage change with its direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Always non-negative; the sign lives in `direction`
    pub percent: f64,
    pub direction: ChangeDirection,
}

impl ChangeResult {
    pub fn new(percent: f64, direction: ChangeDirection) -> Self {
        Self { percent, direction }
    }
}

/// Summary card data for one month against the month before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub bucket: BucketKey,
    pub previous_bucket: BucketKey,
    pub current: f64,
    pub previous: f64,
    pub change: ChangeResult,
}
