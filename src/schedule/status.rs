//! Day status classification
//!
//! Decides whether a planner day is in the past, today, or ahead. Passed days
//! are read-only in the UI and are the only ones offered regeneration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trends::daily::parse_dmy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Passed,
    Today,
    Future,
}

impl DayStatus {
    /// Only passed days can be regenerated
    pub fn can_regenerate(&self) -> bool {
        matches!(self, DayStatus::Passed)
    }

    /// Passed days are shown disabled
    pub fn is_editable(&self) -> bool {
        !matches!(self, DayStatus::Passed)
    }
}

/// Classify a calendar date against today
pub fn classify_date(date: NaiveDate, today: NaiveDate) -> DayStatus {
    if date < today {
        DayStatus::Passed
    } else if date == today {
        DayStatus::Today
    } else {
        DayStatus::Future
    }
}

/// Classify a `DD-MM-YYYY` planner date against today.
///
/// Anything that is neither before nor equal to today is `Future`,
/// including dates that fail to parse.
pub fn classify_day(date: &str, today: NaiveDate) -> DayStatus {
    match parse_dmy(date.trim()) {
        Some(parsed) => classify_date(parsed, today),
        None => {
            tracing::debug!("Unparseable planner date '{}', treating as future", date);
            DayStatus::Future
        }
    }
}
