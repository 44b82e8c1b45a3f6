//! Trend analysis module
//!
//! This module handles the calendar side of the dashboards:
//! - Month buckets for the period dropdown and month-over-month filters
//! - Dense daily series for charts
//! - Weekday arithmetic for recurring schedules

pub mod daily;
pub mod monthly;
pub mod weekly;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::record::{RecordFilter, RecordSource};
use crate::CommandError;

/// Calendar month key, written `YYYY-MM`
///
/// Parsing only accepts a four-digit year and a zero-padded month so that
/// the string form always sorts chronologically. Years are limited to
/// 0000..=9999 for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketKey {
    year: i32,
    month: u32,
}

impl BucketKey {
    pub fn new(year: i32, month: u32) -> Result<Self, CommandError> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(CommandError::InvalidBucket(format!("{}-{}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one, rolling January back to December.
    ///
    /// `0000-01` is the earliest key and is its own predecessor.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            if self.year == 0 {
                return *self;
            }
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First calendar day, if chrono can represent the year
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BucketKey {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(CommandError::InvalidBucket(s.to_string()));
        }

        let year = s[..4]
            .parse::<i32>()
            .map_err(|_| CommandError::InvalidBucket(s.to_string()))?;
        let month = s[5..]
            .parse::<u32>()
            .map_err(|_| CommandError::InvalidBucket(s.to_string()))?;
        Self::new(year, month).map_err(|_| CommandError::InvalidBucket(s.to_string()))
    }
}

impl TryFrom<String> for BucketKey {
    type Error = CommandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BucketKey> for String {
    fn from(key: BucketKey) -> Self {
        key.to_string()
    }
}

/// Entry of the month dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthOption {
    pub value: BucketKey,
    /// Display label, e.g. "January 2024"
    pub label: String,
}

/// One day of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    /// Day of month, 1-based
    pub day: u32,
    /// Metric name -> value, flattened next to `day` when serialized
    #[serde(flatten)]
    pub metrics: BTreeMap<String, f64>,
}

impl DailySeriesPoint {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            metrics: BTreeMap::new(),
        }
    }

    /// Value of a metric, 0 when absent
    pub fn get(&self, name: &str) -> f64 {
        self.metrics.get(name).copied().unwrap_or(0.0)
    }
}

/// How a metric turns a day's records into a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricKind {
    /// Number of records
    Count,
    /// Sum of a numeric field
    Sum { field: String },
}

impl Default for MetricKind {
    fn default() -> Self {
        MetricKind::Count
    }
}

/// One raw collection feeding one chart metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    #[serde(default)]
    pub source: RecordSource,
    #[serde(default)]
    pub kind: MetricKind,
    #[serde(default)]
    pub filter: Option<RecordFilter>,
    #[serde(default)]
    pub records: Vec<Value>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, source: RecordSource, kind: MetricKind) -> Self {
        Self {
            name: name.into(),
            source,
            kind,
            filter: None,
            records: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_records(mut self, records: Vec<Value>) -> Self {
        self.records = records;
        self
    }
}
