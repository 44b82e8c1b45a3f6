//! Dated record types
//!
//! REST collections arrive as plain JSON objects. Each collection is paired
//! with a [`RecordSource`] that says which field carries the date and which
//! format it is written in, so nothing is guessed per record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::trends::daily::{format_iso, parse_date, parse_dmy};

/// Field holding a record's date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// `date`
    Date,
    /// `_id`, used by backend aggregations grouped by day or month
    #[serde(rename = "_id", alias = "id")]
    Id,
    /// Any other field name
    Custom(String),
}

impl DateField {
    pub fn name(&self) -> &str {
        match self {
            Self::Date => "date",
            Self::Id => "_id",
            Self::Custom(name) => name,
        }
    }
}

impl Default for DateField {
    fn default() -> Self {
        DateField::Id
    }
}

/// How the date field is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM`, `YYYY-MM-DD` or a full ISO timestamp
    Iso,
    /// `DD-MM-YYYY`, as written by the schedule screens
    DayMonthYear,
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::Iso
    }
}

/// Date field and format for one collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSource {
    #[serde(default)]
    pub field: DateField,
    #[serde(default)]
    pub format: DateFormat,
}

impl RecordSource {
    pub fn new(field: DateField, format: DateFormat) -> Self {
        Self { field, format }
    }

    /// ISO `_id` keys, the backend's aggregation shape
    pub fn id() -> Self {
        Self::new(DateField::Id, DateFormat::Iso)
    }

    /// ISO `date` field
    pub fn date() -> Self {
        Self::new(DateField::Date, DateFormat::Iso)
    }

    /// Raw string value of the date field, if present
    pub fn raw<'a>(&self, record: &'a Value) -> Option<&'a str> {
        record.get(self.field.name()).and_then(Value::as_str)
    }

    /// Date field normalized to an ISO-ordered key.
    ///
    /// ISO values are returned as-is (they may be month-only or carry a time
    /// suffix). Day-month-year values are rewritten to `YYYY-MM-DD`.
    pub fn iso_key(&self, record: &Value) -> Option<String> {
        let raw = self.raw(record)?.trim();
        match self.format {
            DateFormat::Iso => Some(raw.to_string()),
            DateFormat::DayMonthYear => {
                let date = parse_dmy(raw.get(0..10)?)?;
                Some(format_iso(date))
            }
        }
    }

    /// `YYYY-MM` prefix of the normalized key
    pub fn bucket_key(&self, record: &Value) -> Option<String> {
        self.iso_key(record)
            .and_then(|key| key.get(0..7).map(str::to_string))
    }

    /// Calendar day of the record, if its key has day precision
    pub fn day(&self, record: &Value) -> Option<NaiveDate> {
        self.iso_key(record)
            .and_then(|key| key.get(0..10).and_then(parse_date))
    }
}

/// One REST collection with its date description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceCollection {
    #[serde(default)]
    pub source: RecordSource,
    #[serde(default)]
    pub records: Vec<Value>,
}

impl SourceCollection {
    pub fn new(source: RecordSource, records: Vec<Value>) -> Self {
        Self { source, records }
    }
}

/// Equality filter applied to records before grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub field: String,
    pub equals: Value,
}

impl RecordFilter {
    pub fn new(field: impl Into<String>, equals: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }

    pub fn matches(&self, record: &Value) -> bool {
        record.get(&self.field) == Some(&self.equals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iso_key_passthrough() {
        let source = RecordSource::id();
        assert_eq!(
            source.iso_key(&json!({"_id": "2024-01-05"})),
            Some("2024-01-05".to_string())
        );
        assert_eq!(
            source.bucket_key(&json!({"_id": "2024-01"})),
            Some("2024-01".to_string())
        );
        assert_eq!(source.iso_key(&json!({"date": "2024-01-05"})), None);
    }

    #[test]
    fn test_day_month_year_normalized() {
        let source = RecordSource::new(DateField::Date, DateFormat::DayMonthYear);
        let record = json!({"date": "05-01-2024", "status": "Ended"});
        assert_eq!(source.iso_key(&record), Some("2024-01-05".to_string()));
        assert_eq!(source.bucket_key(&record), Some("2024-01".to_string()));
        assert_eq!(source.day(&record), NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn test_malformed_values_skipped() {
        let dmy = RecordSource::new(DateField::Date, DateFormat::DayMonthYear);
        assert_eq!(dmy.iso_key(&json!({"date": "2024-01-05"})), None);
        assert_eq!(dmy.iso_key(&json!({"date": 20240105})), None);

        let iso = RecordSource::date();
        assert_eq!(iso.bucket_key(&json!({"date": "2024"})), None);
        assert_eq!(iso.day(&json!({"date": "2024-01"})), None);
    }

    #[test]
    fn test_iso_timestamp_day() {
        let source = RecordSource::new(DateField::Custom("createdAt".into()), DateFormat::Iso);
        let record = json!({"createdAt": "2024-03-09T18:22:00.000Z"});
        assert_eq!(source.day(&record), NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_record_filter() {
        let filter = RecordFilter::new("status", "Ended");
        assert!(filter.matches(&json!({"status": "Ended"})));
        assert!(!filter.matches(&json!({"status": "Booked"})));
        assert!(!filter.matches(&json!({})));
    }

    #[test]
    fn test_source_deserialization_defaults() {
        let source: RecordSource = serde_json::from_str("{}").unwrap();
        assert_eq!(source, RecordSource::id());

        let source: RecordSource =
            serde_json::from_str(r#"{"field": "date", "format": "day_month_year"}"#).unwrap();
        assert_eq!(source.field, DateField::Date);
        assert_eq!(source.format, DateFormat::DayMonthYear);

        let source: RecordSource = serde_json::from_str(r#"{"field": "_id"}"#).unwrap();
        assert_eq!(source.field, DateField::Id);

        let source: RecordSource =
            serde_json::from_str(r#"{"field": {"custom": "paidAt"}}"#).unwrap();
        assert_eq!(source.field.name(), "paidAt");
    }
}
