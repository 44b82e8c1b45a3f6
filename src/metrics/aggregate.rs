//! Aggregation utilities
//!
//! Sums over already-fetched collections. Missing or non-numeric fields
//! count as zero so that a partial backend response never fails a card.

use serde_json::Value;

use crate::models::record::RecordFilter;

/// Numeric value of a field, 0 when missing or not a JSON number
pub fn field_value(record: &Value, field: &str) -> f64 {
    record.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Sum a numeric field across records
pub fn sum_field<'a, I>(records: I, field: &str) -> f64
where
    I: IntoIterator<Item = &'a Value>,
{
    records.into_iter().map(|r| field_value(r, field)).sum()
}

/// Sum of the `count` field, the shape backend aggregations return
pub fn sum_count<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Value>,
{
    sum_field(records, "count")
}

/// Number of records passing a filter
pub fn count_matching<'a, I>(records: I, filter: &RecordFilter) -> usize
where
    I: IntoIterator<Item = &'a Value>,
{
    records.into_iter().filter(|r| filter.matches(r)).count()
}
