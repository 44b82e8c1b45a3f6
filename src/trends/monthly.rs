//! Monthly bucketing
//!
//! Month dropdown options and month-scoped filtering of REST collections.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use super::daily::format_date_label;
use super::{BucketKey, MonthOption};
use crate::models::record::{RecordSource, SourceCollection};
use crate::CommandError;

/// Default label format, e.g. "January 2024"
pub const DEFAULT_MONTH_LABEL: &str = "%B %Y";

/// Get the month key for a date; fails outside years 0000..=9999
pub fn month_key(date: NaiveDate) -> Result<BucketKey, CommandError> {
    BucketKey::new(date.year(), date.month())
}

/// Human-readable label for a bucket, or the bare key if it cannot be formatted
pub fn month_label(key: &BucketKey, format: &str) -> String {
    key.first_day()
        .and_then(|date| format_date_label(date, format))
        .unwrap_or_else(|| key.to_string())
}

/// Distinct months present across collections, most recent first
pub fn month_options(collections: &[SourceCollection]) -> Vec<MonthOption> {
    month_options_with_format(collections, DEFAULT_MONTH_LABEL)
}

/// Same as [`month_options`] with a custom label format
pub fn month_options_with_format(
    collections: &[SourceCollection],
    label_format: &str,
) -> Vec<MonthOption> {
    let mut buckets: BTreeSet<BucketKey> = BTreeSet::new();

    for collection in collections {
        for record in &collection.records {
            let Some(raw) = collection.source.bucket_key(record) else {
                continue;
            };
            match raw.parse::<BucketKey>() {
                Ok(key) => {
                    buckets.insert(key);
                }
                Err(_) => {
                    tracing::debug!("Skipping record with malformed month prefix: {}", raw);
                }
            }
        }
    }

    buckets
        .into_iter()
        .rev()
        .map(|key| MonthOption {
            label: month_label(&key, label_format),
            value: key,
        })
        .collect()
}

/// Records whose normalized date starts with the bucket
pub fn filter_by_bucket<'a>(
    records: &'a [Value],
    bucket: &BucketKey,
    source: &RecordSource,
) -> Vec<&'a Value> {
    let prefix = bucket.to_string();
    records
        .iter()
        .filter(|record| {
            source
                .iso_key(record)
                .map(|key| key.starts_with(&prefix))
                .unwrap_or(false)
        })
        .collect()
}

/// Previous month of a `YYYY-MM` string
pub fn previous_bucket(bucket: &str) -> Result<String, CommandError> {
    let key: BucketKey = bucket.parse()?;
    Ok(key.previous().to_string())
}
