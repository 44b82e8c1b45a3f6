//! Daily series calculations
//!
//! Builds one chart point per calendar day of a month.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate};

use super::{DailySeriesPoint, MetricKind, MetricSeries};
use crate::metrics::aggregate::field_value;
use crate::CommandError;

/// Parse a date string in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Parse a date string in DD-MM-YYYY format
pub fn parse_dmy(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%d-%m-%Y").ok()
}

/// Format a date as YYYY-MM-DD
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date as DD-MM-YYYY
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Format a date with a user-supplied chrono pattern.
///
/// Returns `None` for unknown specifiers and for patterns a bare date cannot
/// fill (hours, offsets), where `to_string()` would panic.
pub fn format_date_label(date: NaiveDate, pattern: &str) -> Option<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut label = String::new();
    write!(label, "{}", date.format(pattern)).ok()?;
    Some(label)
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CommandError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CommandError::InvalidDate(format!("{}-{:02}", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CommandError::InvalidDate(format!("{}-{:02}", year, month)))?;

    Ok((next - first).num_days() as u32)
}

/// Group one series' records by day of the given month
fn group_by_day(series: &MetricSeries, year: i32, month: u32) -> HashMap<u32, f64> {
    let mut by_day: HashMap<u32, f64> = HashMap::new();
    let mut skipped = 0usize;

    for record in &series.records {
        if let Some(filter) = &series.filter {
            if !filter.matches(record) {
                continue;
            }
        }

        let date = match series.source.day(record) {
            Some(d) => d,
            None => {
                skipped += 1;
                continue;
            }
        };
        if date.year() != year || date.month() != month {
            continue;
        }

        let value = match &series.kind {
            MetricKind::Count => 1.0,
            MetricKind::Sum { field } => field_value(record, field),
        };
        *by_day.entry(date.day()).or_insert(0.0) += value;
    }

    if skipped > 0 {
        tracing::debug!(
            "Series '{}': skipped {} records without a usable {} date",
            series.name,
            skipped,
            series.source.field.name()
        );
    }

    by_day
}

/// Build a dense, day-ordered series for a month.
///
/// Every day from 1 to the last day of the month is present and every
/// requested metric is set on each point, 0 where no record matched.
pub fn build_daily_series(
    year: i32,
    month: u32,
    series: &[MetricSeries],
) -> Result<Vec<DailySeriesPoint>, CommandError> {
    let day_count = days_in_month(year, month)?;

    let grouped: Vec<(&str, HashMap<u32, f64>)> = series
        .iter()
        .map(|s| (s.name.as_str(), group_by_day(s, year, month)))
        .collect();

    let points = (1..=day_count)
        .map(|day| {
            let mut point = DailySeriesPoint::new(day);
            for (name, by_day) in &grouped {
                let value = by_day.get(&day).copied().unwrap_or(0.0);
                *point.metrics.entry(name.to_string()).or_insert(0.0) += value;
            }
            point
        })
        .collect();

    Ok(points)
}
