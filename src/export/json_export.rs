//! JSON export functionality
//!
//! Daily series wrapped in a versioned envelope with per-metric totals.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::trends::{BucketKey, DailySeriesPoint};
use crate::CommandError;

const EXPORT_VERSION: &str = "1.0.0";

/// Daily series export structure
#[derive(Debug, Clone, Serialize)]
pub struct DailySeriesExportJson<'a> {
    pub export_date: String,
    pub export_version: &'static str,
    pub month: BucketKey,
    pub days_included: usize,
    pub totals: BTreeMap<String, f64>,
    pub series: &'a [DailySeriesPoint],
}

impl<'a> DailySeriesExportJson<'a> {
    pub fn new(month: BucketKey, series: &'a [DailySeriesPoint]) -> Self {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for point in series {
            for (name, value) in &point.metrics {
                *totals.entry(name.clone()).or_insert(0.0) += value;
            }
        }

        Self {
            export_date: chrono::Utc::now().to_rfc3339(),
            export_version: EXPORT_VERSION,
            month,
            days_included: series.len(),
            totals,
            series,
        }
    }
}

/// Write a daily series to a JSON file
pub fn write_daily_series_json(
    month: BucketKey,
    series: &[DailySeriesPoint],
    path: &Path,
) -> Result<(), CommandError> {
    let export = DailySeriesExportJson::new(month, series);
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
