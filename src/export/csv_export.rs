//! CSV export functionality
//!
//! One row per day, one column per metric.

use std::path::Path;

use csv::Writer;

use crate::trends::DailySeriesPoint;
use crate::CommandError;

/// Write a daily series to any writer
pub fn write_daily_series<W: std::io::Write>(
    points: &[DailySeriesPoint],
    metric_names: &[String],
    out: W,
) -> Result<(), CommandError> {
    let mut writer = Writer::from_writer(out);

    let mut header = Vec::with_capacity(metric_names.len() + 1);
    header.push("day".to_string());
    header.extend(metric_names.iter().cloned());
    writer.write_record(&header)?;

    for point in points {
        let mut row = Vec::with_capacity(header.len());
        row.push(point.day.to_string());
        row.extend(metric_names.iter().map(|name| point.get(name).to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a daily series to a CSV file
pub fn write_daily_series_csv(
    points: &[DailySeriesPoint],
    metric_names: &[String],
    path: &Path,
) -> Result<(), CommandError> {
    let file = std::fs::File::create(path)?;
    write_daily_series(points, metric_names, file)
}
