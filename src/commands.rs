//! Dashboard command handlers
//!
//! One entry point per UI use case. Requests deserialize straight from the
//! frontend's JSON; responses serialize back for rendering or for the
//! follow-up REST mutation.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DashboardConfig;
use crate::export::{
    csv_export, generate_export_filename, get_export_directory, json_export, ExportFormat,
};
use crate::metrics::change::compare_periods;
use crate::models::metrics::PeriodComparison;
use crate::models::record::{RecordSource, SourceCollection};
use crate::models::schedule::{ScheduleDay, WeeklySchedule};
use crate::planner::{entries_for_day, BatchDeleteRequest, PlannerEntry, SelectionSet};
use crate::schedule::regenerate::regenerate_day;
use crate::schedule::slots::{self, week_template};
use crate::schedule::status::{classify_date, classify_day, DayStatus};
use crate::schedule::upcoming::{upcoming_occurrences_with_format, UpcomingOccurrence};
use crate::trends::daily::{build_daily_series, format_dmy};
use crate::trends::monthly::month_options_with_format;
use crate::trends::{BucketKey, DailySeriesPoint, MetricSeries, MonthOption};
use crate::CommandError;

// ============================================================================
// Request / response DTOs
// ============================================================================

fn default_count_field() -> String {
    "count".to_string()
}

/// Summary card request: one collection, one numeric field, one month
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodSummaryRequest {
    pub bucket: BucketKey,
    #[serde(default = "default_count_field")]
    pub field: String,
    #[serde(default)]
    pub source: RecordSource,
    #[serde(default)]
    pub records: Vec<Value>,
}

/// Chart request: a month and the series to plot on it
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeriesRequest {
    pub month: BucketKey,
    #[serde(default)]
    pub series: Vec<MetricSeries>,
}

/// Status of one planner day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatusEntry {
    pub id: String,
    pub day_name: String,
    pub date: String,
    pub status: DayStatus,
    pub can_regenerate: bool,
    pub editable: bool,
}

/// Everything the planner shows for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerDayView {
    pub date: String,
    pub status: DayStatus,
    pub schedule: Option<ScheduleDay>,
    pub entries: Vec<PlannerEntry>,
}

// ============================================================================
// Dashboard commands
// ============================================================================

/// Month dropdown options across all collections, newest first
pub fn get_month_options(
    collections: &[SourceCollection],
    config: &DashboardConfig,
) -> Result<Vec<MonthOption>, CommandError> {
    let options = month_options_with_format(collections, &config.month_label_format);
    tracing::info!(
        "Month options: {} buckets from {} collections",
        options.len(),
        collections.len()
    );
    Ok(options)
}

/// Summary card: monthly total with change against the previous month
pub fn get_period_summary(request: &PeriodSummaryRequest) -> Result<PeriodComparison, CommandError> {
    tracing::info!(
        "Period summary for {} over '{}' ({} records)",
        request.bucket,
        request.field,
        request.records.len()
    );
    Ok(compare_periods(
        &request.records,
        &request.source,
        &request.field,
        request.bucket,
    ))
}

/// Dense per-day chart data for a month
pub fn get_daily_series(request: &DailySeriesRequest) -> Result<Vec<DailySeriesPoint>, CommandError> {
    tracing::info!(
        "Daily series for {} with {} metrics",
        request.month,
        request.series.len()
    );
    build_daily_series(request.month.year(), request.month.month(), &request.series)
}

/// Export the daily series to the export directory (or `dir`)
pub fn export_daily_series(
    request: &DailySeriesRequest,
    format: &str,
    dir: Option<PathBuf>,
) -> Result<PathBuf, CommandError> {
    let format: ExportFormat = format.parse()?;
    let points = get_daily_series(request)?;

    let dir = dir.unwrap_or_else(get_export_directory);
    let prefix = format!("daily_series_{}", request.month);
    let path = dir.join(generate_export_filename(&prefix, format.extension()));

    match format {
        ExportFormat::Csv => {
            let names: Vec<String> = request.series.iter().map(|s| s.name.clone()).collect();
            csv_export::write_daily_series_csv(&points, &names, &path)?;
        }
        ExportFormat::Json => {
            json_export::write_daily_series_json(request.month, &points, &path)?;
        }
    }

    tracing::info!("Exported {} days of {} to {}", points.len(), request.month, path.display());
    Ok(path)
}

// ============================================================================
// Schedule commands
// ============================================================================

/// Next classes for the upcoming widget
pub fn get_upcoming_classes(
    schedule: &WeeklySchedule,
    now: NaiveDateTime,
    config: &DashboardConfig,
) -> Result<Vec<UpcomingOccurrence>, CommandError> {
    let upcoming = upcoming_occurrences_with_format(
        schedule,
        now,
        config.upcoming_limit,
        &config.date_label_format,
    );
    tracing::info!("Upcoming classes: {} of limit {}", upcoming.len(), config.upcoming_limit);
    Ok(upcoming)
}

/// Status of each planner day, driving disabled/highlighted rendering
pub fn get_day_statuses(days: &[ScheduleDay], today: NaiveDate) -> Vec<DayStatusEntry> {
    days.iter()
        .map(|day| {
            let status = classify_day(&day.date, today);
            DayStatusEntry {
                id: day.id.clone(),
                day_name: day.day_name.clone(),
                date: day.date.clone(),
                status,
                can_regenerate: status.can_regenerate(),
                editable: status.is_editable(),
            }
        })
        .collect()
}

/// "Generate" action on a passed day; returns the record to PUT back
pub fn generate_schedule_day(day: &ScheduleDay, today: NaiveDate) -> Result<ScheduleDay, CommandError> {
    let status = classify_day(&day.date, today);
    if !status.can_regenerate() {
        return Err(CommandError::InvalidInput(format!(
            "{} {} has not passed yet",
            day.day_name, day.date
        )));
    }

    let regenerated = regenerate_day(day, today)?;
    tracing::info!(
        "Generated {} for {} (was {})",
        regenerated.id,
        regenerated.day_name,
        day.date
    );
    Ok(regenerated)
}

/// Time keys of a planner day per the configured range and interval
pub fn generate_time_slots(config: &DashboardConfig) -> Result<Vec<String>, CommandError> {
    slots::generate_time_slots(&config.day_start, &config.day_end, config.slot_interval_minutes)
}

/// Blank planner week containing `today`
pub fn get_week_template(
    today: NaiveDate,
    config: &DashboardConfig,
) -> Result<Vec<ScheduleDay>, CommandError> {
    let times = generate_time_slots(config)?;
    Ok(week_template(today, &times))
}

/// Planner view for one date: its schedule day (if any) and agenda items
pub fn get_planner_day(
    date: NaiveDate,
    today: NaiveDate,
    week: &[ScheduleDay],
    entries: &[PlannerEntry],
) -> PlannerDayView {
    let date_str = format_dmy(date);
    let schedule = week.iter().find(|d| d.date == date_str).cloned();

    PlannerDayView {
        status: classify_date(date, today),
        date: date_str,
        schedule,
        entries: entries_for_day(entries, date),
    }
}

// ============================================================================
// List commands
// ============================================================================

/// Batch delete body for the current selection; errors when nothing is selected
pub fn batch_delete_payload(
    selection: &SelectionSet<String>,
) -> Result<BatchDeleteRequest<String>, CommandError> {
    if selection.is_empty() {
        return Err(CommandError::InvalidInput("no items selected".to_string()));
    }
    tracing::info!("Batch delete of {} items", selection.len());
    Ok(selection.batch_delete_request())
}
