//! Time slot generation
//!
//! Builds the time-of-day keys and empty day templates used by the planner.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use super::upcoming::parse_time;
use crate::models::schedule::{day_id, slot_id, ScheduleDay, WeeklySlot};
use crate::trends::daily::format_dmy;
use crate::trends::weekly::{week_dates, weekday_name};
use crate::CommandError;

/// Minutes since midnight for an `HH:MM` string
fn minutes_of(time: &str) -> Result<u32, CommandError> {
    let parsed = parse_time(time).ok_or_else(|| CommandError::InvalidTime(time.to_string()))?;
    Ok(parsed.hour() * 60 + parsed.minute())
}

/// `HH:MM` keys from `start` (inclusive) to `end` (exclusive)
pub fn generate_time_slots(
    start: &str,
    end: &str,
    interval_minutes: u32,
) -> Result<Vec<String>, CommandError> {
    if interval_minutes == 0 {
        return Err(CommandError::InvalidInput(
            "slot interval must be at least one minute".to_string(),
        ));
    }

    let start = minutes_of(start)?;
    let end = minutes_of(end)?;

    Ok((start..end)
        .step_by(interval_minutes as usize)
        .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
        .collect())
}

/// Empty day for `date` with one blank slot per time key
pub fn blank_day(weekday: Weekday, date: NaiveDate, times: &[String]) -> ScheduleDay {
    let name = weekday_name(weekday);
    let date = format_dmy(date);

    let schedule: BTreeMap<String, WeeklySlot> = times
        .iter()
        .map(|time| (time.clone(), WeeklySlot::blank(slot_id(name, &date, time))))
        .collect();

    ScheduleDay {
        id: day_id(name, &date),
        day_name: name.to_string(),
        date,
        schedule,
    }
}

/// Blank Monday..Sunday planner for the week containing `today`
pub fn week_template(today: NaiveDate, times: &[String]) -> Vec<ScheduleDay> {
    week_dates(today)
        .into_iter()
        .map(|date| blank_day(date.weekday(), date, times))
        .collect()
}
