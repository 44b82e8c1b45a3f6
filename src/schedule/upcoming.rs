//! Upcoming class resolution
//!
//! Projects a weekly recurring schedule onto the calendar and picks the
//! next few classes after "now".

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::schedule::{ClassSession, WeeklySchedule};
use crate::trends::daily::{format_date_label, format_iso};
use crate::trends::weekly::{days_until, parse_weekday, weekday_name};

/// Default number of classes shown in the upcoming widget
pub const DEFAULT_UPCOMING_LIMIT: usize = 2;

/// Default label, e.g. "Mon, 15 Jan 2024"
pub const DEFAULT_DATE_LABEL: &str = "%a, %d %b %Y";

/// A concrete future occurrence of a recurring class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingOccurrence {
    pub date: NaiveDate,
    /// HH:MM as keyed in the schedule
    pub time: String,
    pub weekday: String,
    pub date_label: String,
    pub participant_count: usize,
    pub session: ClassSession,
}

/// Parse an `HH:MM` time of day
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()
}

/// Next date for a weekday slot at `time`, never before `now`.
///
/// A slot on today's weekday counts as today only if its time is still
/// ahead; otherwise it rolls over to next week.
pub fn next_occurrence(days_ahead: i64, time: NaiveTime, now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    match days_ahead {
        0 if time > now.time() => today,
        0 => today + Duration::days(7),
        d => today + Duration::days(d),
    }
}

/// Earliest `limit` occurrences of the schedule after `now`
pub fn upcoming_occurrences(
    schedule: &WeeklySchedule,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<UpcomingOccurrence> {
    upcoming_occurrences_with_format(schedule, now, limit, DEFAULT_DATE_LABEL)
}

/// Same as [`upcoming_occurrences`] with a custom date label format
pub fn upcoming_occurrences_with_format(
    schedule: &WeeklySchedule,
    now: NaiveDateTime,
    limit: usize,
    label_format: &str,
) -> Vec<UpcomingOccurrence> {
    let today = now.date().weekday();
    let mut candidates: Vec<(NaiveDate, NaiveTime, &str, &'static str, &ClassSession)> = Vec::new();

    for (day, slots) in schedule {
        let weekday = match parse_weekday(day) {
            Ok(w) => w,
            Err(_) => {
                tracing::debug!("Skipping schedule entry with unknown weekday '{}'", day);
                continue;
            }
        };
        let days_ahead = days_until(today, weekday);

        for (time_key, session) in slots {
            let Some(time) = parse_time(time_key) else {
                tracing::debug!("Skipping {} slot with malformed time '{}'", day, time_key);
                continue;
            };
            let date = next_occurrence(days_ahead, time, now);
            candidates.push((date, time, time_key.as_str(), weekday_name(weekday), session));
        }
    }

    candidates.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    candidates
        .into_iter()
        .take(limit)
        .map(|(date, _, time, weekday, session)| UpcomingOccurrence {
            date,
            time: time.trim().to_string(),
            weekday: weekday.to_string(),
            date_label: format_date_label(date, label_format)
                .unwrap_or_else(|| format_iso(date)),
            participant_count: session.participant_count(),
            session: session.clone(),
        })
        .collect()
}
