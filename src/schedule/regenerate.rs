//! Schedule regeneration
//!
//! Replaces a passed planner day with a blank copy anchored on the next
//! occurrence of the same weekday.

use chrono::NaiveDate;

use super::status::classify_day;
use crate::models::schedule::{day_id, slot_id, ScheduleDay, WeeklySlot};
use crate::trends::daily::format_dmy;
use crate::trends::weekly::{next_weekday_after, parse_weekday, weekday_name};
use crate::CommandError;

/// Blank out a day and move it to the next same weekday after `today`.
///
/// Today itself is never chosen. Time keys and `start`/`end` are kept;
/// title, notes, location and status are cleared.
pub fn regenerate_day(day: &ScheduleDay, today: NaiveDate) -> Result<ScheduleDay, CommandError> {
    let weekday = parse_weekday(&day.day_name)?;
    let name = weekday_name(weekday);
    let date = format_dmy(next_weekday_after(today, weekday));

    let schedule = day
        .schedule
        .iter()
        .map(|(time, old)| {
            let slot = WeeklySlot {
                start: old.start.clone(),
                end: old.end.clone(),
                ..WeeklySlot::blank(slot_id(name, &date, time))
            };
            (time.clone(), slot)
        })
        .collect();

    tracing::debug!("Regenerated {} {} as {}", name, day.date, date);

    Ok(ScheduleDay {
        id: day_id(name, &date),
        day_name: name.to_string(),
        date,
        schedule,
    })
}

/// Regenerate every passed day of a week, leaving the others untouched
pub fn regenerate_passed_days(
    days: &[ScheduleDay],
    today: NaiveDate,
) -> Result<Vec<ScheduleDay>, CommandError> {
    let mut regenerated = 0usize;
    let result = days
        .iter()
        .map(|day| {
            if classify_day(&day.date, today).can_regenerate() {
                regenerated += 1;
                regenerate_day(day, today)
            } else {
                Ok(day.clone())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Regenerated {} of {} planner days", regenerated, days.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn slot(id: &str, title: &str) -> WeeklySlot {
        WeeklySlot {
            id: id.to_string(),
            title: title.to_string(),
            notes: "bring towel".to_string(),
            location: "Studio 2".to_string(),
            status: "done".to_string(),
            start: Some("09:00".to_string()),
            end: Some("10:00".to_string()),
        }
    }

    fn monday_template() -> ScheduleDay {
        let mut schedule = BTreeMap::new();
        schedule.insert("09:00".to_string(), slot("sche-Monday-08-01-2024-09:00", "Squats"));
        schedule.insert("18:30".to_string(), slot("sche-Monday-08-01-2024-18:30", "Run"));
        ScheduleDay {
            id: "sche-Monday-08-01-2024".to_string(),
            day_name: "Monday".to_string(),
            date: "08-01-2024".to_string(),
            schedule,
        }
    }

    #[test]
    fn test_regenerate_moves_to_next_monday() {
        // Wednesday, Jan 10, 2024
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let day = regenerate_day(&monday_template(), today).unwrap();

        assert_eq!(day.date, "15-01-2024");
        assert_eq!(day.day_name, "Monday");
        assert_eq!(day.id, "sche-Monday-15-01-2024");
    }

    #[test]
    fn test_regenerate_never_picks_today() {
        // Monday, Jan 15, 2024
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let day = regenerate_day(&monday_template(), today).unwrap();
        assert_eq!(day.date, "22-01-2024");
    }

    #[test]
    fn test_regenerate_clears_content_and_keeps_times() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let day = regenerate_day(&monday_template(), today).unwrap();

        let keys: Vec<&String> = day.schedule.keys().collect();
        assert_eq!(keys, vec!["09:00", "18:30"]);

        for (time, slot) in &day.schedule {
            assert!(slot.is_blank());
            assert_eq!(slot.id, format!("sche-Monday-15-01-2024-{}", time));
            assert_eq!(slot.start.as_deref(), Some("09:00"));
            assert_eq!(slot.end.as_deref(), Some("10:00"));
        }
    }

    #[test]
    fn test_regenerate_unknown_weekday() {
        let mut day = monday_template();
        day.day_name = "Caturday".to_string();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(matches!(
            regenerate_day(&day, today),
            Err(CommandError::InvalidWeekday(_))
        ));
    }

    #[test]
    fn test_regenerate_passed_days_only() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let passed = monday_template();
        let mut upcoming = monday_template();
        upcoming.day_name = "Friday".to_string();
        upcoming.date = "12-01-2024".to_string();

        let week = regenerate_passed_days(&[passed, upcoming.clone()], today).unwrap();

        assert_eq!(week.len(), 2);
        assert_eq!(week[0].date, "15-01-2024");
        assert!(week[0].schedule.values().all(WeeklySlot::is_blank));
        assert_eq!(week[1], upcoming);
    }
}
