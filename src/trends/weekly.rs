//! Weekday arithmetic
//!
//! Helpers for schedules keyed by weekday name.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::CommandError;

/// Monday to Sunday, the order planner weeks are laid out in
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse a weekday name ("Monday", "mon", case-insensitive)
pub fn parse_weekday(name: &str) -> Result<Weekday, CommandError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| CommandError::InvalidWeekday(name.to_string()))
}

/// Full English name, as used in schedule keys and ids
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Days from `from` forward to the next `target`, in 0..7
pub fn days_until(from: Weekday, target: Weekday) -> i64 {
    let from = from.num_days_from_sunday() as i64;
    let target = target.num_days_from_sunday() as i64;
    (target - from + 7) % 7
}

/// Next date falling on `target`, strictly after `today`
pub fn next_weekday_after(today: NaiveDate, target: Weekday) -> NaiveDate {
    let delta = match days_until(today.weekday(), target) {
        0 => 7,
        d => d,
    };
    today + Duration::days(delta)
}

/// Get the Monday of the week containing the given date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Duration::days(days_from_monday as i64)
}

/// The seven dates Monday..Sunday of the week containing `date`
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..7).map(|i| start + Duration::days(i)).collect()
}
