//! Schedule module
//!
//! Weekly class schedules and the personal planner week:
//! - Day status (passed / today / future)
//! - Upcoming class occurrences relative to an injected "now"
//! - Regeneration of passed days as blank templates
//! - Time slot and week template generation

pub mod regenerate;
pub mod slots;
pub mod status;
pub mod upcoming;

pub use regenerate::{regenerate_day, regenerate_passed_days};
pub use slots::{blank_day, generate_time_slots, week_template};
pub use status::{classify_date, classify_day, DayStatus};
pub use upcoming::{upcoming_occurrences, UpcomingOccurrence};
