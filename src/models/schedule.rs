//! Schedule data types
//!
//! Shapes shared by the class schedule and the personal planner.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One time-of-day entry in a day's schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl WeeklySlot {
    /// Slot with no content
    pub fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// True when every content field is empty
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.notes.is_empty()
            && self.location.is_empty()
            && self.status.is_empty()
    }
}

/// A single weekday of the planner, keyed by time of day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub id: String,
    pub day_name: String,
    /// DD-MM-YYYY
    pub date: String,
    #[serde(default)]
    pub schedule: BTreeMap<String, WeeklySlot>,
}

/// A recurring class as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassSession {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Backend writes `null` for classes nobody has joined
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let participants: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(participants.unwrap_or_default())
}

/// Recurring class schedule: weekday name -> time -> class
pub type WeeklySchedule = BTreeMap<String, BTreeMap<String, ClassSession>>;

/// Id of a regenerated day: `sche-<Weekday>-<DD-MM-YYYY>`
pub fn day_id(day_name: &str, date: &str) -> String {
    format!("sche-{}-{}", day_name, date)
}

/// Id of a slot: `sche-<Weekday>-<DD-MM-YYYY>-<HH:MM>`
pub fn slot_id(day_name: &str, date: &str, time: &str) -> String {
    format!("sche-{}-{}-{}", day_name, date, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slot_id_scheme() {
        assert_eq!(
            slot_id("Monday", "15-01-2024", "09:00"),
            "sche-Monday-15-01-2024-09:00"
        );
        assert_eq!(day_id("Monday", "15-01-2024"), "sche-Monday-15-01-2024");
    }

    #[test]
    fn test_schedule_day_camel_case() {
        let day: ScheduleDay = serde_json::from_value(json!({
            "id": "sche-Monday-15-01-2024",
            "dayName": "Monday",
            "date": "15-01-2024",
            "schedule": {
                "09:00": {"id": "sche-Monday-15-01-2024-09:00", "title": "Leg day"}
            }
        }))
        .unwrap();

        assert_eq!(day.day_name, "Monday");
        let slot = &day.schedule["09:00"];
        assert_eq!(slot.title, "Leg day");
        assert_eq!(slot.notes, "");
        assert!(slot.start.is_none());

        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"dayName\":\"Monday\""));
        assert!(!json.contains("\"start\""));
    }

    #[test]
    fn test_blank_slot() {
        let slot = WeeklySlot::blank("x".to_string());
        assert!(slot.is_blank());

        let filled = WeeklySlot {
            title: "Cardio".to_string(),
            ..slot
        };
        assert!(!filled.is_blank());
    }

    #[test]
    fn test_class_session_keeps_extra_fields() {
        let session: ClassSession = serde_json::from_value(json!({
            "className": "Spin",
            "participants": [{"email": "a@x.io"}, {"email": "b@x.io"}]
        }))
        .unwrap();

        assert_eq!(session.participant_count(), 2);
        assert_eq!(session.extra["className"], "Spin");

        let bare: ClassSession = serde_json::from_value(json!({"className": "Yoga"})).unwrap();
        assert_eq!(bare.participant_count(), 0);
    }

    #[test]
    fn test_null_participants_count_as_empty() {
        let schedule: WeeklySchedule = serde_json::from_value(json!({
            "Monday": {
                "07:00": {"className": "Spin", "participants": null},
                "18:00": {"className": "HIIT", "participants": [{"email": "a@x.io"}]}
            }
        }))
        .unwrap();

        assert_eq!(schedule["Monday"]["07:00"].participant_count(), 0);
        assert_eq!(schedule["Monday"]["18:00"].participant_count(), 1);
    }
}
