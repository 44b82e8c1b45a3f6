//! Personal planner module
//!
//! Merges the member's to-dos, priorities and notes into one ordered
//! agenda and groups it by day. Selection state for list screens lives in
//! [`selection`].

pub mod selection;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub use selection::{BatchDeleteRequest, SelectionSet};

/// Kind of planner item; declaration order is display order within a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Priority,
    Todo,
    Note,
}

/// A to-do, priority or note as shown in the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerEntry {
    pub id: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hh_mm")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub done: bool,
}

impl PlannerEntry {
    pub fn new(id: impl Into<String>, kind: EntryKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            date: None,
            time: None,
            done: false,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// `Some` sorts before `None`
fn cmp_present_first<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Agenda order: date, then time, then kind, then title
pub fn agenda_order(a: &PlannerEntry, b: &PlannerEntry) -> Ordering {
    cmp_present_first(&a.date, &b.date)
        .then_with(|| cmp_present_first(&a.time, &b.time))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.title.cmp(&b.title))
}

/// Merge the three planner lists into one agenda
pub fn merge_entries(
    todos: Vec<PlannerEntry>,
    priorities: Vec<PlannerEntry>,
    notes: Vec<PlannerEntry>,
) -> Vec<PlannerEntry> {
    let mut merged: Vec<PlannerEntry> = todos
        .into_iter()
        .chain(priorities)
        .chain(notes)
        .collect();
    merged.sort_by(agenda_order);
    merged
}

/// Group entries by date; undated entries land under `None`
pub fn bucket_by_date(entries: Vec<PlannerEntry>) -> BTreeMap<Option<NaiveDate>, Vec<PlannerEntry>> {
    let mut buckets: BTreeMap<Option<NaiveDate>, Vec<PlannerEntry>> = BTreeMap::new();
    for entry in entries {
        buckets.entry(entry.date).or_default().push(entry);
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by(agenda_order);
    }
    buckets
}

/// One day's entries in agenda order
pub fn entries_for_day(entries: &[PlannerEntry], date: NaiveDate) -> Vec<PlannerEntry> {
    let mut day: Vec<PlannerEntry> = entries
        .iter()
        .filter(|e| e.date == Some(date))
        .cloned()
        .collect();
    day.sort_by(agenda_order);
    day
}

/// Serde for optional `HH:MM` times
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
