// File: crates/bp-core/src/highlight.rs
// Summary: Day grouping by calendar-date prefix and the per-day morning/evening picks.
// Notes:
// - Morning is the first reading of a day with clock hour in [7, 12); evening is the first
//   reading with hour >= 21. Hours come from the text, not from millis arithmetic.
// - Sets are keyed by exact `iso_text`, so textually distinct timestamps never collide.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::clock::CalendarDate;
use crate::rows::Row;
use crate::types::{EVENING_FROM_HOUR, MORNING_HOURS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Morning,
    Evening,
    None,
}

pub fn is_morning_hour(hour: u32) -> bool {
    MORNING_HOURS.contains(&hour)
}

pub fn is_evening_hour(hour: u32) -> bool {
    hour >= EVENING_FROM_HOUR && hour < 24
}

/// Rows sharing one calendar-date prefix, in time order.
#[derive(Clone, Debug)]
pub struct DayGroup<'a> {
    pub date: CalendarDate,
    pub rows: Vec<&'a Row>,
}

impl<'a> DayGroup<'a> {
    pub fn morning(&self) -> Option<&'a Row> {
        self.first_where(is_morning_hour)
    }

    pub fn evening(&self) -> Option<&'a Row> {
        self.first_where(is_evening_hour)
    }

    fn first_where(&self, pred: fn(u32) -> bool) -> Option<&'a Row> {
        self.rows.iter().copied().find(|r| r.hour().is_some_and(pred))
    }
}

/// Group rows by date, dates ascending. `rows` must already be time-ordered
/// (as [`crate::rows::normalize`] returns them); group-local order is preserved.
pub fn group_by_day(rows: &[Row]) -> Vec<DayGroup<'_>> {
    let mut by_date: BTreeMap<CalendarDate, Vec<&Row>> = BTreeMap::new();
    for row in rows {
        if let Some(date) = row.date() {
            by_date.entry(date).or_default().push(row);
        }
    }
    by_date.into_iter().map(|(date, rows)| DayGroup { date, rows }).collect()
}

/// Morning and evening highlight sets, at most one entry per day each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HighlightSets {
    pub morning: BTreeSet<String>,
    pub evening: BTreeSet<String>,
}

impl HighlightSets {
    pub fn classify(&self, iso_text: &str) -> Highlight {
        if self.morning.contains(iso_text) {
            Highlight::Morning
        } else if self.evening.contains(iso_text) {
            Highlight::Evening
        } else {
            Highlight::None
        }
    }

    pub fn contains(&self, iso_text: &str) -> bool {
        self.classify(iso_text) != Highlight::None
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.evening.is_empty()
    }
}

pub fn select_highlights(rows: &[Row]) -> HighlightSets {
    let mut sets = HighlightSets::default();
    for day in group_by_day(rows) {
        if let Some(r) = day.morning() {
            sets.morning.insert(r.iso_text.clone());
        }
        if let Some(r) = day.evening() {
            sets.evening.insert(r.iso_text.clone());
        }
    }
    sets
}
