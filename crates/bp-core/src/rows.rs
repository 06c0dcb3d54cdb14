// File: crates/bp-core/src/rows.rs
// Summary: Raw readings and the normalized, time-ordered rows built from them for one render.

use serde::{Deserialize, Serialize};

use crate::clock::{clock_hour, parse_local_clock, CalendarDate};
use crate::error::ChartError;
use crate::feed::{lenient_number, lenient_text, nan};
use crate::types::Millis;

/// One feed entry as delivered by storage: `{"t": ..., "sys": ..., "dia": ..., "pulse": ...}`.
/// Values that are missing or not numeric decode to NaN and are dropped by [`normalize`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "t", default, deserialize_with = "lenient_text")]
    pub timestamp_text: String,
    #[serde(rename = "sys", default = "nan", deserialize_with = "lenient_number")]
    pub systolic: f64,
    #[serde(rename = "dia", default = "nan", deserialize_with = "lenient_number")]
    pub diastolic: f64,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub pulse: f64,
}

impl Reading {
    pub fn new(timestamp_text: impl Into<String>, systolic: f64, diastolic: f64, pulse: f64) -> Self {
        Self { timestamp_text: timestamp_text.into(), systolic, diastolic, pulse }
    }
}

/// A validated reading placed on the local-clock timeline. `iso_text` is the identity key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub local_millis: Millis,
    pub iso_text: String,
    pub sys: f64,
    pub dia: f64,
    pub pulse: f64,
}

impl Row {
    /// Build a row, or `None` if the timestamp does not parse or a value is not finite.
    pub fn from_reading(r: &Reading) -> Option<Self> {
        let local_millis = parse_local_clock(&r.timestamp_text)?;
        let finite = [r.systolic, r.diastolic, r.pulse].iter().all(|v| v.is_finite());
        if !finite {
            return None;
        }
        Some(Self {
            local_millis,
            iso_text: r.timestamp_text.clone(),
            sys: r.systolic,
            dia: r.diastolic,
            pulse: r.pulse,
        })
    }

    /// Day-group key from the text prefix.
    pub fn date(&self) -> Option<CalendarDate> {
        CalendarDate::from_iso_prefix(&self.iso_text)
    }

    /// Clock hour as written in the text.
    pub fn hour(&self) -> Option<u32> {
        clock_hour(&self.iso_text)
    }

    /// `HH:MM` as written in the text.
    pub fn clock_time(&self) -> &str {
        self.iso_text.get(11..16).unwrap_or("")
    }
}

/// Turn a feed into rows sorted by time; equal times keep feed order.
///
/// Malformed readings are dropped silently. Fails only when nothing survives.
pub fn normalize(readings: &[Reading]) -> Result<Vec<Row>, ChartError> {
    let mut rows: Vec<Row> = readings.iter().filter_map(Row::from_reading).collect();

    let dropped = readings.len() - rows.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = rows.len(), "dropped malformed readings");
    }
    if rows.is_empty() {
        return Err(ChartError::NoValidRecords { total: readings.len() });
    }

    rows.sort_by_key(|r| r.local_millis);
    Ok(rows)
}
