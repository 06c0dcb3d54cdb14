// File: crates/bp-core/src/clock.rs
// Summary: Local-clock timestamp codec and the calendar-date key used for day grouping.
// Notes:
// - Clock digits are mapped against a fixed zero-offset epoch. Any UTC offset after the
//   minutes/seconds is accepted syntactically and ignored.
// - Calendar dates are always taken from the literal text prefix, never from millis.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Days, NaiveDate};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::types::{Millis, MS_PER_HOUR};

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2})(?::(\d{2}))?(?:$|[.Z+\-])")
            .expect("Failed to compile clock regex")
    })
}

/// Parse the leading `YYYY-MM-DDTHH:MM[:SS]` of `text` into a timeline coordinate. The prefix
/// must end the text or be followed by fractional seconds or an offset (`.`, `Z`, `+`, `-`).
///
/// Returns `None` when the prefix does not match or names an impossible date/time.
/// The result does not depend on the time zone of the running process.
pub fn parse_local_clock(text: &str) -> Option<Millis> {
    let caps = clock_pattern().captures(text)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let (month, day, hour, minute) = (num(2)?, num(3)?, num(4)?, num(5)?);
    let second = num(6).unwrap_or(0);

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    Some(naive.and_utc().timestamp_millis())
}

/// Format a timeline coordinate as `YYYY-MM-DD HH:MM` (axis labels, tooltip headers).
pub fn format_local_clock(millis: Millis) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.naive_utc().format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// Hour digits of a local-clock string (positions 11..13), read straight from the text.
pub fn clock_hour(iso_text: &str) -> Option<u32> {
    let digits = iso_text.get(11..13)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|h| *h < 24)
}

/// Calendar day of a local-clock string. Two dates are equal exactly when their
/// `YYYY-MM-DD` prefixes are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Date from the first 10 characters of `iso_text`.
    pub fn from_iso_prefix(iso_text: &str) -> Option<Self> {
        let prefix = iso_text.get(..10)?;
        let well_formed = prefix
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
        if !well_formed {
            return None;
        }
        Some(Self {
            year: prefix[0..4].parse().ok()?,
            month: prefix[5..7].parse().ok()?,
            day: prefix[8..10].parse().ok()?,
        })
    }

    /// Calendar day that contains the timeline coordinate `millis`.
    pub fn from_millis(millis: Millis) -> Option<Self> {
        let dt = DateTime::from_timestamp_millis(millis)?;
        Self::from_iso_prefix(&dt.naive_utc().format("%Y-%m-%d").to_string())
    }

    /// Midnight of this date, re-parsed through the codec so it shares the rows' timeline.
    pub fn midnight_millis(&self) -> Option<Millis> {
        parse_local_clock(&format!("{self}T00:00:00"))
    }

    pub fn noon_millis(&self) -> Option<Millis> {
        self.midnight_millis().map(|m| m + 12 * MS_PER_HOUR)
    }

    /// Date shifted by whole calendar days (negative moves backwards).
    pub fn offset_days(&self, days: i64) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        Self::from_iso_prefix(&shifted.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
