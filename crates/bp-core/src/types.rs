// File: crates/bp-core/src/types.rs
// Summary: Shared types and constants (timeline units, highlight windows, paddings).

/// Position on the local-clock timeline: clock digits read as if they were UTC, in milliseconds.
pub type Millis = i64;

pub const MS_PER_MINUTE: Millis = 60_000;
pub const MS_PER_HOUR: Millis = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: Millis = 24 * MS_PER_HOUR;

/// Morning highlight window, local clock hours `[start, end)`.
pub const MORNING_HOURS: std::ops::Range<u32> = 7..12;
/// Evening highlight window starts at this hour and runs to the end of the day.
pub const EVENING_FROM_HOUR: u32 = 21;

/// Night shading on each date: 18:00 of the date up to 06:00 of the next one.
pub const NIGHT_START_HOUR: Millis = 18;
pub const NIGHT_END_HOUR: Millis = 30;

/// Padding band (mmHg / bpm) added around the value axis.
pub const VALUE_PADDING: f64 = 10.0;
/// Default visible window when no prior zoom exists.
pub const DEFAULT_ZOOM_DAYS: Millis = 30;
/// Smallest span the zoom control may show. Enforced by the control, not by `view`.
pub const MIN_ZOOM_SPAN_MS: Millis = MS_PER_DAY;
