// File: crates/bp-core/tests/clock.rs
// Purpose: Local-clock codec: offset-insensitive parsing, formatting, and calendar-date keys.

use bp_core::clock::{clock_hour, format_local_clock, parse_local_clock, CalendarDate};
use bp_core::types::MS_PER_DAY;

#[test]
fn clock_digits_map_to_fixed_timeline() {
    assert_eq!(parse_local_clock("1970-01-01T00:00"), Some(0));
    assert_eq!(parse_local_clock("2025-11-16T22:34"), Some(1_763_332_440_000));
}

#[test]
fn trailing_offset_is_ignored() {
    let want = parse_local_clock("2025-11-16T22:34:00");
    for s in [
        "2025-11-16T22:34:00+08:00",
        "2025-11-16T22:34:00-05:00",
        "2025-11-16T22:34:00Z",
        "2025-11-16T22:34+03:00",
        "2025-11-16 22:34",
    ] {
        assert_eq!(parse_local_clock(s), want, "input {s}");
    }
}

#[test]
fn seconds_are_optional_and_kept_when_present() {
    let base = parse_local_clock("2025-11-16T22:34").expect("parse");
    assert_eq!(parse_local_clock("2025-11-16T22:34:40+08:00"), Some(base + 40_000));
}

#[test]
fn malformed_text_yields_none() {
    for s in [
        "",
        "garbage",
        "2025-11-16",
        "2025-11-16T2:34",
        "2025-13-01T00:00",
        "2025-02-30T10:00",
        "2025-11-16T24:00",
        " 2025-11-16T22:34",
    ] {
        assert_eq!(parse_local_clock(s), None, "input {s:?}");
    }
}

#[test]
fn offsets_do_not_shift_the_timeline() {
    let want = Some(1_768_897_885_000);
    for s in ["2026-01-20T08:31:25+03:00", "2026-01-20T08:31:25-07:00", "2026-01-20T08:31:25.250Z"] {
        assert_eq!(parse_local_clock(s), want, "input {s}");
    }
}

#[test]
fn digits_running_past_the_clock_are_rejected() {
    for s in ["2025-11-16T22:345", "2025-11-16T22:34:4", "2025-11-16T22:34:401", "2025-11-16T22:34x"] {
        assert_eq!(parse_local_clock(s), None, "input {s:?}");
    }
}

#[test]
fn format_round_trips_date_hour_minute() {
    for s in ["2025-11-16T22:34:40+08:00", "2024-02-29T07:05", "1999-12-31T23:59:59Z"] {
        let millis = parse_local_clock(s).expect("parse");
        let want = format!("{} {}", &s[..10], &s[11..16]);
        assert_eq!(format_local_clock(millis), want);
    }
}

#[test]
fn hour_comes_from_text() {
    assert_eq!(clock_hour("2025-11-16T22:34:40+08:00"), Some(22));
    assert_eq!(clock_hour("2025-11-16T07:00"), Some(7));
    assert_eq!(clock_hour("2025-11-16"), None);
    assert_eq!(clock_hour("2025-11-16Txx:00"), None);
}

#[test]
fn calendar_date_uses_text_prefix() {
    let d = CalendarDate::from_iso_prefix("2025-11-16T23:59:59-10:00").expect("date");
    assert_eq!(d, CalendarDate::new(2025, 11, 16));
    assert_eq!(d.to_string(), "2025-11-16");
    assert_eq!(CalendarDate::from_iso_prefix("2025/11/16T00:00"), None);
    assert_eq!(CalendarDate::from_iso_prefix("short"), None);
}

#[test]
fn calendar_date_arithmetic_crosses_month_and_year() {
    let d = CalendarDate::new(2025, 1, 1);
    assert_eq!(d.offset_days(-1), Some(CalendarDate::new(2024, 12, 31)));
    assert_eq!(CalendarDate::new(2024, 2, 28).offset_days(1), Some(CalendarDate::new(2024, 2, 29)));

    let midnight = d.midnight_millis().expect("midnight");
    assert_eq!(d.noon_millis(), Some(midnight + MS_PER_DAY / 2));
    assert_eq!(CalendarDate::from_millis(midnight + MS_PER_DAY - 1), Some(d));
}
