// File: crates/bp-core/tests/grouping.rs
// Purpose: Day grouping, morning/evening picks, and the daily summary table.

use std::collections::BTreeMap;

use bp_core::highlight::{group_by_day, select_highlights, Highlight};
use bp_core::{daily_summary, normalize, CalendarDate, Reading};

fn reading(t: &str) -> Reading {
    Reading::new(t, 120.0, 80.0, 60.0)
}

#[test]
fn earliest_reading_in_each_window_wins() {
    let rows = normalize(&[
        reading("2025-11-20T09:00:00"),
        reading("2025-11-20T08:00:00"),
        reading("2025-11-20T22:30:00"),
        reading("2025-11-20T23:45:00"),
    ])
    .expect("rows");

    let sets = select_highlights(&rows);
    assert_eq!(sets.morning.iter().collect::<Vec<_>>(), vec!["2025-11-20T08:00:00"]);
    assert_eq!(sets.evening.iter().collect::<Vec<_>>(), vec!["2025-11-20T22:30:00"]);
    assert_eq!(sets.classify("2025-11-20T09:00:00"), Highlight::None);
}

#[test]
fn noon_is_outside_morning_window() {
    let rows = normalize(&[
        reading("2025-11-26T12:14:14+08:00"),
        reading("2025-11-26T11:06:56+08:00"),
        reading("2025-11-26T22:59:14+08:00"),
    ])
    .expect("rows");
    let sets = select_highlights(&rows);
    assert!(sets.morning.contains("2025-11-26T11:06:56+08:00"));
    assert!(!sets.morning.contains("2025-11-26T12:14:14+08:00"));
    assert!(sets.evening.contains("2025-11-26T22:59:14+08:00"));
}

#[test]
fn day_without_window_contributes_nothing() {
    let rows = normalize(&[
        reading("2025-11-16T14:00:00"),
        reading("2025-11-16T22:34:40"),
        reading("2025-11-17T02:10:00"),
        reading("2025-11-17T19:30:00"),
    ])
    .expect("rows");
    let sets = select_highlights(&rows);
    assert!(sets.morning.is_empty());
    assert_eq!(sets.evening.len(), 1);
    assert!(sets.evening.contains("2025-11-16T22:34:40"));
}

#[test]
fn grouping_uses_clock_text_not_offset() {
    // Same instant, different stored offsets: each lands on its written date.
    let rows = normalize(&[
        reading("2025-11-16T23:30:00+08:00"),
        reading("2025-11-16T10:30:00-05:00"),
        reading("2025-11-17T00:30:00+09:00"),
    ])
    .expect("rows");
    let groups = group_by_day(&rows);
    let dates: Vec<_> = groups.iter().map(|g| g.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-11-16", "2025-11-17"]);
    assert_eq!(groups[0].rows.len(), 2);
    assert_eq!(groups[0].rows[0].iso_text, "2025-11-16T10:30:00-05:00");
}

#[test]
fn textually_distinct_timestamps_do_not_collide() {
    let rows = normalize(&[reading("2025-11-18T08:00"), reading("2025-11-18T08:00:00")]).expect("rows");
    let sets = select_highlights(&rows);
    // Stable order keeps the first fed reading as the morning pick.
    assert!(sets.morning.contains("2025-11-18T08:00"));
    assert_eq!(sets.classify("2025-11-18T08:00:00"), Highlight::None);
}

#[test]
fn at_most_one_pick_per_day_and_sets_are_disjoint() {
    let mut feed = Vec::new();
    for day in 1..=9u32 {
        for minute in [0u32, 20, 40] {
            for hour in [0u32, 6, 7, 9, 11, 12, 18, 21, 22, 23] {
                if (day + hour + minute) % 4 != 0 {
                    feed.push(reading(&format!("2025-03-{day:02}T{hour:02}:{minute:02}:00")));
                }
            }
        }
    }
    let rows = normalize(&feed).expect("rows");
    let sets = select_highlights(&rows);
    assert!(sets.morning.is_disjoint(&sets.evening));

    let mut per_day: BTreeMap<CalendarDate, (usize, usize)> = BTreeMap::new();
    for iso in &sets.morning {
        let hour: u32 = iso[11..13].parse().expect("hour");
        assert!((7..12).contains(&hour), "{iso}");
        per_day.entry(CalendarDate::from_iso_prefix(iso).expect("date")).or_default().0 += 1;
    }
    for iso in &sets.evening {
        let hour: u32 = iso[11..13].parse().expect("hour");
        assert!(hour >= 21, "{iso}");
        per_day.entry(CalendarDate::from_iso_prefix(iso).expect("date")).or_default().1 += 1;
    }
    assert!(per_day.values().all(|&(m, e)| m <= 1 && e <= 1), "{per_day:?}");
    assert_eq!(per_day.len(), 9);
}

#[test]
fn daily_summary_lists_every_date_with_picks() {
    let rows = normalize(&[
        Reading::new("2025-11-17T09:19:21+08:00", 131.0, 84.0, 70.0),
        Reading::new("2025-11-17T22:13:31+08:00", 125.0, 79.0, 66.0),
        Reading::new("2025-11-16T22:34:40+08:00", 140.0, 90.0, 72.0),
    ])
    .expect("rows");
    let summary = daily_summary(&rows);
    assert_eq!(summary.len(), 2);

    assert_eq!(summary[0].date.to_string(), "2025-11-16");
    assert_eq!(summary[0].morning_time(), None);
    assert_eq!(summary[0].evening_time(), Some("22:34"));
    assert_eq!(summary[0].evening_bp().as_deref(), Some("140/90"));

    assert_eq!(summary[1].morning_time(), Some("09:19"));
    assert_eq!(summary[1].morning_bp().as_deref(), Some("131/84"));
    assert_eq!(summary[1].evening_time(), Some("22:13"));

    let json = serde_json::to_value(&summary[0]).expect("json");
    assert_eq!(json["date"], "2025-11-16");
    assert!(json["morning"].is_null());
}
