// File: crates/bp-core/tests/bounds.rs
// Purpose: Noon-snapped time axis, padded value axis, default zoom, and zoom state reading.

use bp_core::{compute_bounds, normalize, parse_local_clock, Reading, Row, ZoomWindow};
use bp_core::types::MS_PER_DAY;
use serde_json::json;

fn at(t: &str) -> i64 {
    parse_local_clock(t).expect("valid clock text")
}

fn rows(feed: &[(&str, f64, f64, f64)]) -> Vec<Row> {
    let readings: Vec<Reading> = feed.iter().map(|&(t, s, d, p)| Reading::new(t, s, d, p)).collect();
    normalize(&readings).expect("rows")
}

#[test]
fn time_axis_snaps_to_noon_around_data() {
    let r = rows(&[
        ("2025-11-15T08:10:00+08:00", 120.0, 80.0, 60.0),
        ("2025-11-16T22:34:40+08:00", 130.0, 85.0, 66.0),
        ("2025-11-17T23:59:00+08:00", 125.0, 82.0, 62.0),
    ]);
    let b = compute_bounds(&r, &r, None).expect("bounds");
    assert_eq!(b.axis_min, at("2025-11-14T12:00"));
    assert_eq!(b.axis_max, at("2025-11-18T12:00"));
}

#[test]
fn value_axis_pads_all_three_quantities() {
    let r = rows(&[
        ("2025-11-15T08:00", 120.0, 80.0, 55.5),
        ("2025-11-15T21:00", 130.2, 84.0, 70.0),
    ]);
    let b = compute_bounds(&r, &r, None).expect("bounds");
    assert_eq!(b.value_min, 45.0);
    assert_eq!(b.value_max, 141.0);
}

#[test]
fn default_zoom_is_clamped_to_short_history() {
    let r = rows(&[("2025-11-15T08:00", 120.0, 80.0, 60.0), ("2025-11-17T08:00", 120.0, 80.0, 60.0)]);
    let b = compute_bounds(&r, &r, None).expect("bounds");
    assert_eq!(b.default_zoom, ZoomWindow::Absolute { start: b.axis_min, end: b.axis_max });
    assert_eq!(b.zoom, b.default_zoom);
}

#[test]
fn default_zoom_shows_last_thirty_days() {
    let r = rows(&[("2025-09-01T08:00", 120.0, 80.0, 60.0), ("2025-11-17T08:00", 120.0, 80.0, 60.0)]);
    let b = compute_bounds(&r, &r, None).expect("bounds");
    assert_eq!(
        b.default_zoom,
        ZoomWindow::Absolute { start: at("2025-10-17T12:00"), end: at("2025-11-18T12:00") }
    );
}

#[test]
fn filtered_rows_drive_bounds() {
    let all = rows(&[
        ("2025-11-10T14:00", 180.0, 100.0, 90.0),
        ("2025-11-15T08:00", 120.0, 80.0, 60.0),
        ("2025-11-16T22:00", 125.0, 82.0, 64.0),
    ]);
    let filtered = all[1..].to_vec();
    let b = compute_bounds(&all, &filtered, None).expect("bounds");
    assert_eq!(b.axis_min, at("2025-11-14T12:00"));
    assert_eq!(b.value_max, 135.0);

    let fallback = compute_bounds(&all, &[], None).expect("bounds");
    assert_eq!(fallback.axis_min, at("2025-11-09T12:00"));
    assert!(compute_bounds(&[], &[], None).is_err());
}

#[test]
fn previous_absolute_zoom_is_kept_or_clamped() {
    let r = rows(&[("2025-11-15T08:00", 120.0, 80.0, 60.0), ("2025-11-17T08:00", 120.0, 80.0, 60.0)]);
    let inside = ZoomWindow::Absolute { start: at("2025-11-15T12:00"), end: at("2025-11-16T18:00") };
    assert_eq!(compute_bounds(&r, &r, Some(inside)).expect("bounds").zoom, inside);

    let wide = ZoomWindow::Absolute { start: at("2025-11-01T00:00"), end: at("2025-11-30T00:00") };
    let b = compute_bounds(&r, &r, Some(wide)).expect("bounds");
    assert_eq!(b.zoom, ZoomWindow::Absolute { start: b.axis_min, end: b.axis_max });
}

#[test]
fn previous_percent_zoom_passes_through() {
    let r = rows(&[("2025-11-15T08:00", 120.0, 80.0, 60.0)]);
    let pct = ZoomWindow::Percent { start: -5.0, end: 140.0 };
    let b = compute_bounds(&r, &r, Some(pct)).expect("bounds");
    assert_eq!(b.zoom, pct);
    let (lo, hi) = ZoomWindow::Percent { start: 50.0, end: 100.0 }.resolve(b.axis_min, b.axis_max);
    assert_eq!(lo, (b.axis_min + MS_PER_DAY) as f64);
    assert_eq!(hi, b.axis_max as f64);
}

#[test]
fn zoom_state_shapes() {
    assert_eq!(
        ZoomWindow::from_state(&json!({"start": 1000, "end": 5000})),
        Some(ZoomWindow::Absolute { start: 1000, end: 5000 })
    );
    assert_eq!(
        ZoomWindow::from_state(&json!([{"startValue": 1000.4, "endValue": 5000.6}])),
        Some(ZoomWindow::Absolute { start: 1000, end: 5001 })
    );
    assert_eq!(
        ZoomWindow::from_state(&json!({"startPercent": 25, "endPercent": 100})),
        Some(ZoomWindow::Percent { start: 25.0, end: 100.0 })
    );
    let own = ZoomWindow::Percent { start: 10.0, end: 20.0 };
    assert_eq!(ZoomWindow::from_state(&serde_json::to_value(own).expect("json")), Some(own));
}

#[test]
fn unreadable_zoom_state_is_no_zoom() {
    for state in [
        json!(null),
        json!("50%"),
        json!([]),
        json!({"start": "a", "end": 3}),
        json!({"start": 9000, "end": 10}),
        json!({"kind": "absolute", "begin": 1}),
    ] {
        assert_eq!(ZoomWindow::from_state(&state), None, "state {state}");
    }
}
