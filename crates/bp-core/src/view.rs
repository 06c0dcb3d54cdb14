// File: crates/bp-core/src/view.rs
// Summary: Axis bounds, the default zoom window, and zoom preservation across re-renders.
// Notes:
// - The time axis is snapped to noon of the day before the first reading through noon of
//   the day after the last one.
// - A prior zoom is carried forward: absolute windows are clamped into the new axis,
//   percent windows pass through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::CalendarDate;
use crate::error::ChartError;
use crate::rows::Row;
use crate::types::{Millis, DEFAULT_ZOOM_DAYS, MS_PER_DAY, VALUE_PADDING};

/// Visible part of the time axis, in one of two mutually exclusive forms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ZoomWindow {
    Absolute { start: Millis, end: Millis },
    Percent { start: f64, end: f64 },
}

impl ZoomWindow {
    /// Read the zoom state left on a previous chart instance.
    ///
    /// Accepts this type's own serialized form, `{start, end}` / `{startValue, endValue}`
    /// (timeline millis), `{startPercent, endPercent}`, or an array whose first element is
    /// one of those. Any other shape yields `None` and the caller uses the default window.
    pub fn from_state(state: &Value) -> Option<Self> {
        if state.is_null() {
            return None;
        }
        let zoom = read_state(state);
        if zoom.is_none() {
            tracing::warn!(%state, "unreadable zoom state, using default window");
        }
        zoom
    }

    /// Absolute start/end on the timeline for an axis spanning `[axis_min, axis_max]`.
    pub fn resolve(&self, axis_min: Millis, axis_max: Millis) -> (f64, f64) {
        match *self {
            ZoomWindow::Absolute { start, end } => (start as f64, end as f64),
            ZoomWindow::Percent { start, end } => {
                let span = (axis_max - axis_min) as f64;
                (axis_min as f64 + span * start / 100.0, axis_min as f64 + span * end / 100.0)
            }
        }
    }

    fn clamped(self, axis_min: Millis, axis_max: Millis) -> Self {
        match self {
            ZoomWindow::Absolute { start, end } => ZoomWindow::Absolute {
                start: start.clamp(axis_min, axis_max),
                end: end.clamp(axis_min, axis_max),
            },
            percent => percent,
        }
    }

    fn is_well_formed(&self) -> bool {
        match *self {
            ZoomWindow::Absolute { start, end } => start <= end,
            ZoomWindow::Percent { start, end } => start.is_finite() && end.is_finite() && start <= end,
        }
    }
}

fn read_state(state: &Value) -> Option<ZoomWindow> {
    match state {
        Value::Array(items) => items.first().and_then(read_state),
        Value::Object(map) if map.contains_key("kind") => {
            serde_json::from_value::<ZoomWindow>(state.clone()).ok().filter(ZoomWindow::is_well_formed)
        }
        Value::Object(map) => read_fields(map).filter(ZoomWindow::is_well_formed),
        _ => None,
    }
}

fn read_fields(map: &Map<String, Value>) -> Option<ZoomWindow> {
    let num = |key: &str| map.get(key).and_then(Value::as_f64).filter(|v| v.is_finite());

    if let (Some(start), Some(end)) = (num("startPercent"), num("endPercent")) {
        return Some(ZoomWindow::Percent { start, end });
    }
    let (start, end) = match (num("startValue"), num("endValue")) {
        (Some(s), Some(e)) => (s, e),
        _ => (num("start")?, num("end")?),
    };
    Some(ZoomWindow::Absolute { start: start.round() as Millis, end: end.round() as Millis })
}

/// Axis ranges for one render plus the zoom window to apply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub axis_min: Millis,
    pub axis_max: Millis,
    pub value_min: f64,
    pub value_max: f64,
    pub default_zoom: ZoomWindow,
    pub zoom: ZoomWindow,
}

fn noon_shifted(date: CalendarDate, days: i64) -> Option<Millis> {
    date.offset_days(days)?.noon_millis()
}

/// Compute bounds over `filtered` (falling back to `rows` if the filter left nothing),
/// carrying `previous` forward when given.
pub fn compute_bounds(rows: &[Row], filtered: &[Row], previous: Option<ZoomWindow>) -> Result<Bounds, ChartError> {
    let source = if filtered.is_empty() { rows } else { filtered };
    let (Some(first), Some(last)) = (
        source.iter().min_by_key(|r| r.local_millis),
        source.iter().max_by_key(|r| r.local_millis),
    ) else {
        return Err(ChartError::NoValidRecords { total: 0 });
    };

    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for r in source {
        for v in [r.sys, r.dia, r.pulse] {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    let value_min = (lo - VALUE_PADDING).floor();
    let value_max = (hi + VALUE_PADDING).ceil();

    let earliest = source.iter().filter_map(Row::date).min();
    let latest = source.iter().filter_map(Row::date).max();
    let axis_min = earliest
        .and_then(|d| noon_shifted(d, -1))
        .unwrap_or(first.local_millis - MS_PER_DAY);
    let axis_max = latest
        .and_then(|d| noon_shifted(d, 1))
        .unwrap_or(last.local_millis + MS_PER_DAY);

    let window_start = CalendarDate::from_millis(last.local_millis - DEFAULT_ZOOM_DAYS * MS_PER_DAY)
        .and_then(|d| noon_shifted(d, -1))
        .unwrap_or(axis_min)
        .max(axis_min);
    let default_zoom = ZoomWindow::Absolute { start: window_start, end: axis_max };

    let zoom = match previous {
        Some(prev) => {
            let carried = prev.clamped(axis_min, axis_max);
            tracing::debug!(?prev, ?carried, "carrying previous zoom forward");
            carried
        }
        None => default_zoom,
    };

    Ok(Bounds { axis_min, axis_max, value_min, value_max, default_zoom, zoom })
}
