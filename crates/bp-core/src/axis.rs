// File: crates/bp-core/src/axis.rs
// Summary: Axis model with labels, ranges, and tick layout for the time and value axes.

use serde::Serialize;

use crate::clock::{format_local_clock, CalendarDate};
use crate::types::{Millis, MS_PER_DAY};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn time(min: Millis, max: Millis) -> Self {
        Self::new("Time", min as f64, max as f64)
    }

    pub fn value(min: f64, max: f64) -> Self {
        Self::new("mmHg", min, max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub at: f64,
    pub label: String,
}

/// Upper bound on ticks per axis; wider spans get a coarser stride.
pub const MAX_TICKS: usize = 50;

/// Ticks at local midnights inside `[min, max]`, labelled `YYYY-MM-DD HH:MM`.
/// Every midnight while the span fits in `MAX_TICKS` days, every n-th midnight beyond that.
pub fn time_ticks(min: Millis, max: Millis) -> Vec<Tick> {
    if max < min {
        return Vec::new();
    }
    let Some(mut t) = CalendarDate::from_millis(min).and_then(|d| d.midnight_millis()) else {
        return Vec::new();
    };
    if t < min {
        t += MS_PER_DAY;
    }
    let cap = MAX_TICKS as i64;
    let span_days = (max - t).max(0) / MS_PER_DAY + 1;
    let stride = ((span_days + cap - 1) / cap).max(1) * MS_PER_DAY;

    let mut out = Vec::new();
    while t <= max && out.len() < MAX_TICKS {
        out.push(Tick { at: t as f64, label: format_local_clock(t) });
        t += stride;
    }
    out
}

/// Evenly spaced ticks at multiples of `step` inside `[min, max]`. The step grows by
/// powers of ten until at most `MAX_TICKS` fit.
pub fn value_ticks(min: f64, max: f64, step: f64) -> Vec<Tick> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || max < min || !(max - min).is_finite() {
        return Vec::new();
    }
    let mut step = step;
    while (max - min) / step > MAX_TICKS as f64 {
        step *= 10.0;
    }
    if !step.is_finite() {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            Tick { at: v, label: format!("{v:.0}") }
        })
        .collect()
}
