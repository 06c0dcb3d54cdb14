// File: crates/bp-core/src/series.rs
// Summary: Series model for the blood-pressure floating bars and the pulse line.

use serde::Serialize;

use crate::theme::Rgba;
use crate::types::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesType {
    FloatingBar, // (t, low, high) spans; diastolic to systolic
    Line,        // (t, y) polyline
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub data_bars: Vec<(Millis, f64, f64)>, // used by FloatingBar
    pub data_xy: Vec<(Millis, f64)>,        // used by Line
    pub colors: Vec<Rgba>,                  // one per point; a single entry colors the whole series
}

impl Series {
    pub fn floating_bars(name: impl Into<String>, bars: Vec<(Millis, f64, f64)>, colors: Vec<Rgba>) -> Self {
        Self { name: name.into(), series_type: SeriesType::FloatingBar, data_bars: bars, data_xy: Vec::new(), colors }
    }

    pub fn line(name: impl Into<String>, data: Vec<(Millis, f64)>, color: Rgba) -> Self {
        Self { name: name.into(), series_type: SeriesType::Line, data_bars: Vec::new(), data_xy: data, colors: vec![color] }
    }

    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::FloatingBar => self.data_bars.len(),
            SeriesType::Line => self.data_xy.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Color of point `i`, falling back to the series color.
    pub fn color_at(&self, i: usize) -> Option<Rgba> {
        self.colors.get(i).or_else(|| self.colors.first()).copied()
    }
}
