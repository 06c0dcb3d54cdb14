// File: crates/bp-core/src/chart.rs
// Summary: Render options and the chart model assembled from a reading feed.

use serde::{Deserialize, Serialize};

use crate::axis::{time_ticks, value_ticks, Axis, Tick};
use crate::clock::format_local_clock;
use crate::error::ChartError;
use crate::highlight::{select_highlights, Highlight, HighlightSets};
use crate::night::{night_shadows, NightShadowRange};
use crate::rows::{normalize, Reading, Row};
use crate::series::{Series, SeriesType};
use crate::theme::{self, Theme};
use crate::view::{compute_bounds, ZoomWindow};

/// Render toggles. Deserializes from a settings blob; missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Include the pulse line series.
    pub show_pulse: bool,
    /// Keep only the highlighted morning/evening readings.
    pub me_only: bool,
    /// Emit night shading ranges.
    pub night_shadows: bool,
    /// Zoom window read from the previous render of the same container.
    pub previous_zoom: Option<ZoomWindow>,
    /// Palette name, see [`theme::find`].
    pub theme: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_pulse: true,
            me_only: false,
            night_shadows: true,
            previous_zoom: None,
            theme: "light".to_string(),
        }
    }
}

/// Per-point metadata parallel to the BP series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointInfo {
    pub iso_text: String,
    pub highlight: Highlight,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartModel {
    pub series: Vec<Series>,
    pub points: Vec<PointInfo>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub night_shadows: Vec<NightShadowRange>,
    pub zoom: ZoomWindow,
    pub highlights: HighlightSets,
    /// `me_only` was requested but would have removed every row, so it was not applied.
    pub me_only_fallback: bool,
    pub theme: Theme,
}

impl ChartModel {
    pub fn bp_series(&self) -> Option<&Series> {
        self.series.iter().find(|s| s.series_type == SeriesType::FloatingBar)
    }

    pub fn pulse_series(&self) -> Option<&Series> {
        self.series.iter().find(|s| s.series_type == SeriesType::Line)
    }

    /// Tooltip text for point `i`: header line plus values.
    pub fn tooltip(&self, i: usize) -> Option<String> {
        let bars = self.bp_series()?;
        let &(t, dia, sys) = bars.data_bars.get(i)?;
        let mut text = format!("{}\n{sys:.0}/{dia:.0} mmHg", format_local_clock(t));
        if let Some(&(_, pulse)) = self.pulse_series().and_then(|p| p.data_xy.get(i)) {
            text.push_str(&format!("\n{pulse:.0} bpm"));
        }
        Some(text)
    }
}

/// Apply the morning/evening-only filter. Returns the rows to plot and whether the
/// filter had to be dropped because it matched nothing.
pub fn filter_me_only(rows: Vec<Row>, highlights: &HighlightSets, me_only: bool) -> (Vec<Row>, bool) {
    if !me_only {
        return (rows, false);
    }
    let kept: Vec<Row> = rows.iter().filter(|r| highlights.contains(&r.iso_text)).cloned().collect();
    if kept.is_empty() {
        tracing::debug!("morning/evening filter matched no rows, showing all rows");
        (rows, true)
    } else {
        (kept, false)
    }
}

/// Build the chart model for one render of `readings`.
pub fn build_chart(readings: &[Reading], opts: &ChartOptions) -> Result<ChartModel, ChartError> {
    let rows = normalize(readings)?;
    build_chart_from_rows(rows, opts)
}

/// Same as [`build_chart`] for rows that are already normalized.
pub fn build_chart_from_rows(rows: Vec<Row>, opts: &ChartOptions) -> Result<ChartModel, ChartError> {
    let theme = theme::find(&opts.theme);
    let highlights = select_highlights(&rows);
    let shadows = if opts.night_shadows { night_shadows(&rows) } else { Vec::new() };

    let (plotted, me_only_fallback) = filter_me_only(rows.clone(), &highlights, opts.me_only);
    let bounds = compute_bounds(&rows, &plotted, opts.previous_zoom)?;

    let mut bars = Vec::with_capacity(plotted.len());
    let mut colors = Vec::with_capacity(plotted.len());
    let mut points = Vec::with_capacity(plotted.len());
    for r in &plotted {
        let highlight = highlights.classify(&r.iso_text);
        colors.push(match highlight {
            Highlight::Morning => theme.morning,
            Highlight::Evening => theme.evening,
            Highlight::None => theme.neutral,
        });
        bars.push((r.local_millis, r.dia, r.sys));
        points.push(PointInfo { iso_text: r.iso_text.clone(), highlight });
    }

    let mut series = vec![Series::floating_bars("Blood Pressure", bars, colors)];
    if opts.show_pulse {
        let pulse = plotted.iter().map(|r| (r.local_millis, r.pulse)).collect();
        series.push(Series::line("Pulse", pulse, theme.pulse_line));
    }

    tracing::debug!(
        rows = rows.len(),
        plotted = plotted.len(),
        morning = highlights.morning.len(),
        evening = highlights.evening.len(),
        shadows = shadows.len(),
        "assembled chart model"
    );

    Ok(ChartModel {
        series,
        points,
        x_axis: Axis::time(bounds.axis_min, bounds.axis_max),
        y_axis: Axis::value(bounds.value_min, bounds.value_max),
        x_ticks: time_ticks(bounds.axis_min, bounds.axis_max),
        y_ticks: value_ticks(bounds.value_min, bounds.value_max, 10.0),
        night_shadows: shadows,
        zoom: bounds.zoom,
        highlights,
        me_only_fallback,
        theme,
    })
}
