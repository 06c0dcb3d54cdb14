// File: crates/bp-core/src/lib.rs
// Summary: Core library entry point; exports the local-clock timeline, grouping, and chart model API.

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod clock;
pub mod error;
pub mod feed;
pub mod highlight;
pub mod host;
pub mod limits;
pub mod night;
pub mod rows;
pub mod series;
pub mod summary;
pub mod theme;
pub mod types;
pub mod view;

pub use aggregate::{median_merge, parse_line};
pub use axis::Axis;
pub use chart::{build_chart, ChartModel, ChartOptions};
pub use clock::{format_local_clock, parse_local_clock, CalendarDate};
pub use error::{AggregateError, ChartError};
pub use feed::{parse_feed, parse_ndjson};
pub use highlight::{select_highlights, Highlight, HighlightSets};
pub use host::{ChartHost, RenderTicket};
pub use limits::Triple;
pub use night::{night_shadows, NightShadowRange};
pub use rows::{normalize, Reading, Row};
pub use series::{Series, SeriesType};
pub use summary::{daily_summary, DaySummary};
pub use theme::Theme;
pub use view::{compute_bounds, Bounds, ZoomWindow};
