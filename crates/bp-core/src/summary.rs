// File: crates/bp-core/src/summary.rs
// Summary: Daily summary table (one line per date with its morning and evening reading).

use serde::Serialize;

use crate::clock::CalendarDate;
use crate::highlight::group_by_day;
use crate::rows::Row;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: CalendarDate,
    pub morning: Option<Row>,
    pub evening: Option<Row>,
}

impl DaySummary {
    pub fn morning_time(&self) -> Option<&str> {
        self.morning.as_ref().map(Row::clock_time)
    }

    pub fn evening_time(&self) -> Option<&str> {
        self.evening.as_ref().map(Row::clock_time)
    }

    pub fn morning_bp(&self) -> Option<String> {
        self.morning.as_ref().map(bp_label)
    }

    pub fn evening_bp(&self) -> Option<String> {
        self.evening.as_ref().map(bp_label)
    }
}

/// `SYS/DIA` as whole numbers.
pub fn bp_label(row: &Row) -> String {
    format!("{:.0}/{:.0}", row.sys, row.dia)
}

/// One entry per date present in `rows`, ascending, using the chart's highlight windows.
pub fn daily_summary(rows: &[Row]) -> Vec<DaySummary> {
    group_by_day(rows)
        .into_iter()
        .map(|day| DaySummary {
            date: day.date,
            morning: day.morning().cloned(),
            evening: day.evening().cloned(),
        })
        .collect()
}
