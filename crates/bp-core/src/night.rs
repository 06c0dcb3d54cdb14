// File: crates/bp-core/src/night.rs
// Summary: Night shading intervals (18:00 to 06:00 next day) for every date that has readings.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::rows::Row;
use crate::types::{Millis, MS_PER_HOUR, NIGHT_END_HOUR, NIGHT_START_HOUR};

/// Half-open interval `[start, end)` on the local-clock timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NightShadowRange {
    pub start: Millis,
    pub end: Millis,
}

impl NightShadowRange {
    pub fn contains(&self, t: Millis) -> bool {
        t >= self.start && t < self.end
    }
}

/// Two ranges per date, ascending: the evening of the date and the early morning after it,
/// both anchored on that date's midnight. Dates whose midnight does not parse are skipped.
pub fn night_shadows(rows: &[Row]) -> Vec<NightShadowRange> {
    let dates: BTreeSet<_> = rows.iter().filter_map(Row::date).collect();

    let mut out = Vec::with_capacity(dates.len() * 2);
    for date in dates {
        let Some(day_start) = date.midnight_millis() else {
            tracing::debug!(%date, "skipping night shadow for unparseable date");
            continue;
        };
        out.push(NightShadowRange {
            start: day_start + NIGHT_START_HOUR * MS_PER_HOUR,
            end: day_start + 24 * MS_PER_HOUR,
        });
        out.push(NightShadowRange {
            start: day_start + 24 * MS_PER_HOUR,
            end: day_start + NIGHT_END_HOUR * MS_PER_HOUR,
        });
    }
    out
}
