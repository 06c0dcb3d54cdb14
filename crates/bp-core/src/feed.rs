// File: crates/bp-core/src/feed.rs
// Summary: Decoding of the reading feed (JSON array or NDJSON lines) with lenient value coercion.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ChartError;
use crate::rows::Reading;

pub(crate) fn nan() -> f64 {
    f64::NAN
}

/// Accept a JSON number or a numeric string; anything else becomes NaN.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// Accept a JSON string; anything else becomes an empty (unparseable) timestamp.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Decode a JSON array of readings. Entries that are not objects are skipped.
pub fn parse_feed(json: &str) -> Result<Vec<Reading>, ChartError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let total = entries.len();
    let readings: Vec<Reading> = entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    if readings.len() < total {
        tracing::debug!(skipped = total - readings.len(), "skipped non-object feed entries");
    }
    Ok(readings)
}

/// Decode newline-delimited JSON. Blank and undecodable lines are skipped.
pub fn parse_ndjson(text: &str) -> Vec<Reading> {
    let mut skipped = 0usize;
    let readings: Vec<Reading> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match serde_json::from_str::<Reading>(line) {
            Ok(r) => Some(r),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        tracing::debug!(skipped, "skipped undecodable ndjson lines");
    }
    readings
}
