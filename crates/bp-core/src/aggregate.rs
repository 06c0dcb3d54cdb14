// File: crates/bp-core/src/aggregate.rs
// Summary: Median merge of a burst of readings submitted together, with pre/post validation.

use crate::error::AggregateError;
use crate::limits::{validate, Triple};

/// Median of one column. Even counts average the two central values, rounding half away from zero.
pub fn median_of(values: &mut [i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let n = values.len();
    if n % 2 == 1 {
        Some(values[n / 2])
    } else {
        let sum = values[n / 2 - 1] as f64 + values[n / 2] as f64;
        Some((sum / 2.0).round() as i32)
    }
}

/// Collapse `triples` into one reading by per-field median.
///
/// Every input is validated first; the merged result is validated again before it is returned.
pub fn median_merge(triples: &[Triple]) -> Result<Triple, AggregateError> {
    if triples.is_empty() {
        return Err(AggregateError::Empty);
    }
    for (index, t) in triples.iter().enumerate() {
        validate(t).map_err(|source| AggregateError::Reading { index, source })?;
    }

    let mut sys: Vec<i32> = triples.iter().map(|t| t.sys).collect();
    let mut dia: Vec<i32> = triples.iter().map(|t| t.dia).collect();
    let mut pulse: Vec<i32> = triples.iter().map(|t| t.pulse).collect();

    let merged = Triple {
        sys: median_of(&mut sys).ok_or(AggregateError::Empty)?,
        dia: median_of(&mut dia).ok_or(AggregateError::Empty)?,
        pulse: median_of(&mut pulse).ok_or(AggregateError::Empty)?,
    };
    validate(&merged).map_err(|source| AggregateError::Merged { source })?;

    tracing::debug!(count = triples.len(), ?merged, "merged readings");
    Ok(merged)
}

/// Parse a free-text submission `"SYS DIA PULSE [SYS DIA PULSE ...]"` and merge it.
pub fn parse_line(line: &str) -> Result<Triple, AggregateError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| AggregateError::NotANumber { token: token.to_string() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() || values.len() % 3 != 0 {
        return Err(AggregateError::BadArity(values.len()));
    }
    let triples: Vec<Triple> = values
        .chunks_exact(3)
        .map(|c| Triple::new(c[0], c[1], c[2]))
        .collect();
    median_merge(&triples)
}
