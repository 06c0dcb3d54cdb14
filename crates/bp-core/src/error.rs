// File: crates/bp-core/src/error.rs
// Summary: Error taxonomy for renders and for ingestion-time aggregation.

use thiserror::Error;

use crate::limits::ValidationError;

/// Conditions that make a whole render impossible. Row-level problems never show up here;
/// the normalizer drops those rows.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no valid records to chart ({total} readings supplied)")]
    NoValidRecords { total: usize },

    #[error("chart container '{container}' not found")]
    MissingTarget { container: String },

    #[error("a render is already in flight for container '{container}'")]
    RenderInFlight { container: String },

    #[error("malformed feed document: {0}")]
    Feed(#[from] serde_json::Error),
}

/// Rejection of a multi-reading submission. Fatal for that submission only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no readings to merge")]
    Empty,

    #[error("input must contain a multiple of 3 values (SYS DIA PULSE), got {0}")]
    BadArity(usize),

    #[error("'{token}' is not a whole number")]
    NotANumber { token: String },

    #[error("reading {index}: {source}")]
    Reading {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("merged reading: {source}")]
    Merged {
        #[source]
        source: ValidationError,
    },
}
