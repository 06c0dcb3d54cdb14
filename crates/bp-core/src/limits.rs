// File: crates/bp-core/src/limits.rs
// Summary: Physiological range checks for a single systolic/diastolic/pulse triple.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SYS_RANGE: RangeInclusive<i32> = 70..=250;
pub const DIA_RANGE: RangeInclusive<i32> = 40..=150;
pub const PULSE_RANGE: RangeInclusive<i32> = 30..=220;

/// One submitted measurement in whole units (mmHg, mmHg, bpm).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub sys: i32,
    pub dia: i32,
    pub pulse: i32,
}

impl Triple {
    pub const fn new(sys: i32, dia: i32, pulse: i32) -> Self {
        Self { sys, dia, pulse }
    }
}

impl From<[i32; 3]> for Triple {
    fn from([sys, dia, pulse]: [i32; 3]) -> Self {
        Self { sys, dia, pulse }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Systolic,
    Diastolic,
    Pulse,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Systolic => "systolic",
            Field::Diastolic => "diastolic",
            Field::Pulse => "pulse",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} {value} out of range {min}-{max}")]
    OutOfRange { field: Field, value: i32, min: i32, max: i32 },

    #[error("diastolic {dia} must be below systolic {sys}")]
    DiastolicNotBelowSystolic { sys: i32, dia: i32 },
}

fn check(field: Field, value: i32, range: &RangeInclusive<i32>) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, value, min: *range.start(), max: *range.end() })
    }
}

/// First failing post-condition of `t`, checked in field order then cross-field.
pub fn validate(t: &Triple) -> Result<(), ValidationError> {
    check(Field::Systolic, t.sys, &SYS_RANGE)?;
    check(Field::Diastolic, t.dia, &DIA_RANGE)?;
    check(Field::Pulse, t.pulse, &PULSE_RANGE)?;
    if t.dia >= t.sys {
        return Err(ValidationError::DiastolicNotBelowSystolic { sys: t.sys, dia: t.dia });
    }
    Ok(())
}
