use std::{error::Error, fmt};

/// Malformed or out-of-domain caller input. Detected before any computation
/// proceeds; never recovered internally.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidPolarShape { velocities: usize, sink_rates: usize },
    DegenerateSinkRate { index: usize },
    InvalidThermalStrength(f64),
    NoThermalStrengths,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPolarShape {
                velocities,
                sink_rates,
            } => write!(
                f,
                "polar requires 5 velocity and 5 sink-rate samples, got {} and {}",
                velocities, sink_rates
            ),
            ValidationError::DegenerateSinkRate { index } => {
                write!(f, "sink rate at setting index {} is zero", index)
            }
            ValidationError::InvalidThermalStrength(t) => {
                write!(f, "thermal strength must be positive, got {} m/s", t)
            }
            ValidationError::NoThermalStrengths => {
                write!(f, "at least one thermal strength is required")
            }
        }
    }
}

impl Error for ValidationError {}

/// Out-of-range lookup against the fixed five-setting label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    InvalidSettingIndex(usize),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidSettingIndex(i) => {
                write!(f, "speedbar setting index {} is out of range 0..5", i)
            }
        }
    }
}

impl Error for IndexError {}
