use crate::models::polar_errors::ValidationError;
use std::{error::Error, fmt};

/// Well-formed input that still yields an undefined intermediate during
/// optimization. Surfaced per thermal strength; one failing strength never
/// aborts the rest of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationError {
    ZeroGroundSpeed { velocity_ms: f64, headwind_ms: f64 },
    NegativeGroundSpeed { velocity_ms: f64, headwind_ms: f64 },
    NoValidSpeedToFly { thermal_strength_ms: f64 },
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputationError::ZeroGroundSpeed {
                velocity_ms,
                headwind_ms,
            } => write!(
                f,
                "ground speed is zero: airspeed {} m/s equals headwind {} m/s",
                velocity_ms, headwind_ms
            ),
            ComputationError::NegativeGroundSpeed {
                velocity_ms,
                headwind_ms,
            } => write!(
                f,
                "ground speed is negative: headwind {} m/s exceeds airspeed {} m/s",
                headwind_ms, velocity_ms
            ),
            ComputationError::NoValidSpeedToFly {
                thermal_strength_ms,
            } => write!(
                f,
                "no polar setting yields a finite time to fly for thermal strength {} m/s",
                thermal_strength_ms
            ),
        }
    }
}

impl Error for ComputationError {}

/// Optimizer-level error: either the inputs were out of domain or the
/// computation had no defined answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeedToFlyError {
    Validation(ValidationError),
    Computation(ComputationError),
}

impl fmt::Display for SpeedToFlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedToFlyError::Validation(e) => write!(f, "validation error: {}", e),
            SpeedToFlyError::Computation(e) => write!(f, "computation error: {}", e),
        }
    }
}

impl Error for SpeedToFlyError {}

// Implement `From<T>` conversions for automatic error mapping
impl From<ValidationError> for SpeedToFlyError {
    fn from(err: ValidationError) -> Self {
        SpeedToFlyError::Validation(err)
    }
}

impl From<ComputationError> for SpeedToFlyError {
    fn from(err: ComputationError) -> Self {
        SpeedToFlyError::Computation(err)
    }
}
