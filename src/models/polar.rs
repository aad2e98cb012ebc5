use crate::constants::{KMH_PER_MS, SPEEDBAR_SETTINGS};
use crate::models::glider::GliderProperties;
use crate::models::polar_errors::{IndexError, ValidationError};
use std::fmt;

/// Canonical speedbar settings, in polar index order 0..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speedbar {
    MinSink,
    Trim,
    OneThirdBar,
    TwoThirdsBar,
    FullBar,
}

impl Speedbar {
    /// Maps a polar index to its setting. Indices outside 0..5 fail rather
    /// than returning a placeholder label.
    pub fn from_index(index: usize) -> Result<Self, IndexError> {
        match index {
            0 => Ok(Speedbar::MinSink),
            1 => Ok(Speedbar::Trim),
            2 => Ok(Speedbar::OneThirdBar),
            3 => Ok(Speedbar::TwoThirdsBar),
            4 => Ok(Speedbar::FullBar),
            _ => Err(IndexError::InvalidSettingIndex(index)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speedbar::MinSink => "Min Sink",
            Speedbar::Trim => "Trim",
            Speedbar::OneThirdBar => "1/3 Bar",
            Speedbar::TwoThirdsBar => "2/3 Bar",
            Speedbar::FullBar => "Full Bar",
        }
    }
}

impl fmt::Display for Speedbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A glider's performance envelope: sink rate against airspeed, sampled at
/// the five canonical speedbar settings. Derived quantities are computed
/// once at construction; the polar is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GlidePolar {
    velocity_kmh: [f64; SPEEDBAR_SETTINGS],
    sink_rate_ms: [f64; SPEEDBAR_SETTINGS],
    velocity_ms: [f64; SPEEDBAR_SETTINGS],
    glide_ratio: [f64; SPEEDBAR_SETTINGS],
}

impl GlidePolar {
    /// Builds a polar from raw samples: velocities in km/h and signed sink
    /// rates in m/s (negative = descending), index-aligned per setting.
    /// Both slices must hold exactly one sample per speedbar setting and no
    /// sink rate may be zero.
    pub fn new(velocity_kmh: &[f64], sink_rate_ms: &[f64]) -> Result<Self, ValidationError> {
        if velocity_kmh.len() != SPEEDBAR_SETTINGS || sink_rate_ms.len() != SPEEDBAR_SETTINGS {
            return Err(ValidationError::InvalidPolarShape {
                velocities: velocity_kmh.len(),
                sink_rates: sink_rate_ms.len(),
            });
        }
        if let Some(index) = sink_rate_ms.iter().position(|s| *s == 0.0) {
            return Err(ValidationError::DegenerateSinkRate { index });
        }

        let mut polar = GlidePolar {
            velocity_kmh: [0.0; SPEEDBAR_SETTINGS],
            sink_rate_ms: [0.0; SPEEDBAR_SETTINGS],
            velocity_ms: [0.0; SPEEDBAR_SETTINGS],
            glide_ratio: [0.0; SPEEDBAR_SETTINGS],
        };
        polar.velocity_kmh.copy_from_slice(velocity_kmh);
        polar.sink_rate_ms.copy_from_slice(sink_rate_ms);
        for i in 0..SPEEDBAR_SETTINGS {
            polar.velocity_ms[i] = polar.velocity_kmh[i] / KMH_PER_MS;
            polar.glide_ratio[i] = (polar.velocity_ms[i] / polar.sink_rate_ms[i]).abs();
        }
        Ok(polar)
    }

    pub fn from_glider<T: GliderProperties>(glider: &T) -> Result<Self, ValidationError> {
        Self::new(&glider.velocity_kmh(), &glider.sink_rate_ms())
    }

    // Read-only views for the optimizer and plotting/reporting consumers
    pub fn velocity_kmh(&self) -> &[f64; SPEEDBAR_SETTINGS] {
        &self.velocity_kmh
    }

    pub fn sink_rate_ms(&self) -> &[f64; SPEEDBAR_SETTINGS] {
        &self.sink_rate_ms
    }

    pub fn velocity_ms(&self) -> &[f64; SPEEDBAR_SETTINGS] {
        &self.velocity_ms
    }

    pub fn glide_ratio(&self) -> &[f64; SPEEDBAR_SETTINGS] {
        &self.glide_ratio
    }
}
