use crate::constants::{KMH_PER_MS, REFERENCE_DISTANCE_M, SPEEDBAR_SETTINGS};
use crate::models::polar::GlidePolar;
use crate::models::polar_errors::ValidationError;
use crate::physics::maccready_errors::{ComputationError, SpeedToFlyError};

/// Time to glide a fixed distance and climb back the altitude lost, i.e. the
/// time between the tops of two thermals.
///
/// Glide time is `distance / ground speed`; the climb back takes
/// `glide_time * |sink rate| / thermal strength`, so the total factors as
/// `glide_time * (1 + |sink| / thermal)`.
///
/// Sign convention: `headwind_ms` positive is an opposing wind component and
/// is subtracted from airspeed; pass a tailwind as a negative value. Sink
/// rate may carry either sign; only its magnitude enters the formula.
pub fn time_between_thermals(
    distance_m: f64,
    thermal_strength_ms: f64,
    velocity_ms: f64,
    sink_rate_ms: f64,
    headwind_ms: f64,
) -> Result<f64, SpeedToFlyError> {
    if thermal_strength_ms <= 0.0 {
        return Err(ValidationError::InvalidThermalStrength(thermal_strength_ms).into());
    }
    let ground_speed = velocity_ms - headwind_ms;
    if ground_speed == 0.0 {
        return Err(ComputationError::ZeroGroundSpeed {
            velocity_ms,
            headwind_ms,
        }
        .into());
    }
    if ground_speed < 0.0 {
        return Err(ComputationError::NegativeGroundSpeed {
            velocity_ms,
            headwind_ms,
        }
        .into());
    }
    let glide_time = distance_m / ground_speed;
    Ok(glide_time * (1.0 + sink_rate_ms.abs() / thermal_strength_ms))
}

/// Outcome of one speed-to-fly optimization. Immutable once produced.
///
/// `times_to_fly` stays index-aligned with `velocities_ms`; settings whose
/// ground speed is zero or negative under the given headwind are `None` and
/// never considered for `best_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedToFlyResult {
    pub thermal_strength_ms: f64,
    pub headwind_ms: f64,
    pub velocities_ms: [f64; SPEEDBAR_SETTINGS],
    pub times_to_fly_s: [Option<f64>; SPEEDBAR_SETTINGS],
    pub best_index: usize,
    pub speed_to_fly_ms: f64,
    pub time_to_fly_s: f64,
    pub speed_made_good_kmh: f64,
}

/// Picks the polar setting minimizing the time to the top of the next
/// thermal, for one thermal strength and one headwind.
///
/// Ties between settings go to the lower index (the slower setting). Fails
/// with `NoValidSpeedToFly` when no setting outruns the headwind.
pub fn speed_to_fly(
    polar: &GlidePolar,
    thermal_strength_ms: f64,
    headwind_ms: f64,
) -> Result<SpeedToFlyResult, SpeedToFlyError> {
    if thermal_strength_ms <= 0.0 {
        return Err(ValidationError::InvalidThermalStrength(thermal_strength_ms).into());
    }

    let velocities_ms = *polar.velocity_ms();
    let mut times_to_fly_s = [None; SPEEDBAR_SETTINGS];
    for i in 0..SPEEDBAR_SETTINGS {
        match time_between_thermals(
            REFERENCE_DISTANCE_M,
            thermal_strength_ms,
            velocities_ms[i],
            polar.sink_rate_ms()[i],
            headwind_ms,
        ) {
            Ok(t) => times_to_fly_s[i] = Some(t),
            // Settings the wind makes unflyable drop out of the candidate set
            Err(SpeedToFlyError::Computation(_)) => {}
            Err(e) => return Err(e),
        }
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, time) in times_to_fly_s.iter().enumerate() {
        if let Some(t) = *time {
            // Strict comparison keeps the first index on exact ties
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }
    let (best_index, time_to_fly_s) = best.ok_or(ComputationError::NoValidSpeedToFly {
        thermal_strength_ms,
    })?;

    Ok(SpeedToFlyResult {
        thermal_strength_ms,
        headwind_ms,
        velocities_ms,
        times_to_fly_s,
        best_index,
        speed_to_fly_ms: velocities_ms[best_index],
        time_to_fly_s,
        speed_made_good_kmh: KMH_PER_MS * REFERENCE_DISTANCE_M / time_to_fly_s,
    })
}

/// One batch entry: the strength it was requested for, and either its result
/// or the error that strength produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedToFlyOutcome {
    pub thermal_strength_ms: f64,
    pub result: Result<SpeedToFlyResult, SpeedToFlyError>,
}

/// Runs the optimizer once per requested thermal strength under a single
/// headwind. Entries keep the input order; a failing strength is reported in
/// place and never aborts the others.
pub fn speed_to_fly_batch(
    polar: &GlidePolar,
    thermal_strengths_ms: &[f64],
    headwind_ms: f64,
) -> Result<Vec<SpeedToFlyOutcome>, ValidationError> {
    if thermal_strengths_ms.is_empty() {
        return Err(ValidationError::NoThermalStrengths);
    }
    Ok(thermal_strengths_ms
        .iter()
        .map(|&thermal_strength_ms| SpeedToFlyOutcome {
            thermal_strength_ms,
            result: speed_to_fly(polar, thermal_strength_ms, headwind_ms),
        })
        .collect())
}
