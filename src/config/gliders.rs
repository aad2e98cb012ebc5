use crate::constants::SPEEDBAR_SETTINGS;
use crate::models::glider::GliderProperties;

/// EN-A school wing: slow, flat polar with little to gain on bar.
pub struct SchoolWing;

impl SchoolWing {
    pub const VELOCITY_KMH: [f64; SPEEDBAR_SETTINGS] = [34.0, 37.0, 42.0, 46.0, 50.0];
    pub const SINK_RATE_MS: [f64; SPEEDBAR_SETTINGS] = [-1.1, -1.2, -1.6, -2.1, -2.8];
}

impl GliderProperties for SchoolWing {
    fn name(&self) -> &str {
        "School Wing (EN-A)"
    }

    fn velocity_kmh(&self) -> [f64; SPEEDBAR_SETTINGS] {
        Self::VELOCITY_KMH
    }

    fn sink_rate_ms(&self) -> [f64; SPEEDBAR_SETTINGS] {
        Self::SINK_RATE_MS
    }
}

/// EN-C sport wing: higher trim speed and a usable top end.
pub struct SportWing;

impl SportWing {
    pub const VELOCITY_KMH: [f64; SPEEDBAR_SETTINGS] = [36.0, 40.0, 47.0, 53.0, 58.0];
    pub const SINK_RATE_MS: [f64; SPEEDBAR_SETTINGS] = [-1.0, -1.1, -1.4, -1.8, -2.4];
}

impl GliderProperties for SportWing {
    fn name(&self) -> &str {
        "Sport Wing (EN-C)"
    }

    fn velocity_kmh(&self) -> [f64; SPEEDBAR_SETTINGS] {
        Self::VELOCITY_KMH
    }

    fn sink_rate_ms(&self) -> [f64; SPEEDBAR_SETTINGS] {
        Self::SINK_RATE_MS
    }
}
