use crate::constants::SPEEDBAR_SETTINGS;

/// Manufacturer polar data for a glider, one sample per speedbar setting
/// in the canonical order: Min Sink, Trim, 1/3 Bar, 2/3 Bar, Full Bar.
pub trait GliderProperties {
    fn name(&self) -> &str;
    fn velocity_kmh(&self) -> [f64; SPEEDBAR_SETTINGS];
    fn sink_rate_ms(&self) -> [f64; SPEEDBAR_SETTINGS];
}
