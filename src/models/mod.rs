pub mod glider;
pub mod polar;
pub mod polar_errors;

pub use glider::GliderProperties;
pub use polar::{GlidePolar, Speedbar};
