pub mod config;
pub mod constants;
pub mod models;
pub mod physics;

pub use models::glider::GliderProperties;
pub use models::polar::{GlidePolar, Speedbar};
pub use models::polar_errors::{IndexError, ValidationError};
pub use physics::maccready::{
    speed_to_fly, speed_to_fly_batch, time_between_thermals, SpeedToFlyOutcome, SpeedToFlyResult,
};
pub use physics::maccready_errors::{ComputationError, SpeedToFlyError};
