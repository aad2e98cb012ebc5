pub mod maccready;
pub mod maccready_errors;

pub use maccready::{speed_to_fly, speed_to_fly_batch, time_between_thermals};
