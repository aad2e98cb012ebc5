pub const KMH_PER_MS: f64 = 3.6; // km/h in one m/s
pub const SPEEDBAR_SETTINGS: usize = 5; // Min Sink, Trim, 1/3, 2/3, Full Bar
pub const REFERENCE_DISTANCE_M: f64 = 1000.0; // Glide distance between thermal tops (m)
