use csv::Writer;
use maccready::config::gliders::SportWing;
use maccready::constants::KMH_PER_MS;
use maccready::models::glider::GliderProperties;
use maccready::models::polar::{GlidePolar, Speedbar};
use maccready::physics::maccready::speed_to_fly_batch;
use serde::Serialize;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

#[derive(Serialize)]
struct SpeedToFlyRow {
    thermal_strength_ms: f64,
    headwind_ms: f64,
    best_setting: String,
    speed_to_fly_kmh: f64,
    time_to_fly_s: f64,
    speed_made_good_kmh: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    static GLIDER: SportWing = SportWing;
    let polar = GlidePolar::from_glider(&GLIDER)?;

    // Expected climb rates for a typical flyable day, plus the headwind
    // component along course
    let thermal_strengths_ms = [0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0];
    let headwind_ms = 2.0;

    let outcomes = speed_to_fly_batch(&polar, &thermal_strengths_ms, headwind_ms)?;

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("speed_to_fly.csv"))?;
    let mut writer = Writer::from_writer(file);

    println!("Speed to fly for {}", GLIDER.name());
    println!("Headwind component: {} m/s", headwind_ms);
    println!(
        "{:>12} {:>10} {:>14} {:>14} {:>18}",
        "thermal m/s", "setting", "fly km/h", "time s", "made good km/h"
    );

    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let setting = Speedbar::from_index(result.best_index)?;
                println!(
                    "{:>12.1} {:>10} {:>14.1} {:>14.1} {:>18.1}",
                    result.thermal_strength_ms,
                    setting.label(),
                    result.speed_to_fly_ms * KMH_PER_MS,
                    result.time_to_fly_s,
                    result.speed_made_good_kmh
                );
                writer.serialize(SpeedToFlyRow {
                    thermal_strength_ms: result.thermal_strength_ms,
                    headwind_ms: result.headwind_ms,
                    best_setting: setting.label().to_string(),
                    speed_to_fly_kmh: result.speed_to_fly_ms * KMH_PER_MS,
                    time_to_fly_s: result.time_to_fly_s,
                    speed_made_good_kmh: result.speed_made_good_kmh,
                })?;
            }
            Err(e) => {
                println!(
                    "{:>12.1} {:>10}",
                    outcome.thermal_strength_ms,
                    format!("skipped: {}", e)
                );
            }
        }
    }

    writer.flush()?;
    println!("Wrote output/speed_to_fly.csv");
    Ok(())
}
