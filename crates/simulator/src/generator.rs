//! Synthetic sensor reading generation.

use rand::Rng;
use serde::Serialize;

/// The fixed set of simulated devices: (device id, location).
pub const DEVICES: [(&str, &str); 3] = [
    ("sensor-1", "living_room"),
    ("sensor-2", "bedroom"),
    ("sensor-3", "kitchen"),
];

/// Probability that a generated reading reports motion.
const MOTION_PROBABILITY: f64 = 0.3;

/// Payload posted to the readings endpoint.
#[derive(Debug, Serialize)]
pub struct ReadingPayload {
    pub device_id: &'static str,
    pub location: &'static str,
    pub temperature: f64,
    pub humidity: f64,
    pub motion: bool,
}

/// Generate one random reading for a device.
///
/// Temperature ranges over 20–35 °C and humidity over 25–80 %, wide enough
/// to trip the default thresholds regularly. Metric values are rounded to
/// two decimals, matching what a real sensor would report.
pub fn generate_reading(device_id: &'static str, location: &'static str) -> ReadingPayload {
    let mut rng = rand::rng();

    let temperature: f64 = rng.random_range(20.0..35.0);
    let humidity: f64 = rng.random_range(25.0..80.0);
    let motion = rng.random_bool(MOTION_PROBABILITY);

    ReadingPayload {
        device_id,
        location,
        temperature: (temperature * 100.0).round() / 100.0,
        humidity: (humidity * 100.0).round() / 100.0,
        motion,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
