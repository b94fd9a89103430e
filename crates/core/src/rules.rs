//! Rule evaluation engine for sensor readings.
//!
//! Pure logic — no database access. The caller is responsible for fetching
//! the reading and thresholds and passing them in, along with the current
//! hour for the motion-at-night rule.

use serde::{Deserialize, Serialize};

use crate::night::is_night;

/// The kind of rule that fired for a reading.
///
/// This is a closed set: each kind maps to exactly one rule and one message
/// template, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    /// Temperature strictly above the high threshold.
    HighTemp,
    /// Humidity strictly outside the [low, high] band.
    Humidity,
    /// Motion reported while the current hour is inside the night window.
    MotionNight,
}

impl AlertKind {
    /// Canonical string form, as persisted and rendered in notifications.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::HighTemp => "HIGH_TEMP",
            AlertKind::Humidity => "HUMIDITY",
            AlertKind::MotionNight => "MOTION_NIGHT",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The core's read-only view of one sensor reading.
#[derive(Debug, Clone)]
pub struct SensorSample<'a> {
    pub device_id: &'a str,
    pub location: &'a str,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    pub motion: bool,
}

/// A fired rule before persistence: the kind plus the human-readable message.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertIntent {
    pub kind: AlertKind,
    pub message: String,
}

/// Threshold and night-window configuration for rule evaluation.
#[derive(Debug, Clone)]
pub struct AlertThresholds {
    /// HIGH_TEMP fires strictly above this value (°C).
    pub temp_high: f64,
    /// HUMIDITY fires strictly below this value (%).
    pub humidity_low: f64,
    /// HUMIDITY fires strictly above this value (%).
    pub humidity_high: f64,
    /// First hour of the night window (inclusive).
    pub night_start_hour: u32,
    /// End hour of the night window (exclusive).
    pub night_end_hour: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temp_high: 28.0,
            humidity_low: 30.0,
            humidity_high: 70.0,
            night_start_hour: 22,
            night_end_hour: 6,
        }
    }
}

/// Evaluate one reading against the fixed rule set.
///
/// Rules are checked independently and in a fixed order (HIGH_TEMP,
/// HUMIDITY, MOTION_NIGHT), so a single reading may produce zero to three
/// intents and downstream consumers see a deterministic ordering.
///
/// `hour_now` is the hour of day at *evaluation time*, not the reading's
/// own timestamp; the motion rule is gated on when the reading is
/// processed. Comparisons are strict: a value exactly at a threshold does
/// not fire.
pub fn evaluate(
    sample: &SensorSample<'_>,
    thresholds: &AlertThresholds,
    hour_now: u32,
) -> Vec<AlertIntent> {
    let mut intents = Vec::new();

    if sample.temperature > thresholds.temp_high {
        intents.push(AlertIntent {
            kind: AlertKind::HighTemp,
            message: format!(
                "High temperature {:.1}°C at {} ({})",
                sample.temperature, sample.location, sample.device_id
            ),
        });
    }

    if sample.humidity < thresholds.humidity_low || sample.humidity > thresholds.humidity_high {
        intents.push(AlertIntent {
            kind: AlertKind::Humidity,
            message: format!(
                "Abnormal humidity {:.1}% at {} ({})",
                sample.humidity, sample.location, sample.device_id
            ),
        });
    }

    if sample.motion && is_night(hour_now, thresholds.night_start_hour, thresholds.night_end_hour)
    {
        intents.push(AlertIntent {
            kind: AlertKind::MotionNight,
            message: format!(
                "Motion detected at night at {} ({})",
                sample.location, sample.device_id
            ),
        });
    }

    intents
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
