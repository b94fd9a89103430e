//! The alert pipeline: evaluate a reading, persist fired alerts, dispatch
//! notifications, and persist each delivery outcome.

use std::sync::Arc;

use chrono::Timelike;
use sentra_core::rules::{evaluate, AlertThresholds, SensorSample};
use sentra_db::models::{Alert, Reading};
use sentra_db::repositories::AlertRepo;
use sentra_db::DbPool;

use crate::notify::{DispatchOutcome, Notifier};

/// Processes readings end to end.
///
/// Construction wires in the pool, an immutable thresholds snapshot, and a
/// [`Notifier`]; nothing is read from ambient global state, so tests can
/// inject their own configuration and a stub notifier.
pub struct AlertPipeline {
    pool: DbPool,
    thresholds: AlertThresholds,
    notifier: Arc<dyn Notifier>,
}

impl AlertPipeline {
    pub fn new(pool: DbPool, thresholds: AlertThresholds, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            pool,
            thresholds,
            notifier,
        }
    }

    /// Evaluate one reading and return every alert it produced, in rule
    /// order, regardless of delivery outcome.
    ///
    /// Each fired rule is its own unit: the alert is durably created
    /// before the dispatch attempt, and a failed dispatch for one alert
    /// does not affect the next. Only persistence errors propagate;
    /// notification failures are absorbed into the stored delivery state.
    ///
    /// The motion-at-night rule is gated on the wall-clock hour at
    /// evaluation time, not the reading's recorded timestamp.
    pub async fn process(&self, reading: &Reading) -> Result<Vec<Alert>, sqlx::Error> {
        let sample = SensorSample {
            device_id: &reading.device_id,
            location: &reading.location,
            temperature: reading.temperature,
            humidity: reading.humidity,
            motion: reading.motion,
        };
        let hour_now = chrono::Utc::now().hour();
        let intents = evaluate(&sample, &self.thresholds, hour_now);

        if intents.is_empty() {
            tracing::info!(
                device = %reading.device_id,
                location = %reading.location,
                temperature = reading.temperature,
                humidity = reading.humidity,
                motion = reading.motion,
                "Reading OK"
            );
            return Ok(Vec::new());
        }

        let mut alerts = Vec::with_capacity(intents.len());
        for intent in intents {
            let mut alert = AlertRepo::create(
                &self.pool,
                &reading.device_id,
                &reading.location,
                intent.kind,
                &intent.message,
            )
            .await?;

            tracing::warn!(kind = %alert.alert_kind, message = %alert.message, "ALERT");

            if self.notifier.notify(&alert).await == DispatchOutcome::Sent {
                AlertRepo::mark_notified(&self.pool, alert.id).await?;
                alert.notified = true;
            }

            alerts.push(alert);
        }

        Ok(alerts)
    }
}
