//! Reading push loop.
//!
//! Periodically generates a reading per simulated device and posts it to
//! the backend ingest endpoint. Transport errors are logged and the loop
//! keeps running; the simulator never gives up on a flaky backend.

use std::time::Duration;

use serde::Deserialize;

use crate::generator::{generate_reading, DEVICES};

/// Per-request timeout for the ingest POST.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The slice of the ingest response the simulator cares about.
#[derive(Debug, Deserialize)]
struct IngestResponse {
    alerts: Vec<AlertSummary>,
}

#[derive(Debug, Deserialize)]
struct AlertSummary {
    alert_kind: String,
    message: String,
}

/// Run the generate-and-push loop indefinitely.
pub async fn run(api_url: &str, interval: Duration) {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;

        for (device_id, location) in DEVICES {
            let reading = generate_reading(device_id, location);

            match client.post(api_url).json(&reading).send().await {
                Ok(response) if response.status().is_success() => {
                    match response.json::<IngestResponse>().await {
                        Ok(body) if body.alerts.is_empty() => {
                            tracing::info!(
                                device = device_id,
                                temperature = reading.temperature,
                                humidity = reading.humidity,
                                motion = reading.motion,
                                "Reading accepted, no alerts"
                            );
                        }
                        Ok(body) => {
                            for alert in &body.alerts {
                                tracing::warn!(
                                    device = device_id,
                                    kind = %alert.alert_kind,
                                    message = %alert.message,
                                    "Alert fired"
                                );
                            }
                        }
                        Err(e) => {
                            tracing::error!(device = device_id, error = %e, "Malformed ingest response");
                        }
                    }
                }
                Ok(response) => {
                    tracing::error!(
                        device = device_id,
                        status = %response.status(),
                        "Server rejected reading"
                    );
                }
                Err(e) => {
                    tracing::error!(device = device_id, error = %e, "Failed to send reading");
                }
            }
        }
    }
}
