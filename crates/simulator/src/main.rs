//! `sentra-simulator` -- synthetic sensor traffic generator.
//!
//! Emits a randomized reading per simulated device on a fixed cadence and
//! posts each one to the backend ingest endpoint.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                                  |
//! |-----------------------|----------|------------------------------------------|
//! | `API_URL`             | no       | `http://127.0.0.1:9000/api/readings`     |
//! | `SEND_INTERVAL_SECS`  | no       | `5`                                      |

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentra_simulator::sender;

/// Default interval between generation + push cycles.
const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Default ingest endpoint on a locally running backend.
const DEFAULT_API_URL: &str = "http://127.0.0.1:9000/api/readings";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentra_simulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

    let interval_secs: u64 = std::env::var("SEND_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    tracing::info!(
        api_url = %api_url,
        interval_secs,
        device_count = sentra_simulator::generator::DEVICES.len(),
        "Starting sentra-simulator",
    );

    sender::run(&api_url, Duration::from_secs(interval_secs)).await;
}
