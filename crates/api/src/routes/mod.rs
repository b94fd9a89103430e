pub mod alerts;
pub mod health;
pub mod readings;
pub mod root;

use axum::Router;
use serde::Deserialize;

use crate::state::AppState;

/// Default number of rows returned by listing endpoints.
const DEFAULT_LIMIT: i64 = 50;
/// Upper bound on `?limit=`.
const MAX_LIMIT: i64 = 500;

/// Query parameters shared by the listing endpoints
/// (`?device_id=&limit=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub device_id: Option<String>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// The effective limit, clamped to `1..=500` (default 50).
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /readings        POST ingest a reading, GET list readings
/// /alerts          GET list alerts
/// /email-log       GET reconstructed records of sent alert emails
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(readings::router())
        .merge(alerts::router())
}
