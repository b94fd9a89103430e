use std::sync::Arc;

use sentra_alerts::AlertPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sentra_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The evaluate → persist → notify pipeline.
    pub pipeline: Arc<AlertPipeline>,
}
