//! Sensor reading entity model and ingest DTO.

use serde::{Deserialize, Serialize};
use sentra_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `readings` table.
///
/// Immutable once created; the server assigns `id` and `created_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub device_id: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub motion: bool,
    pub created_at: Timestamp,
}

/// DTO for ingesting a new reading.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReading {
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub motion: bool,
}
