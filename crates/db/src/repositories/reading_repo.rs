//! Repository for the `readings` table.

use sqlx::PgPool;

use crate::models::reading::{CreateReading, Reading};

/// Column list for `readings` queries.
const COLUMNS: &str = "id, device_id, location, temperature, humidity, motion, created_at";

/// Provides CRUD operations for sensor readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a reading, returning the stored row with its assigned
    /// identity and creation timestamp.
    pub async fn create(pool: &PgPool, dto: &CreateReading) -> Result<Reading, sqlx::Error> {
        let query = format!(
            "INSERT INTO readings (device_id, location, temperature, humidity, motion) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(&dto.device_id)
            .bind(&dto.location)
            .bind(dto.temperature)
            .bind(dto.humidity)
            .bind(dto.motion)
            .fetch_one(pool)
            .await
    }

    /// List readings, newest first, optionally filtered by device.
    pub async fn list(
        pool: &PgPool,
        device_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Reading>, sqlx::Error> {
        let filter = if device_id.is_some() {
            "WHERE device_id = $2"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM readings {filter} \
             ORDER BY id DESC \
             LIMIT $1"
        );
        let mut q = sqlx::query_as::<_, Reading>(&query).bind(limit);
        if let Some(device_id) = device_id {
            q = q.bind(device_id);
        }
        q.fetch_all(pool).await
    }
}
