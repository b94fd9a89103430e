//! Repository for the `alerts` table.

use sentra_core::types::DbId;
use sentra_core::AlertKind;
use sqlx::PgPool;

use crate::models::alert::Alert;

/// Column list for `alerts` queries.
const COLUMNS: &str = "id, device_id, location, alert_kind, message, notified, created_at";

/// Provides CRUD operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert an alert with `notified = false`, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        device_id: &str,
        location: &str,
        kind: AlertKind,
        message: &str,
    ) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (device_id, location, alert_kind, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(device_id)
            .bind(location)
            .bind(kind.as_str())
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// Mark an alert as successfully notified.
    ///
    /// The flag transitions only from `false` to `true`; there is no
    /// reverse operation.
    pub async fn mark_notified(pool: &PgPool, alert_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE alerts SET notified = true WHERE id = $1")
            .bind(alert_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List alerts, newest first, optionally filtered by device.
    pub async fn list(
        pool: &PgPool,
        device_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        let filter = if device_id.is_some() {
            "WHERE device_id = $2"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM alerts {filter} \
             ORDER BY id DESC \
             LIMIT $1"
        );
        let mut q = sqlx::query_as::<_, Alert>(&query).bind(limit);
        if let Some(device_id) = device_id {
            q = q.bind(device_id);
        }
        q.fetch_all(pool).await
    }

    /// List alerts that were successfully notified, newest first.
    pub async fn list_notified(pool: &PgPool, limit: i64) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE notified = true \
             ORDER BY id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
