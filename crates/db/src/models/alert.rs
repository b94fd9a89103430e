//! Alert entity model.

use serde::Serialize;
use sentra_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `alerts` table: one fired rule against one reading.
///
/// `notified` is the only field ever mutated after creation, and only
/// from `false` to `true` (a successful delivery is never reset).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub device_id: String,
    pub location: String,
    pub alert_kind: String,
    pub message: String,
    pub notified: bool,
    pub created_at: Timestamp,
}
