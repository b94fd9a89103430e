//! Reading ingestion and listing.

use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use validator::Validate;

use sentra_db::models::{Alert, CreateReading, Reading};
use sentra_db::repositories::ReadingRepo;

use crate::error::AppResult;
use crate::routes::ListParams;
use crate::state::AppState;

/// Response for a successfully ingested reading: the stored reading plus
/// every alert it fired, in rule order.
#[derive(Serialize)]
pub struct ReadingWithAlerts {
    pub reading: Reading,
    pub alerts: Vec<Alert>,
}

/// POST /api/readings -- ingest one reading and run the alert pipeline.
///
/// The reading is persisted first, then evaluated. Delivery failures do
/// not surface here; only a persistence error produces a non-2xx response.
async fn create_reading(
    State(state): State<AppState>,
    Json(payload): Json<CreateReading>,
) -> AppResult<Json<ReadingWithAlerts>> {
    payload.validate()?;

    let reading = ReadingRepo::create(&state.pool, &payload).await?;
    let alerts = state.pipeline.process(&reading).await?;

    Ok(Json(ReadingWithAlerts { reading, alerts }))
}

/// GET /api/readings -- list readings, newest first.
async fn list_readings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Reading>>> {
    let readings =
        ReadingRepo::list(&state.pool, params.device_id.as_deref(), params.limit()).await?;
    Ok(Json(readings))
}

/// Mount reading routes under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/readings", post(create_reading).get(list_readings))
}
