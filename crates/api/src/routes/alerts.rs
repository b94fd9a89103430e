//! Alert and email-log listing.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use sentra_alerts::EmailNotifier;
use sentra_core::types::{DbId, Timestamp};
use sentra_db::models::Alert;
use sentra_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::routes::ListParams;
use crate::state::AppState;

/// One reconstructed alert email, as exposed by the email-log endpoint.
///
/// Emails are not stored; records are rebuilt from alerts that were
/// successfully notified, using the same subject/body rendering the
/// dispatcher used.
#[derive(Serialize)]
pub struct EmailRecord {
    pub id: DbId,
    pub to_address: String,
    pub subject: String,
    pub body: String,
    pub sent_at: Timestamp,
}

/// GET /api/alerts -- list alerts, newest first.
async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Alert>>> {
    let alerts = AlertRepo::list(&state.pool, params.device_id.as_deref(), params.limit()).await?;
    Ok(Json(alerts))
}

/// GET /api/email-log -- reconstructed records of sent alert emails.
async fn list_email_log(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<EmailRecord>>> {
    let to_address = state
        .config
        .email
        .as_ref()
        .map(|email| email.to_address.clone())
        .unwrap_or_else(|| "(not configured)".to_string());

    let alerts = AlertRepo::list_notified(&state.pool, params.limit()).await?;
    let records = alerts
        .into_iter()
        .map(|alert| EmailRecord {
            id: alert.id,
            to_address: to_address.clone(),
            subject: EmailNotifier::subject(&alert),
            body: EmailNotifier::body(&alert),
            sent_at: alert.created_at,
        })
        .collect();

    Ok(Json(records))
}

/// Mount alert routes under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(list_alerts))
        .route("/email-log", get(list_email_log))
}
