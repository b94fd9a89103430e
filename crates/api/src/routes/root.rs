use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service banner payload.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub app: String,
}

/// GET / -- service banner.
async fn banner(State(state): State<AppState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "IoT Alert System is running",
        app: state.config.app_name.clone(),
    })
}

/// Mount the root banner route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(banner))
}
