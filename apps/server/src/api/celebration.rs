use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use matchboard_core::CelebrationStatus;

use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Whether a celebration is running, and for which pairing. Lets a page
/// that loads mid-celebration catch up without waiting for the next event.
async fn celebration_status(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CelebrationStatus>> {
    Ok(Json(state.sequencer.status()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/celebration", get(celebration_status))
}
