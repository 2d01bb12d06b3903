use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use matchboard_marketplace::{ListingId, OfferRecord, WishRecord};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingStatus {
    revision: u64,
    refreshed_at: Option<DateTime<Utc>>,
    wish_count: usize,
    offer_count: usize,
}

/// Wishes from the latest snapshot, newest first.
async fn list_wishes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WishRecord>>> {
    Ok(Json(state.listing_store.wishes()))
}

/// Offers from the latest snapshot, newest first.
async fn list_offers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<OfferRecord>>> {
    Ok(Json(state.listing_store.offers()))
}

async fn get_wish(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ListingId>,
) -> ApiResult<Json<WishRecord>> {
    state
        .listing_store
        .find_wish(id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn get_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ListingId>,
) -> ApiResult<Json<OfferRecord>> {
    state
        .listing_store
        .find_offer(id)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Snapshot metadata without the record bodies.
async fn listing_status(State(state): State<Arc<AppState>>) -> ApiResult<Json<ListingStatus>> {
    let snapshot = state.listing_store.snapshot();
    Ok(Json(ListingStatus {
        revision: snapshot.revision,
        refreshed_at: snapshot.refreshed_at,
        wish_count: snapshot.wishes.len(),
        offer_count: snapshot.offers.len(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/listings/wishes", get(list_wishes))
        .route("/listings/wishes/{id}", get(get_wish))
        .route("/listings/offers", get(list_offers))
        .route("/listings/offers/{id}", get(get_offer))
        .route("/listings/status", get(listing_status))
}
