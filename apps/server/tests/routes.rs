use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use matchboard_core::MatchPair;
use matchboard_marketplace::{OfferRecord, WishRecord};
use matchboard_server::{api::app_router, build_state, config::Config, AppState};

async fn build_test_router() -> (axum::Router, Arc<AppState>) {
    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state.clone(), &config), state)
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _state) = build_test_router().await;

    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn listings_start_empty_at_revision_zero() {
    let (app, _state) = build_test_router().await;

    let (status, wishes) = get_json(app.clone(), "/api/v1/listings/wishes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wishes, serde_json::json!([]));

    let (status, offers) = get_json(app.clone(), "/api/v1/listings/offers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(offers, serde_json::json!([]));

    let (status, listing_status) = get_json(app, "/api/v1/listings/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing_status["revision"], 0);
    assert!(listing_status["refreshedAt"].is_null());
    assert_eq!(listing_status["wishCount"], 0);
    assert_eq!(listing_status["offerCount"], 0);
}

#[tokio::test]
async fn listings_reflect_the_store() {
    let (app, state) = build_test_router().await;

    let offer = OfferRecord::new(4, "bike, barely used");
    let wish = WishRecord::new(10, "road bike")
        .with_matched_offer(offer.clone())
        .with_match_percentage(92.0);
    state.listing_store.replace(vec![wish], vec![offer]);

    let (status, wishes) = get_json(app.clone(), "/api/v1/listings/wishes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wishes[0]["id"], 10);
    assert_eq!(wishes[0]["matched_offers"][0]["id"], 4);
    assert_eq!(wishes[0]["match_percentage"], 92.0);

    let (status, listing_status) = get_json(app.clone(), "/api/v1/listings/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing_status["revision"], 1);
    assert!(!listing_status["refreshedAt"].is_null());

    // Detail lookups hit the same snapshot.
    let (status, offer_body) = get_json(app.clone(), "/api/v1/listings/offers/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(offer_body["title"], "bike, barely used");

    let (status, error_body) = get_json(app, "/api/v1/listings/wishes/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_body["code"], 404);
}

#[tokio::test]
async fn celebration_status_tracks_the_sequencer() {
    let (app, state) = build_test_router().await;

    let (status, body) = get_json(app.clone(), "/api/v1/celebration").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert!(body["pair"].is_null());

    let pair = MatchPair::new(
        WishRecord::new(10, "road bike"),
        OfferRecord::new(4, "bike, barely used"),
    );
    assert!(state.sequencer.arm(pair));

    let (status, body) = get_json(app, "/api/v1/celebration").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);
    assert_eq!(body["pair"]["wish"]["id"], 10);
    assert_eq!(body["pair"]["offer"]["id"], 4);

    state.sequencer.shutdown();
}

#[tokio::test]
async fn events_endpoint_speaks_sse() {
    let (app, _state) = build_test_router().await;

    let response = get(app, "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/event-stream"));
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let (app, _state) = build_test_router().await;

    let response = get(app, "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
