//! End-to-end tests for the receipt routes.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tally_api::{router, ApiConfig, AppState};
use tally_store::InMemoryScoreStore;
use tower::ServiceExt;

fn app() -> (Router, AppState) {
    let state = AppState::new(ApiConfig::default(), Arc::new(InMemoryScoreStore::new()));
    (router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn process(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn points(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap()
}

fn target() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

async fn score_of(app: &Router, receipt: Value) -> u64 {
    let (status, body) = send(app, process(&receipt)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(app, points(&id)).await;
    assert_eq!(status, StatusCode::OK);
    body["points"].as_u64().unwrap()
}

#[tokio::test]
async fn process_then_fetch_points() {
    let (app, _) = app();
    assert_eq!(score_of(&app, target()).await, 28);
}

#[tokio::test]
async fn reference_receipts() {
    let (app, _) = app();

    let corner_market = json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    });
    assert_eq!(score_of(&app, corner_market).await, 109);

    let walgreens = json!({
        "retailer": "Walgreens",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "08:13",
        "total": "2.65",
        "items": [
            {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
            {"shortDescription": "Dasani", "price": "1.40"}
        ]
    });
    assert_eq!(score_of(&app, walgreens).await, 15);
}

#[tokio::test]
async fn missing_retailer_is_rejected() {
    let (app, _) = app();
    let mut receipt = target();
    receipt.as_object_mut().unwrap().remove("retailer");

    let (status, body) = send(&app, process(&receipt)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Field: Retailer, Error: required");
}

#[tokio::test]
async fn empty_and_absent_items() {
    let (app, _) = app();

    let mut receipt = target();
    receipt["items"] = json!([]);
    let (status, body) = send(&app, process(&receipt)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Field: Items, Error: min");

    receipt.as_object_mut().unwrap().remove("items");
    let (_, body) = send(&app, process(&receipt)).await;
    assert_eq!(body["message"], "Field: Items, Error: required");
}

#[tokio::test]
async fn unparseable_total() {
    let (app, _) = app();
    let mut receipt = target();
    receipt["total"] = json!("abcrf");

    let (status, body) = send(&app, process(&receipt)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PARSE_ERROR");
    assert!(body["message"].as_str().unwrap().contains("abcrf"));
}

#[tokio::test]
async fn sub_cent_amounts_are_scored() {
    let (app, _) = app();
    let receipt = json!({
        "retailer": "abc",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "08:13",
        "items": [{"shortDescription": "xyz", "price": "0.999"}],
        "total": "1.255"
    });

    // 3 (retailer) + 1 (⌈0.999 × 0.2⌉); no round or quarter bonus
    assert_eq!(score_of(&app, receipt).await, 4);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (app, _) = app();

    let (status, body) = send(&app, points("00000000-0000-0000-0000-000000000000")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn shutdown_cancels_new_submissions() {
    let (app, state) = app();
    state.shutdown.cancel();

    let (status, body) = send(&app, process(&target())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "CANCELLED");
}

#[tokio::test]
async fn health() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
