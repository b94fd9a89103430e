//! Integration tests for the reading ingest and listing endpoints.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

async fn post_reading(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/readings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quiet_reading_returns_no_alerts(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, body) = post_reading(
        app,
        json!({
            "device_id": "sensor-1",
            "location": "kitchen",
            "temperature": 22.0,
            "humidity": 50.0,
            "motion": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reading"]["device_id"], "sensor-1");
    assert!(body["alerts"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hot_reading_returns_a_high_temp_alert(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let (status, body) = post_reading(
        app,
        json!({
            "device_id": "sensor-1",
            "location": "kitchen",
            "temperature": 30.0,
            "humidity": 50.0,
            "motion": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let alerts = body["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["alert_kind"], "HIGH_TEMP");
    let message = alerts[0]["message"].as_str().unwrap();
    assert!(message.contains("30.0"));
    assert!(message.contains("kitchen"));
    assert!(message.contains("sensor-1"));
    // Email is disabled in the test config, so delivery never happened.
    assert_eq!(alerts[0]["notified"], false);

    // The alert is durably stored and visible on the listing endpoint.
    let app = common::build_test_app(pool);
    let (status, listed) = get_json(app, "/api/alerts?device_id=sensor-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_device_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, body) = post_reading(
        app,
        json!({
            "device_id": "",
            "location": "kitchen",
            "temperature": 22.0,
            "humidity": 50.0,
            "motion": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn readings_listing_filters_by_device(pool: PgPool) {
    for (device, location) in [("sensor-1", "kitchen"), ("sensor-2", "bedroom")] {
        let app = common::build_test_app(pool.clone());
        let (status, _) = post_reading(
            app,
            json!({
                "device_id": device,
                "location": location,
                "temperature": 22.0,
                "humidity": 50.0,
                "motion": false
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let (status, body) = get_json(app, "/api/readings?device_id=sensor-2").await;
    assert_eq!(status, StatusCode::OK);
    let readings = body.as_array().unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0]["location"], "bedroom");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn email_log_is_empty_without_deliveries(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, body) = get_json(app, "/api/email-log").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
