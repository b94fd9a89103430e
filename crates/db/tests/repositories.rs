//! Integration tests for the reading and alert repositories.

use sentra_core::AlertKind;
use sentra_db::models::reading::CreateReading;
use sentra_db::repositories::{AlertRepo, ReadingRepo};
use sqlx::PgPool;

fn sample_reading(device_id: &str, location: &str) -> CreateReading {
    CreateReading {
        device_id: device_id.to_string(),
        location: location.to_string(),
        temperature: 21.5,
        humidity: 48.0,
        motion: false,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_reading_assigns_identity_and_timestamp(pool: PgPool) {
    let reading = ReadingRepo::create(&pool, &sample_reading("sensor-1", "kitchen"))
        .await
        .unwrap();

    assert!(reading.id > 0);
    assert_eq!(reading.device_id, "sensor-1");
    assert_eq!(reading.location, "kitchen");
    assert!(!reading.motion);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_readings_filters_by_device_and_orders_newest_first(pool: PgPool) {
    ReadingRepo::create(&pool, &sample_reading("sensor-1", "kitchen"))
        .await
        .unwrap();
    ReadingRepo::create(&pool, &sample_reading("sensor-2", "bedroom"))
        .await
        .unwrap();
    let latest = ReadingRepo::create(&pool, &sample_reading("sensor-1", "kitchen"))
        .await
        .unwrap();

    let all = ReadingRepo::list(&pool, None, 50).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, latest.id);

    let filtered = ReadingRepo::list(&pool, Some("sensor-1"), 50).await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.device_id == "sensor-1"));
}

#[sqlx::test(migrations = "./migrations")]
async fn create_alert_starts_unnotified(pool: PgPool) {
    let alert = AlertRepo::create(
        &pool,
        "sensor-1",
        "kitchen",
        AlertKind::HighTemp,
        "High temperature 30.0°C at kitchen (sensor-1)",
    )
    .await
    .unwrap();

    assert!(alert.id > 0);
    assert_eq!(alert.alert_kind, "HIGH_TEMP");
    assert!(!alert.notified);
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_notified_flips_the_flag(pool: PgPool) {
    let alert = AlertRepo::create(&pool, "sensor-1", "kitchen", AlertKind::Humidity, "msg")
        .await
        .unwrap();

    AlertRepo::mark_notified(&pool, alert.id).await.unwrap();

    let notified = AlertRepo::list_notified(&pool, 50).await.unwrap();
    assert_eq!(notified.len(), 1);
    assert_eq!(notified[0].id, alert.id);
    assert!(notified[0].notified);

    // Marking again is a no-op, not an error.
    AlertRepo::mark_notified(&pool, alert.id).await.unwrap();
    let still_notified = AlertRepo::list_notified(&pool, 50).await.unwrap();
    assert_eq!(still_notified.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_alerts_filters_by_device(pool: PgPool) {
    AlertRepo::create(&pool, "sensor-1", "kitchen", AlertKind::HighTemp, "a")
        .await
        .unwrap();
    AlertRepo::create(&pool, "sensor-2", "bedroom", AlertKind::MotionNight, "b")
        .await
        .unwrap();

    let filtered = AlertRepo::list(&pool, Some("sensor-2"), 50).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].alert_kind, "MOTION_NIGHT");

    let unfiltered = AlertRepo::list(&pool, None, 50).await.unwrap();
    assert_eq!(unfiltered.len(), 2);
}
