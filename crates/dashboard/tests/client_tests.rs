//! Integration tests for [`DetectClient`] against live local servers.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

use firewatch_core::classification::{ClassificationResult, Severity};
use firewatch_core::reading::SensorReading;
use firewatch_dashboard::client::{DetectClient, DetectError};

// ---------------------------------------------------------------------------
// Test: successful classification round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detect_returns_service_classification() {
    let url = common::spawn_classifier().await;
    let client = common::client(&url);

    let result = client
        .detect(&SensorReading::new(70.0, 10.0, 100.0))
        .await
        .unwrap();

    assert_eq!(
        result,
        ClassificationResult {
            fire_detected: true,
            severity: Severity::Medium,
        }
    );
}

#[tokio::test]
async fn trailing_slash_in_url_is_ignored() {
    let url = common::spawn_classifier().await;
    let client = common::client(&format!("{url}/"));

    let result = client
        .detect(&SensorReading::new(95.0, 10.0, 100.0))
        .await
        .unwrap();

    assert_eq!(result.severity, Severity::High);
}

// ---------------------------------------------------------------------------
// Test: every failure surfaces as a DetectError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refused_connection_is_unreachable() {
    let client = common::client(&common::closed_port_url().await);

    let err = client
        .detect(&SensorReading::new(30.0, 10.0, 100.0))
        .await
        .unwrap_err();

    assert_matches!(err, DetectError::Request(_));
    assert!(err.is_unreachable());
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn slow_service_times_out() {
    let router = Router::new().route(
        "/detect",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "{}"
        }),
    );
    let url = common::spawn_service(router).await;
    let client = DetectClient::new(url, Duration::from_millis(200)).unwrap();

    let err = client
        .detect(&SensorReading::new(30.0, 10.0, 100.0))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let router = Router::new().route(
        "/detect",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = common::client(&common::spawn_service(router).await);

    let err = client
        .detect(&SensorReading::new(30.0, 10.0, 100.0))
        .await
        .unwrap_err();

    assert_matches!(err, DetectError::Status { status: 500, ref body } if body == "boom");
}

#[tokio::test]
async fn malformed_body_is_unreachable() {
    let router = Router::new().route("/detect", post(|| async { "not json at all" }));
    let client = common::client(&common::spawn_service(router).await);

    let err = client
        .detect(&SensorReading::new(30.0, 10.0, 100.0))
        .await
        .unwrap_err();

    assert_matches!(err, DetectError::Request(_));
}

#[tokio::test]
async fn unknown_severity_is_rejected() {
    let router = Router::new().route(
        "/detect",
        post(|| async {
            axum::Json(serde_json::json!({ "fire_detected": true, "severity": "EXTREME" }))
        }),
    );
    let client = common::client(&common::spawn_service(router).await);

    let result = client.detect(&SensorReading::new(30.0, 10.0, 100.0)).await;

    assert!(result.is_err());
}
