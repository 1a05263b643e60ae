//! Handler for the fire detection endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use firewatch_core::classification::{classify, ClassificationResult};
use firewatch_core::reading::SensorReading;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// POST /detect -- classify a sensor reading
// ---------------------------------------------------------------------------

/// Classify one reading into a fire decision and severity.
///
/// Responds with the bare `{ "fire_detected", "severity" }` object. Body
/// rejections are converted into JSON errors via [`AppError`](crate::error::AppError).
pub async fn detect_fire(
    payload: Result<Json<SensorReading>, JsonRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let Json(reading) = payload?;

    let result = classify(&reading);
    tracing::debug!(
        temperature = reading.temperature,
        smoke = reading.smoke,
        gas = reading.gas,
        fire_detected = result.fire_detected,
        severity = %result.severity,
        "Classified sensor reading",
    );

    Ok(Json(result))
}
