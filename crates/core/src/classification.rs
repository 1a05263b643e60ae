//! Fire-severity classification rule.
//!
//! Pure logic -- no I/O. Maps a [`SensorReading`] to a fire/no-fire decision
//! and a [`Severity`] using fixed threshold comparisons.

use serde::{Deserialize, Serialize};

use crate::reading::SensorReading;

/// Temperature above which a fire is reported (degrees Celsius).
pub const TEMPERATURE_ALERT_C: f64 = 60.0;

/// Smoke level above which a fire is reported (percent).
pub const SMOKE_ALERT_PERCENT: f64 = 40.0;

/// Gas concentration above which a fire is reported (ppm).
pub const GAS_ALERT_PPM: f64 = 500.0;

/// Temperature above which severity escalates to [`Severity::High`].
pub const TEMPERATURE_CRITICAL_C: f64 = 90.0;

/// Smoke level above which severity escalates to [`Severity::High`].
pub const SMOKE_CRITICAL_PERCENT: f64 = 70.0;

/// Ordinal fire-risk label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Wire representation (`"LOW"`, `"MEDIUM"`, `"HIGH"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one reading. Also the `POST /detect` response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub fire_detected: bool,
    pub severity: Severity,
}

impl ClassificationResult {
    /// The conservative state shown when no classification is available.
    pub fn safe_default() -> Self {
        Self::default()
    }
}

/// Classify a reading.
///
/// Rules are applied in order; the escalation step only raises severity and
/// never touches `fire_detected`. All comparisons are strict.
pub fn classify(reading: &SensorReading) -> ClassificationResult {
    let mut result = ClassificationResult::default();

    if reading.temperature > TEMPERATURE_ALERT_C
        || reading.smoke > SMOKE_ALERT_PERCENT
        || reading.gas > GAS_ALERT_PPM
    {
        result.fire_detected = true;
        result.severity = Severity::Medium;
    }

    if reading.temperature > TEMPERATURE_CRITICAL_C || reading.smoke > SMOKE_CRITICAL_PERCENT {
        result.severity = Severity::High;
    }

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
