//! Dashboard session state: simulated controls, rolling history and the most
//! recent analysis.

use firewatch_core::classification::ClassificationResult;
use firewatch_core::history::History;
use firewatch_core::reading::SensorReading;
use firewatch_core::status::DisplayStyle;
use firewatch_core::types::Timestamp;

use crate::client::DetectClient;
use crate::controls::{Sensor, SensorControls};

/// Message shown when the classifier cannot be reached.
pub const UNREACHABLE_MESSAGE: &str = "Cannot reach backend API";

/// Outcome of one analyze action.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The reading that was sent.
    pub reading: SensorReading,
    /// Service result, or the safe default when the call failed.
    pub result: ClassificationResult,
    pub style: DisplayStyle,
    /// Set when the service was unreachable; the panel then shows the
    /// fallback result alongside this error.
    pub service_error: Option<String>,
}

impl Analysis {
    fn from_result(reading: SensorReading, result: ClassificationResult) -> Self {
        Self {
            reading,
            result,
            style: DisplayStyle::for_result(&result),
            service_error: None,
        }
    }

    fn unreachable(reading: SensorReading, detail: String) -> Self {
        let result = ClassificationResult::safe_default();
        Self {
            reading,
            result,
            style: DisplayStyle::for_result(&result),
            service_error: Some(detail),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.service_error.is_some()
    }
}

/// Single-user dashboard session. Owned by the command loop; nothing else
/// mutates it.
#[derive(Debug, Default)]
pub struct Dashboard {
    controls: SensorControls,
    history: History,
    last_analysis: Option<Analysis>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from custom controls and history (tests, replays).
    pub fn with_parts(controls: SensorControls, history: History) -> Self {
        Self {
            controls,
            history,
            last_analysis: None,
        }
    }

    pub fn controls(&self) -> &SensorControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut SensorControls {
        &mut self.controls
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_analysis(&self) -> Option<&Analysis> {
        self.last_analysis.as_ref()
    }

    /// Current slider snapshot.
    pub fn current_reading(&self) -> SensorReading {
        self.controls.reading()
    }

    /// Move a slider. Returns the clamped value actually applied.
    pub fn set_sensor(&mut self, sensor: Sensor, value: f64) -> f64 {
        self.controls.set(sensor, value)
    }

    /// Refresh cycle: record the current reading in the history window.
    pub fn refresh(&mut self, at: Timestamp) {
        self.history.push(self.controls.reading(), at);
    }

    /// Send the current reading to the classifier and keep the outcome.
    ///
    /// Failures never escape: they are logged, recorded on the analysis and
    /// replaced by the safe default result. History is not touched.
    pub async fn analyze(&mut self, client: &DetectClient) -> &Analysis {
        let reading = self.controls.reading();

        let analysis = match client.detect(&reading).await {
            Ok(result) => {
                tracing::info!(
                    fire_detected = result.fire_detected,
                    severity = %result.severity,
                    "Classification received",
                );
                Analysis::from_result(reading, result)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    url = client.api_url(),
                    "Classifier unreachable, showing safe default",
                );
                Analysis::unreachable(reading, e.to_string())
            }
        };

        self.last_analysis.insert(analysis)
    }
}
