//! Mapping from a classification result to the status panel shown to users.

use serde::Serialize;

use crate::classification::{ClassificationResult, Severity};

/// Visual style of the fire status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Fire with high severity.
    Evacuate,
    /// Fire with medium severity.
    Caution,
    /// Fire reported with low severity.
    StayAlert,
    /// No fire.
    Safe,
}

impl DisplayStyle {
    /// Pick the style for a result. `fire_detected` decides first: without a
    /// fire the panel is always [`DisplayStyle::Safe`].
    pub fn for_result(result: &ClassificationResult) -> Self {
        if !result.fire_detected {
            return DisplayStyle::Safe;
        }
        match result.severity {
            Severity::High => DisplayStyle::Evacuate,
            Severity::Medium => DisplayStyle::Caution,
            Severity::Low => DisplayStyle::StayAlert,
        }
    }

    /// Panel background colour as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            DisplayStyle::Evacuate => "#d32f2f",
            DisplayStyle::Caution => "#f57c00",
            DisplayStyle::StayAlert => "#388e3c",
            DisplayStyle::Safe => "#1976d2",
        }
    }

    /// Short colour name for terminals and logs.
    pub fn color_name(self) -> &'static str {
        match self {
            DisplayStyle::Evacuate => "red",
            DisplayStyle::Caution => "orange",
            DisplayStyle::StayAlert => "green",
            DisplayStyle::Safe => "blue",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DisplayStyle::Evacuate => "HIGH FIRE ALERT! Evacuate Immediately!",
            DisplayStyle::Caution => "Medium Fire Risk Detected!",
            DisplayStyle::StayAlert => "Low Fire Risk. Stay Alert.",
            DisplayStyle::Safe => "No Fire Detected. Environment is Safe.",
        }
    }

    /// Follow-up instructions shown under the panel, possibly empty.
    pub fn instructions(self) -> &'static [&'static str] {
        match self {
            DisplayStyle::Evacuate => &[
                "Use nearest emergency exit",
                "Do not use elevators",
                "Assist others if possible",
            ],
            DisplayStyle::Caution => &["Be cautious. Prepare for evacuation."],
            DisplayStyle::StayAlert | DisplayStyle::Safe => &[],
        }
    }
}
