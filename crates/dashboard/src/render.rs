//! Plain-text rendering of the dashboard for a terminal.

use std::fmt::Write;

use firewatch_core::history::History;
use firewatch_core::reading::SensorReading;
use firewatch_core::summary::{gauge_levels, sensor_cards};

use crate::dashboard::{Analysis, Dashboard, UNREACHABLE_MESSAGE};

const GAUGE_WIDTH: usize = 20;

/// Render every section: gauges, status panel, summary cards and history.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let reading = dashboard.current_reading();
    let mut out = String::new();

    out.push_str("=== Smart Fire Detection System ===\n\n");
    out.push_str(&render_gauges(&reading));
    out.push('\n');
    out.push_str(&render_status_panel(dashboard.last_analysis()));
    out.push('\n');
    out.push_str(&render_summary(&reading));
    out.push('\n');
    out.push_str(&render_history(dashboard.history()));
    out
}

/// Sidebar-style progress bars for the three sensors.
pub fn render_gauges(reading: &SensorReading) -> String {
    let levels = gauge_levels(reading);
    let mut out = String::from("Sensor Levels\n");
    for (label, level) in [
        ("Smoke", levels.smoke),
        ("Temperature", levels.temperature),
        ("Gas", levels.gas),
    ] {
        let _ = writeln!(out, "  {label:<12} {} {level:>3}%", gauge_bar(level));
    }
    out
}

fn gauge_bar(level: u8) -> String {
    let filled = usize::from(level) * GAUGE_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(GAUGE_WIDTH - filled))
}

/// The coloured fire status panel, or a prompt when nothing was analyzed yet.
pub fn render_status_panel(analysis: Option<&Analysis>) -> String {
    let mut out = String::from("Fire Status\n");

    let Some(analysis) = analysis else {
        out.push_str("  (run `analyze` to classify the current reading)\n");
        return out;
    };

    if let Some(detail) = &analysis.service_error {
        let _ = writeln!(out, "  ERROR: {UNREACHABLE_MESSAGE} ({detail})");
    }

    let style = analysis.style;
    let _ = writeln!(
        out,
        "  [{} {}] {}",
        style.color_name(),
        style.color(),
        style.message()
    );
    let _ = writeln!(
        out,
        "  fire_detected={} severity={}",
        analysis.result.fire_detected, analysis.result.severity
    );
    for line in style.instructions() {
        let _ = writeln!(out, "  - {line}");
    }
    out
}

/// Summary cards: value, unit and status label per sensor.
pub fn render_summary(reading: &SensorReading) -> String {
    let mut out = String::from("Sensor Summary\n");
    for card in sensor_cards(reading) {
        let _ = writeln!(
            out,
            "  {:<12} {:>8} {:<4} {}",
            card.label, card.value, card.unit, card.status
        );
    }
    out
}

/// History table, oldest first, with local wall-clock times.
pub fn render_history(history: &History) -> String {
    let mut out = format!("Sensor History (Last {} Records)\n", history.capacity());
    if history.is_empty() {
        out.push_str("  (no samples yet)\n");
        return out;
    }

    let _ = writeln!(out, "  {:<8} {:>11} {:>7} {:>7}", "Time", "Temperature", "Smoke", "Gas");
    for entry in history.iter() {
        let time = entry.recorded_at.with_timezone(&chrono::Local).format("%H:%M:%S").to_string();
        let r = entry.reading;
        let _ = writeln!(
            out,
            "  {time:<8} {:>11} {:>7} {:>7}",
            r.temperature, r.smoke, r.gas
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use firewatch_core::classification::{ClassificationResult, Severity};
    use firewatch_core::status::DisplayStyle;

    use super::*;

    fn analysis(result: ClassificationResult, service_error: Option<&str>) -> Analysis {
        Analysis {
            reading: SensorReading::new(95.0, 10.0, 100.0),
            result,
            style: DisplayStyle::for_result(&result),
            service_error: service_error.map(str::to_string),
        }
    }

    #[test]
    fn gauge_bar_fills_proportionally() {
        assert_eq!(gauge_bar(0), format!("[{}]", ".".repeat(20)));
        assert_eq!(gauge_bar(50), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(gauge_bar(100), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn panel_prompts_before_first_analysis() {
        assert!(render_status_panel(None).contains("run `analyze`"));
    }

    #[test]
    fn high_panel_shows_evacuation_instructions() {
        let result = ClassificationResult {
            fire_detected: true,
            severity: Severity::High,
        };
        let panel = render_status_panel(Some(&analysis(result, None)));
        assert!(panel.contains("#d32f2f"));
        assert!(panel.contains("Evacuate Immediately"));
        assert!(panel.contains("Do not use elevators"));
        assert!(!panel.contains("ERROR"));
    }

    #[test]
    fn fallback_panel_shows_error_and_safe_state() {
        let panel = render_status_panel(Some(&analysis(
            ClassificationResult::safe_default(),
            Some("connection refused"),
        )));
        assert!(panel.contains(UNREACHABLE_MESSAGE));
        assert!(panel.contains("connection refused"));
        assert!(panel.contains("#1976d2"));
        assert!(panel.contains("severity=LOW"));
    }

    #[test]
    fn summary_labels_follow_thresholds() {
        let summary = render_summary(&SensorReading::new(75.0, 10.0, 600.0));
        assert!(summary.contains("Hot"));
        assert!(summary.contains("Safe"));
        assert!(summary.contains("High"));
    }

    #[test]
    fn history_lists_each_sample() {
        let mut history = History::new();
        history.push(SensorReading::new(31.0, 11.0, 101.0), Utc::now());
        history.push(SensorReading::new(32.0, 12.0, 102.0), Utc::now());
        let table = render_history(&history);
        assert!(table.contains("Last 20 Records"));
        assert!(table.contains("31"));
        assert!(table.contains("102"));
    }
}
