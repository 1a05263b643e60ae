//! Per-sensor summary cards and gauge levels for the dashboard.

use serde::Serialize;

use crate::classification::{GAS_ALERT_PPM, SMOKE_ALERT_PERCENT, TEMPERATURE_ALERT_C};
use crate::reading::SensorReading;

/// One sensor's card: formatted value and a status label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorCard {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub status: &'static str,
    /// Whether the value is past its alert threshold.
    pub elevated: bool,
}

/// Summary cards in display order: temperature, smoke, gas.
pub fn sensor_cards(reading: &SensorReading) -> [SensorCard; 3] {
    let hot = reading.temperature > TEMPERATURE_ALERT_C;
    let smoky = reading.smoke > SMOKE_ALERT_PERCENT;
    let gassy = reading.gas > GAS_ALERT_PPM;

    [
        SensorCard {
            label: "Temperature",
            value: reading.temperature,
            unit: "°C",
            status: if hot { "Hot" } else { "Normal" },
            elevated: hot,
        },
        SensorCard {
            label: "Smoke",
            value: reading.smoke,
            unit: "%",
            status: if smoky { "Warning" } else { "Safe" },
            elevated: smoky,
        },
        SensorCard {
            label: "Gas",
            value: reading.gas,
            unit: "ppm",
            status: if gassy { "High" } else { "Safe" },
            elevated: gassy,
        },
    ]
}

/// Gauge fill levels (0..=100) for the sidebar progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeLevels {
    pub temperature: u8,
    pub smoke: u8,
    pub gas: u8,
}

/// Scale a reading onto 0..=100 gauges. Temperature is divided by 1.5 and
/// gas by 10; results are truncated and clamped.
pub fn gauge_levels(reading: &SensorReading) -> GaugeLevels {
    GaugeLevels {
        temperature: gauge(reading.temperature / 1.5),
        smoke: gauge(reading.smoke),
        gas: gauge(reading.gas / 10.0),
    }
}

fn gauge(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_cards_are_normal() {
        let cards = sensor_cards(&SensorReading::new(30.0, 10.0, 100.0));
        assert_eq!(cards[0].status, "Normal");
        assert_eq!(cards[1].status, "Safe");
        assert_eq!(cards[2].status, "Safe");
        assert!(cards.iter().all(|c| !c.elevated));
    }

    #[test]
    fn elevated_cards() {
        let cards = sensor_cards(&SensorReading::new(61.0, 41.0, 501.0));
        assert_eq!(cards[0].status, "Hot");
        assert_eq!(cards[1].status, "Warning");
        assert_eq!(cards[2].status, "High");
        assert!(cards.iter().all(|c| c.elevated));
    }

    #[test]
    fn card_thresholds_are_strict() {
        let cards = sensor_cards(&SensorReading::new(60.0, 40.0, 500.0));
        assert!(cards.iter().all(|c| !c.elevated));
    }

    #[test]
    fn gauges_scale_and_clamp() {
        let levels = gauge_levels(&SensorReading::new(150.0, 10.0, 1000.0));
        assert_eq!(levels, GaugeLevels { temperature: 100, smoke: 10, gas: 100 });

        let levels = gauge_levels(&SensorReading::new(30.0, 250.0, 55.0));
        assert_eq!(levels, GaugeLevels { temperature: 20, smoke: 100, gas: 5 });

        let levels = gauge_levels(&SensorReading::new(-10.0, -1.0, f64::NAN));
        assert_eq!(levels, GaugeLevels { temperature: 0, smoke: 0, gas: 0 });
    }
}
