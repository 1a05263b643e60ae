//! Sensor reading triple exchanged between the dashboard and the classifier.

use serde::{Deserialize, Serialize};

/// One sample of the three simulated sensors.
///
/// Values are taken as-is: negative or physically impossible numbers are
/// accepted and classified like any other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Smoke density in percent.
    pub smoke: f64,
    /// Gas concentration in parts per million.
    pub gas: f64,
}

impl SensorReading {
    pub fn new(temperature: f64, smoke: f64, gas: f64) -> Self {
        Self {
            temperature,
            smoke,
            gas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integer_fields() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"temperature": 30, "smoke": 10, "gas": 100}"#).unwrap();
        assert_eq!(reading, SensorReading::new(30.0, 10.0, 100.0));
    }

    #[test]
    fn missing_field_is_rejected() {
        let result = serde_json::from_str::<SensorReading>(r#"{"temperature": 30, "smoke": 10}"#);
        assert!(result.is_err());
    }
}
