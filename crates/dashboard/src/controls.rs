//! Simulated sensor inputs.
//!
//! Each sensor behaves like a slider with a fixed range and default. Values
//! set by the user are clamped into range; optional drift nudges all three
//! by a small random step on each refresh tick.

use std::ops::RangeInclusive;

use rand::Rng;

use firewatch_core::reading::SensorReading;

/// Temperature slider range in degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 20.0..=150.0;
/// Smoke slider range in percent.
pub const SMOKE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Gas slider range in ppm.
pub const GAS_RANGE: RangeInclusive<f64> = 0.0..=1000.0;

const DEFAULT_TEMPERATURE: f64 = 30.0;
const DEFAULT_SMOKE: f64 = 10.0;
const DEFAULT_GAS: f64 = 100.0;

/// Largest per-tick drift as a fraction of each slider's span.
const DRIFT_FRACTION: f64 = 0.02;

/// Which simulated sensor a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Temperature,
    Smoke,
    Gas,
}

impl Sensor {
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Sensor::Temperature => TEMPERATURE_RANGE,
            Sensor::Smoke => SMOKE_RANGE,
            Sensor::Gas => GAS_RANGE,
        }
    }
}

/// Current slider positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorControls {
    temperature: f64,
    smoke: f64,
    gas: f64,
}

impl Default for SensorControls {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            smoke: DEFAULT_SMOKE,
            gas: DEFAULT_GAS,
        }
    }
}

impl SensorControls {
    /// Move one slider, clamping into its range. Returns the applied value.
    pub fn set(&mut self, sensor: Sensor, value: f64) -> f64 {
        let range = sensor.range();
        let applied = clamp(value, &range);
        match sensor {
            Sensor::Temperature => self.temperature = applied,
            Sensor::Smoke => self.smoke = applied,
            Sensor::Gas => self.gas = applied,
        }
        applied
    }

    pub fn get(&self, sensor: Sensor) -> f64 {
        match sensor {
            Sensor::Temperature => self.temperature,
            Sensor::Smoke => self.smoke,
            Sensor::Gas => self.gas,
        }
    }

    /// Snapshot the sliders as a reading.
    pub fn reading(&self) -> SensorReading {
        SensorReading::new(self.temperature, self.smoke, self.gas)
    }

    /// Nudge every slider by a random step, staying within range.
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for sensor in [Sensor::Temperature, Sensor::Smoke, Sensor::Gas] {
            let range = sensor.range();
            let max_step = (range.end() - range.start()) * DRIFT_FRACTION;
            let step = rng.random_range(-max_step..=max_step);
            self.set(sensor, self.get(sensor) + step);
        }
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}
