//! Bounded rolling window of recent readings, used only for charting.

use std::collections::VecDeque;

use serde::Serialize;

use crate::reading::SensorReading;
use crate::types::Timestamp;

/// Number of readings kept for the history chart.
pub const HISTORY_CAPACITY: usize = 20;

/// A reading stamped with the time it was sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub recorded_at: Timestamp,
    pub reading: SensorReading,
}

/// Fixed-capacity FIFO of [`HistoryEntry`] values. Pushing into a full
/// history evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history holding at most [`HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom capacity. A capacity of zero
    /// retains nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting from the front until within capacity.
    pub fn push(&mut self, reading: SensorReading, recorded_at: Timestamp) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            recorded_at,
            reading,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recently pushed entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn at(secs: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
    }

    fn reading(n: f64) -> SensorReading {
        SensorReading::new(n, n, n)
    }

    #[test]
    fn keeps_insertion_order() {
        let mut history = History::new();
        for i in 0..3 {
            history.push(reading(f64::from(i)), at(i64::from(i)));
        }
        let temps: Vec<f64> = history.iter().map(|e| e.reading.temperature).collect();
        assert_eq!(temps, vec![0.0, 1.0, 2.0]);
        assert_eq!(history.latest().unwrap().recorded_at, at(2));
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = History::new();
        for i in 0..25 {
            history.push(reading(f64::from(i)), at(i64::from(i)));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().unwrap().reading.temperature, 5.0);
        assert_eq!(history.latest().unwrap().reading.temperature, 24.0);
    }

    #[test]
    fn custom_capacity() {
        let mut history = History::with_capacity(2);
        history.push(reading(1.0), at(1));
        history.push(reading(2.0), at(2));
        history.push(reading(3.0), at(3));
        let temps: Vec<f64> = history.iter().map(|e| e.reading.temperature).collect();
        assert_eq!(temps, vec![2.0, 3.0]);
        assert_eq!(history.capacity(), 2);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut history = History::with_capacity(0);
        history.push(reading(1.0), at(1));
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn clear_empties_history() {
        let mut history = History::new();
        history.push(reading(1.0), at(1));
        history.clear();
        assert!(history.is_empty());
    }
}
