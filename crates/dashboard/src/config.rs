use std::time::Duration;

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the classifier service (default: `http://127.0.0.1:8000`).
    pub api_url: String,
    /// Per-request timeout for classification calls (default: `5` seconds).
    pub request_timeout: Duration,
    /// Interval between history refresh ticks (default: `2` seconds).
    pub refresh_interval: Duration,
    /// Randomly drift the simulated sensors on every tick (default: off).
    pub simulate_drift: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_secs(5),
            refresh_interval: Duration::from_secs(2),
            simulate_drift: false,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `DETECT_API_URL`        | `http://127.0.0.1:8000`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `5`                      |
    /// | `REFRESH_INTERVAL_SECS` | `2`                      |
    /// | `SIMULATE_DRIFT`        | `false`                  |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("DETECT_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse::<u64>().expect("REQUEST_TIMEOUT_SECS must be a valid u64"))
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        // Tokio intervals cannot have a zero period.
        let refresh_interval = std::env::var("REFRESH_INTERVAL_SECS")
            .ok()
            .map(|v| v.parse::<u64>().expect("REFRESH_INTERVAL_SECS must be a valid u64"))
            .map(|secs| Duration::from_secs(secs.max(1)))
            .unwrap_or(defaults.refresh_interval);

        let simulate_drift = std::env::var("SIMULATE_DRIFT")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.simulate_drift);

        Self {
            api_url,
            request_timeout,
            refresh_interval,
            simulate_drift,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
