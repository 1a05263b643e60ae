//! `firewatch-dashboard` -- terminal dashboard for the fire detection service.
//!
//! Simulates temperature, smoke and gas sensors, keeps a rolling history,
//! and asks the classifier service for a fire verdict on demand.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                 | Description                        |
//! |-------------------------|----------|-------------------------|------------------------------------|
//! | `DETECT_API_URL`        | no       | `http://127.0.0.1:8000` | Base URL of the classifier service |
//! | `REQUEST_TIMEOUT_SECS`  | no       | `5`                     | Timeout for each classification    |
//! | `REFRESH_INTERVAL_SECS` | no       | `2`                     | Seconds between history samples    |
//! | `SIMULATE_DRIFT`        | no       | `false`                 | Randomly drift the sensors         |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firewatch_dashboard::app;
use firewatch_dashboard::client::DetectClient;
use firewatch_dashboard::config::DashboardConfig;
use firewatch_dashboard::dashboard::Dashboard;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is the dashboard itself.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firewatch_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DashboardConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.as_secs(),
        refresh_secs = config.refresh_interval.as_secs(),
        simulate_drift = config.simulate_drift,
        "Starting firewatch-dashboard",
    );

    let client = DetectClient::new(config.api_url.clone(), config.request_timeout)
        .expect("Failed to build HTTP client");

    app::run(&config, &client, Dashboard::new()).await;
}
