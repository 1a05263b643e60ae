//! HTTP client for the classifier service's `POST /detect` endpoint.
//!
//! Every failure mode (refused connection, timeout, non-2xx status,
//! undecodable body) collapses into [`DetectError`], which the dashboard
//! treats as "service unreachable".

use std::time::Duration;

use firewatch_core::classification::ClassificationResult;
use firewatch_core::reading::SensorReading;

/// The classifier could not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The HTTP request failed or the body could not be decoded (network,
    /// DNS, timeout, malformed JSON).
    #[error("Classifier request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status code.
    #[error("Classifier returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl DetectError {
    /// Every detect failure is a service-unreachable condition for the
    /// dashboard; none of them carry a usable classification.
    pub fn is_unreachable(&self) -> bool {
        true
    }

    /// Whether the request was abandoned because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DetectError::Request(e) if e.is_timeout())
    }
}

/// Client for a single classifier service instance.
pub struct DetectClient {
    client: reqwest::Client,
    api_url: String,
}

impl DetectClient {
    /// Create a client with a bounded per-request timeout.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://127.0.0.1:8000`.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, DetectError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Classify a reading via `POST /detect`.
    pub async fn detect(
        &self,
        reading: &SensorReading,
    ) -> Result<ClassificationResult, DetectError> {
        let response = self
            .client
            .post(format!("{}/detect", self.api_url))
            .json(reading)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DetectError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<ClassificationResult>().await?)
    }
}
