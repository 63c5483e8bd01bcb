//! Pure GreyNoise REST API client.
//!
//! A minimal client for GreyNoise threat-intelligence endpoints. Issues a
//! single authenticated GET and decodes the JSON body, keeping the payload
//! opaque so callers decide what to do with it.
//!
//! # Example
//!
//! ```rust,ignore
//! use greynoise_client::GreyNoiseClient;
//!
//! let client = GreyNoiseClient::new("your-api-key");
//!
//! let fetched = client.fetch("https://api.greynoise.io/v2/riot").await?;
//! println!("status {} at {}", fetched.status_code, fetched.fetched_at);
//! ```

pub mod error;
pub mod types;

pub use error::{GreyNoiseError, Result};
pub use types::FetchResult;

use chrono::Utc;
use serde_json::Value;
use std::time::Duration;

/// Request timeout, seconds. GreyNoise responds well under this; anything
/// slower is treated as a transport failure.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub struct GreyNoiseClient {
    client: reqwest::Client,
    api_key: String,
}

impl GreyNoiseClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("failed to build HTTP client"),
            api_key: api_key.into(),
        }
    }

    /// Replace the underlying HTTP client (custom timeout, proxy, etc.).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch an endpoint and decode the JSON body.
    ///
    /// Sends `Accept: application/json` and the `key` header GreyNoise
    /// expects. The body is read as text before decoding so that a non-200
    /// status or an unparseable response can carry the raw body in the
    /// returned error. `fetched_at` is captured once the response has been
    /// decoded, not when the request started.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult> {
        tracing::info!(url, "fetching GreyNoise data");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(GreyNoiseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(source) => return Err(GreyNoiseError::InvalidJson { body, source }),
        };

        Ok(FetchResult {
            payload,
            status_code: status.as_u16(),
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = GreyNoiseError::Api {
            status: 500,
            body: "Internal Error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Error"));
    }

    #[test]
    fn invalid_json_error_carries_body() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let err = GreyNoiseError::InvalidJson {
            body: "<html>".to_string(),
            source,
        };
        assert!(err.to_string().contains("<html>"));
    }
}
