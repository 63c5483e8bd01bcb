//! Testing utilities including mock implementations.
//!
//! These exercise the pipeline without network access. The store-side
//! counterpart is [`MemoryStore`](crate::stores::MemoryStore).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::error::ExtractError;
use crate::traits::source::Source;
use greynoise_client::FetchResult;

/// How a [`MockSource`] should fail.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Network-level failure before any response.
    Transport,

    /// Non-200 response with the given status and body.
    Status { code: u16, body: String },

    /// 200 response whose body is not JSON.
    InvalidPayload { body: String },
}

/// A mock data source with canned responses.
///
/// Counts fetch calls so tests can assert how often (or whether) the
/// pipeline reached the extract stage.
///
/// # Example
///
/// ```rust,ignore
/// use riot_connector::testing::MockSource;
/// use serde_json::json;
///
/// let source = MockSource::new(json!({"ip": "8.8.8.8", "riot": true}));
/// let fetched = source.fetch().await?;
/// assert_eq!(source.fetch_count(), 1);
/// ```
pub struct MockSource {
    payload: Value,
    status_code: u16,
    failure: Option<MockFailure>,
    fetches: AtomicUsize,
}

impl MockSource {
    /// A source that succeeds with the given payload and status 200.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            status_code: 200,
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Override the reported status code of the successful response.
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// A source that always fails the given way.
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            payload: Value::Null,
            status_code: 200,
            failure: Some(failure),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetch calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Source for MockSource {
    async fn fetch(&self) -> Result<FetchResult, ExtractError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        match &self.failure {
            Some(MockFailure::Transport) => Err(ExtractError::Transport(
                "mock transport failure".into(),
            )),
            Some(MockFailure::Status { code, body }) => Err(ExtractError::Status {
                code: *code,
                body: body.clone(),
            }),
            Some(MockFailure::InvalidPayload { body }) => {
                let source = serde_json::from_str::<Value>(body)
                    .expect_err("mock body must not be valid JSON");
                Err(ExtractError::InvalidPayload {
                    body: body.clone(),
                    source,
                })
            }
            None => Ok(FetchResult {
                payload: self.payload.clone(),
                status_code: self.status_code,
                fetched_at: Utc::now(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn counts_fetches() {
        let source = MockSource::new(json!({"riot": true}));
        assert_eq!(source.fetch_count(), 0);

        source.fetch().await.unwrap();
        source.fetch().await.unwrap();
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failing_source_returns_the_configured_error() {
        let source = MockSource::failing(MockFailure::Status {
            code: 500,
            body: "Internal Error".to_string(),
        });
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ExtractError::Status { code: 500, .. }));

        let source = MockSource::failing(MockFailure::InvalidPayload {
            body: "<html>".to_string(),
        });
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ExtractError::InvalidPayload { .. }));
    }
}
