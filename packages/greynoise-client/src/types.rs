use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Decoded response from a GreyNoise endpoint plus fetch metadata.
///
/// The payload is kept opaque (object or array, whatever the endpoint
/// returned); callers that persist it use [`http_meta`](Self::http_meta)
/// to tag stored records with the fetch details.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Decoded JSON body.
    pub payload: Value,

    /// HTTP status code of the response.
    pub status_code: u16,

    /// When the response was decoded, UTC.
    pub fetched_at: DateTime<Utc>,
}

impl FetchResult {
    /// Fetch metadata without the payload.
    pub fn http_meta(&self) -> Value {
        json!({
            "status_code": self.status_code,
            "fetched_at": self.fetched_at,
        })
    }
}
