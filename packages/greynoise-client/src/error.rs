use thiserror::Error;

/// Errors from a GreyNoise API call.
///
/// Each variant maps to one way a fetch can fail: the request never
/// completed, the API answered with a non-success status, or the body
/// was not JSON.
#[derive(Debug, Error)]
pub enum GreyNoiseError {
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered, but not with a success status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The body could not be decoded as JSON.
    #[error("response was not valid JSON: {body}")]
    InvalidJson {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GreyNoiseError>;
