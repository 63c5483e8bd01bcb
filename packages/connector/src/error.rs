//! Typed errors for the connector.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Every error is
//! terminal: a failed stage aborts the run, and the binary entry point
//! is the only place that turns an error into a process exit.

use std::fmt;

use thiserror::Error;

use greynoise_client::GreyNoiseError;

/// Configuration resolution failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The required API key is absent or empty.
    #[error("GREYNOISE_API_KEY must be set")]
    MissingApiKey,
}

/// Extract-stage failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-200 status.
    #[error("API request failed with status {code}: {body}")]
    Status { code: u16, body: String },

    /// The body could not be decoded as JSON.
    #[error("response was not valid JSON: {body}")]
    InvalidPayload {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<GreyNoiseError> for ExtractError {
    fn from(err: GreyNoiseError) -> Self {
        match err {
            GreyNoiseError::Transport(e) => Self::Transport(Box::new(e)),
            GreyNoiseError::Api { status, body } => Self::Status { code: status, body },
            GreyNoiseError::InvalidJson { body, source } => Self::InvalidPayload { body, source },
        }
    }
}

/// Load-stage failures.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The store connection could not be established.
    #[error("store connection failed: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The insert was rejected or the store became unreachable mid-write.
    #[error("store write failed: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Any stage failure, tagged with the stage it came from.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("extract: {0}")]
    Extract(#[from] ExtractError),

    #[error("load: {0}")]
    Load(#[from] LoadError),
}

impl PipelineError {
    /// The stage this error originated from, for the failure log line.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Configure,
            Self::Extract(_) => Stage::Extract,
            Self::Load(_) => Stage::Load,
        }
    }
}

/// Pipeline stages, in execution order.
///
/// The transform stage has no failure modes, so no error maps to it;
/// it appears here because stage names show up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configure,
    Extract,
    Transform,
    Load,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::Extract => "extract",
            Self::Transform => "transform",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
