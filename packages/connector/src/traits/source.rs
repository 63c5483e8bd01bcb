//! Source trait for pluggable data extraction.

use async_trait::async_trait;

use crate::error::ExtractError;
use greynoise_client::FetchResult;

/// A source the pipeline extracts one record from.
///
/// Implementations fetch a single snapshot per run:
/// - `RiotSource` - the GreyNoise API
/// - `MockSource` - canned responses for tests
///
/// A fetch either yields the decoded payload plus fetch metadata, or a
/// terminal [`ExtractError`]; there is no retry at this seam.
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch one snapshot from the source.
    async fn fetch(&self) -> Result<FetchResult, ExtractError>;

    /// Source name, used as a log field.
    fn name(&self) -> &str {
        "unknown"
    }
}
