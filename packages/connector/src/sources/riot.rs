//! GreyNoise-backed source implementation.

use async_trait::async_trait;

use crate::config::Config;
use crate::error::ExtractError;
use crate::traits::source::Source;
use greynoise_client::{FetchResult, GreyNoiseClient};

/// Source backed by the GreyNoise RIOT dataset endpoint.
///
/// Thin adapter over [`GreyNoiseClient`]: one GET per run against the
/// configured endpoint, with the client's error taxonomy mapped onto
/// [`ExtractError`].
pub struct RiotSource {
    client: GreyNoiseClient,
    url: String,
}

impl RiotSource {
    /// Build a source from the resolved configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: GreyNoiseClient::new(config.api_key.expose()),
            url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl Source for RiotSource {
    async fn fetch(&self) -> Result<FetchResult, ExtractError> {
        Ok(self.client.fetch(&self.url).await?)
    }

    fn name(&self) -> &str {
        "greynoise_riot"
    }
}
