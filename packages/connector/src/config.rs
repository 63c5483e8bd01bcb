//! Environment-sourced configuration.
//!
//! The configuration is resolved once, in the binary entry point, and
//! passed by reference into the pipeline. Nothing else in the crate
//! reads the environment.

use std::env;

use crate::error::ConfigError;
use crate::security::SecretString;

/// RIOT dataset endpoint.
///
/// GreyNoise serves the RIOT dataset alongside per-IP community
/// lookups (`/v3/community/<ip>`) on the same host, and this connector
/// has been pointed at both, so the target is configurable via
/// `GREYNOISE_API_URL` rather than hard-coded.
pub const DEFAULT_API_URL: &str = "https://api.greynoise.io/v2/riot";

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_MONGO_DB: &str = "threat_intel";
pub const DEFAULT_COLLECTION: &str = "greynoise_riot_raw";

/// Connector configuration, immutable once resolved.
#[derive(Debug, Clone)]
pub struct Config {
    /// GreyNoise API key (secret, required).
    pub api_key: SecretString,

    /// Endpoint to fetch.
    pub api_url: String,

    /// MongoDB connection URI.
    pub mongo_uri: String,

    /// Database the record is written to.
    pub mongo_db: String,

    /// Collection the record is written to.
    pub collection: String,
}

impl Config {
    /// Build a config with the given API key and default connection
    /// parameters. Mainly for tests and embedding.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            api_url: DEFAULT_API_URL.to_string(),
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            mongo_db: DEFAULT_MONGO_DB.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Override the endpoint.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the MongoDB URI.
    pub fn with_mongo_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongo_uri = uri.into();
        self
    }

    /// Override the target database.
    pub fn with_mongo_db(mut self, db: impl Into<String>) -> Self {
        self.mongo_db = db.into();
        self
    }

    /// Override the target collection.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `GREYNOISE_API_KEY` is required; an absent or empty value is a
    /// terminal [`ConfigError::MissingApiKey`]. The connection
    /// parameters (`GREYNOISE_API_URL`, `MONGO_URI`, `MONGO_DB`,
    /// `COLLECTION_NAME`) all have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GREYNOISE_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key: SecretString::new(api_key),
            api_url: env::var("GREYNOISE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            mongo_uri: env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            mongo_db: env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_MONGO_DB.to_string()),
            collection: env::var("COLLECTION_NAME")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let config = Config::new("gn-test-key")
            .with_api_url("https://api.greynoise.io/v3/community/8.8.8.8")
            .with_mongo_db("ti")
            .with_collection("riot");

        assert_eq!(config.api_key.expose(), "gn-test-key");
        assert_eq!(
            config.api_url,
            "https://api.greynoise.io/v3/community/8.8.8.8"
        );
        assert_eq!(config.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.mongo_db, "ti");
        assert_eq!(config.collection, "riot");
    }

    // Single test for all env-var scenarios: the variables are process
    // globals, so splitting these across #[test] functions would race.
    #[test]
    fn from_env_requires_api_key() {
        env::remove_var("GREYNOISE_API_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingApiKey)
        ));

        env::set_var("GREYNOISE_API_KEY", "  ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingApiKey)
        ));

        env::set_var("GREYNOISE_API_KEY", "gn-test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key.expose(), "gn-test-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.mongo_db, DEFAULT_MONGO_DB);
        assert_eq!(config.collection, DEFAULT_COLLECTION);
        env::remove_var("GREYNOISE_API_KEY");
    }

    #[test]
    fn debug_does_not_leak_api_key() {
        let config = Config::new("gn-super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("gn-super-secret"));
    }
}
