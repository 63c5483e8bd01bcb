//! Record types shared across the pipeline stages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Connector identifier written into every stored record.
pub const SOURCE_NAME: &str = "greynoise_riot";

/// Schema marker for the `etl` metadata block.
pub const METADATA_VERSION: u32 = 1;

/// Metadata the loader attaches to a record at insert time.
///
/// `ingested_at` is captured inside the load stage, so it is always at
/// or after the extractor's fetch timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionMetadata {
    pub source: String,
    pub ingested_at: DateTime<Utc>,
    pub version: u32,
}

impl IngestionMetadata {
    /// Metadata stamped with the current time.
    pub fn now() -> Self {
        Self {
            source: SOURCE_NAME.to_string(),
            ingested_at: Utc::now(),
            version: METADATA_VERSION,
        }
    }

    /// The JSON object stored under the record's `etl` key.
    pub fn to_json(&self) -> Value {
        json!({
            "source": self.source,
            "ingested_at": self.ingested_at,
            "version": self.version,
        })
    }
}

/// Coerce a payload into a JSON object so metadata keys can be attached.
///
/// The API may return an array (dataset listings) instead of an object;
/// arrays and scalars are wrapped under a `data` key. Object payloads
/// pass through untouched.
pub fn ensure_object(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// HTTP status of the extract response.
    pub status_code: u16,

    /// When the extract response was decoded.
    pub fetched_at: DateTime<Utc>,

    /// When the record was inserted.
    pub ingested_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_carries_source_and_version() {
        let meta = IngestionMetadata::now();
        assert_eq!(meta.source, "greynoise_riot");
        assert_eq!(meta.version, 1);

        let value = meta.to_json();
        assert_eq!(value["source"], "greynoise_riot");
        assert_eq!(value["version"], 1);
        assert!(value["ingested_at"].is_string());
    }

    #[test]
    fn object_payloads_pass_through() {
        let record = ensure_object(json!({"ip": "8.8.8.8", "riot": true}));
        assert_eq!(record["ip"], "8.8.8.8");
        assert_eq!(record["riot"], true);
        assert!(record.get("data").is_none());
    }

    #[test]
    fn array_and_scalar_payloads_are_wrapped() {
        let record = ensure_object(json!([{"ip": "8.8.8.8"}]));
        assert!(record["data"].is_array());

        let record = ensure_object(json!(42));
        assert_eq!(record["data"], 42);
    }
}
