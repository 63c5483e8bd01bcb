//! Run a full pipeline pass: extract → transform → tag → load.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::PipelineError;
use crate::pipeline::load;
use crate::traits::{source::Source, store::DocumentStore, transform::Transform};
use crate::types::{ensure_object, RunReport};

/// Execute one complete pipeline run.
///
/// The configuration must already be resolved; this function never
/// reads the environment. Stages run strictly in sequence on the
/// calling task; the first failure aborts the run and is returned
/// tagged with its stage. On success exactly one document has been
/// inserted, carrying the payload plus `http` and `etl` metadata
/// blocks.
pub async fn run<S, T, D>(
    config: &Config,
    source: &S,
    transform: &T,
    store: &D,
) -> Result<RunReport, PipelineError>
where
    S: Source,
    T: Transform,
    D: DocumentStore,
{
    info!(source = source.name(), url = %config.api_url, "extracting");
    let fetched = source.fetch().await?;
    info!(status_code = fetched.status_code, "extract complete");

    let http_meta = fetched.http_meta();
    let (status_code, fetched_at) = (fetched.status_code, fetched.fetched_at);

    let payload = transform.transform(fetched.payload);
    debug!(transform = transform.name(), "transform complete");

    let mut record = ensure_object(payload);
    record.insert("http".to_string(), http_meta);

    let meta = load(
        store,
        &Value::Object(record),
        &config.mongo_db,
        &config.collection,
    )
    .await?;

    Ok(RunReport {
        status_code,
        fetched_at,
        ingested_at: meta.ingested_at,
    })
}
