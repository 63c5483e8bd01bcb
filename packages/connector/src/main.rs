//! GreyNoise RIOT ETL connector.
//!
//! Zero-argument binary: resolves configuration from the environment,
//! fetches one snapshot from the GreyNoise API, and inserts it into
//! MongoDB tagged with fetch and ingestion metadata. Exits 0 on
//! success, non-zero on any terminal error.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riot_connector::{pipeline, Config, MongoStore, Passthrough, RiotSource, Stage};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,riot_connector=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // Load environment variables from a local .env if present
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(stage = %Stage::Configure, error = %e, "ETL run failed");
            std::process::exit(1);
        }
    };

    let source = RiotSource::new(&config);
    let store = MongoStore::new(&config.mongo_uri);

    match pipeline::run(&config, &source, &Passthrough, &store).await {
        Ok(report) => {
            tracing::info!(
                status_code = report.status_code,
                database = %config.mongo_db,
                collection = %config.collection,
                "ETL complete"
            );
        }
        Err(e) => {
            tracing::error!(stage = %e.stage(), error = %e, "ETL run failed");
            std::process::exit(1);
        }
    }
}
