//! GreyNoise RIOT to MongoDB ETL connector.
//!
//! A thin three-stage pipeline: extract one snapshot from the GreyNoise
//! API, pass it through an (identity) transform stage, and load it into
//! MongoDB as a single document tagged with fetch and ingestion metadata.
//!
//! Every stage sits behind a trait so the pipeline can be exercised
//! without network or database access:
//!
//! - [`Source`](traits::source::Source) - where records come from
//!   ([`RiotSource`] in production, [`MockSource`](testing::MockSource)
//!   in tests)
//! - [`Transform`](traits::transform::Transform) - payload reshaping
//!   ([`Passthrough`] for this source)
//! - [`DocumentStore`](traits::store::DocumentStore) - where records go
//!   ([`MongoStore`] in production, [`MemoryStore`] in tests)
//!
//! There is no scheduler, no retry, and no batching: one invocation is
//! one complete run, and any stage failure is terminal.
//!
//! # Modules
//!
//! - [`config`] - Environment-sourced configuration
//! - [`error`] - Per-stage error types
//! - [`pipeline`] - The extract → transform → load orchestration
//! - [`sources`] - Source implementations
//! - [`stores`] - Document store implementations
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod pipeline;
pub mod security;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::Config;
pub use error::{ConfigError, ExtractError, LoadError, PipelineError, Stage};
pub use pipeline::{load, run};
pub use security::SecretString;
pub use sources::RiotSource;
pub use stores::{MemoryStore, MongoStore};
pub use testing::{MockFailure, MockSource};
pub use traits::{
    source::Source,
    store::{DocumentStore, StoreConnection},
    transform::{Passthrough, Transform},
};
pub use types::{ensure_object, IngestionMetadata, RunReport, METADATA_VERSION, SOURCE_NAME};

// Re-export the client so binaries only need one dependency
pub use greynoise_client::{FetchResult, GreyNoiseClient, GreyNoiseError};
