//! Storage traits for the load stage.
//!
//! The store is split into a factory (`DocumentStore`) and a connection
//! handle (`StoreConnection`) so the loader can guarantee the handle is
//! released on every exit path, and so tests can count acquisitions and
//! releases.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoadError;

/// A document store the pipeline can open connections to.
///
/// Implementations:
/// - `MongoStore` - MongoDB via connection URI
/// - `MemoryStore` - in-memory, for testing and development
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// The connection handle this store hands out.
    type Connection: StoreConnection;

    /// Acquire a connection handle.
    ///
    /// Failure here means no handle exists and nothing needs releasing.
    async fn connect(&self) -> Result<Self::Connection, LoadError>;
}

/// An open connection to a document store.
#[async_trait]
pub trait StoreConnection: Send + Sync {
    /// Insert one document into the named database and collection.
    async fn insert_document(
        &self,
        database: &str,
        collection: &str,
        document: &Value,
    ) -> Result<(), LoadError>;

    /// Release the connection. The loader calls this on every exit
    /// path, whether the insert succeeded or not.
    async fn close(self);
}
