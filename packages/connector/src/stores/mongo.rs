//! MongoDB store implementation.

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::traits::store::{DocumentStore, StoreConnection};

/// MongoDB-backed document store.
///
/// Holds only the connection URI; a fresh client is built per
/// [`connect`](DocumentStore::connect) call and shut down on
/// [`close`](StoreConnection::close). No pooling across runs: the
/// pipeline opens one connection, inserts one document, and releases it.
pub struct MongoStore {
    uri: String,
}

impl MongoStore {
    /// Create a store targeting the given connection URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// An open MongoDB client handle.
pub struct MongoConnection {
    client: Client,
}

#[async_trait]
impl DocumentStore for MongoStore {
    type Connection = MongoConnection;

    async fn connect(&self) -> Result<MongoConnection, LoadError> {
        debug!(uri = %self.uri, "connecting to MongoDB");
        let client = Client::with_uri_str(&self.uri)
            .await
            .map_err(|e| LoadError::Connection(Box::new(e)))?;
        Ok(MongoConnection { client })
    }
}

#[async_trait]
impl StoreConnection for MongoConnection {
    async fn insert_document(
        &self,
        database: &str,
        collection: &str,
        document: &Value,
    ) -> Result<(), LoadError> {
        let doc = mongodb::bson::to_document(document)
            .map_err(|e| LoadError::Write(Box::new(e)))?;

        self.client
            .database(database)
            .collection::<Document>(collection)
            .insert_one(doc)
            .await
            .map_err(|e| LoadError::Write(Box::new(e)))?;

        Ok(())
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}
