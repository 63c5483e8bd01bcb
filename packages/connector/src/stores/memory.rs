//! In-memory store implementation for testing and development.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoadError;
use crate::traits::store::{DocumentStore, StoreConnection};

/// A document captured by the memory store.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub database: String,
    pub collection: String,
    pub document: Value,
}

#[derive(Default)]
struct MemoryInner {
    documents: RwLock<Vec<StoredDocument>>,
    opened: AtomicUsize,
    closed: AtomicUsize,
}

/// In-memory document store.
///
/// Tracks connection acquisitions and releases so tests can assert the
/// loader balances them, and keeps every inserted document for
/// inspection. Failure switches simulate an unreachable store or a
/// rejected write. Not suitable for production: data is lost on exit.
#[derive(Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
    fail_connect: bool,
    fail_insert: bool,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `connect` call fail.
    pub fn fail_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    /// Make every insert fail after a successful connect.
    pub fn fail_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    /// Number of documents inserted so far.
    pub fn document_count(&self) -> usize {
        self.inner.documents.read().unwrap().len()
    }

    /// Snapshot of every inserted document.
    pub fn documents(&self) -> Vec<StoredDocument> {
        self.inner.documents.read().unwrap().clone()
    }

    /// Number of connections handed out.
    pub fn opened(&self) -> usize {
        self.inner.opened.load(Ordering::SeqCst)
    }

    /// Number of connections released.
    pub fn closed(&self) -> usize {
        self.inner.closed.load(Ordering::SeqCst)
    }
}

/// Connection handle into a [`MemoryStore`].
pub struct MemoryConnection {
    inner: Arc<MemoryInner>,
    fail_insert: bool,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    type Connection = MemoryConnection;

    async fn connect(&self) -> Result<MemoryConnection, LoadError> {
        if self.fail_connect {
            return Err(LoadError::Connection(
                "memory store: connect disabled".into(),
            ));
        }

        self.inner.opened.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryConnection {
            inner: self.inner.clone(),
            fail_insert: self.fail_insert,
        })
    }
}

#[async_trait]
impl StoreConnection for MemoryConnection {
    async fn insert_document(
        &self,
        database: &str,
        collection: &str,
        document: &Value,
    ) -> Result<(), LoadError> {
        if self.fail_insert {
            return Err(LoadError::Write("memory store: insert disabled".into()));
        }

        self.inner.documents.write().unwrap().push(StoredDocument {
            database: database.to_string(),
            collection: collection.to_string(),
            document: document.clone(),
        });
        Ok(())
    }

    async fn close(self) {
        self.inner.closed.fetch_add(1, Ordering::SeqCst);
    }
}
