//! Load stage - persist a tagged record into the document store.

use serde_json::Value;
use tracing::{error, info};

use crate::error::LoadError;
use crate::traits::store::{DocumentStore, StoreConnection};
use crate::types::{ensure_object, IngestionMetadata};

/// Insert one record into the named database and collection.
///
/// Acquires a connection, stamps a fresh [`IngestionMetadata`] onto a
/// copy of the record (the caller's record is untouched), performs a
/// single insert, and releases the connection before the insert result
/// is inspected, so the handle is closed on the failure path too.
///
/// Returns the metadata that was stamped, so the caller can report the
/// ingestion timestamp. No idempotency: calling this twice with the
/// same record inserts two distinct documents.
pub async fn load<D>(
    store: &D,
    record: &Value,
    database: &str,
    collection: &str,
) -> Result<IngestionMetadata, LoadError>
where
    D: DocumentStore,
{
    let conn = store.connect().await?;

    let meta = IngestionMetadata::now();
    let mut document = ensure_object(record.clone());
    document.insert("etl".to_string(), meta.to_json());

    let result = conn
        .insert_document(database, collection, &Value::Object(document))
        .await;
    conn.close().await;

    match result {
        Ok(()) => {
            info!(collection, "inserted 1 document");
            Ok(meta)
        }
        Err(e) => {
            error!(error = %e, "store write failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn stamps_metadata_without_mutating_the_input() {
        let store = MemoryStore::new();
        let record = json!({"ip": "8.8.8.8"});

        let meta = load(&store, &record, "db", "coll").await.unwrap();

        // caller's record untouched
        assert!(record.get("etl").is_none());

        let stored = &store.documents()[0].document;
        assert_eq!(stored["ip"], "8.8.8.8");
        assert_eq!(stored["etl"]["source"], meta.source);
        assert_eq!(stored["etl"]["version"], 1);
    }

    #[tokio::test]
    async fn closes_connection_when_insert_fails() {
        let store = MemoryStore::new().fail_insert();
        let result = load(&store, &json!({"ip": "8.8.8.8"}), "db", "coll").await;

        assert!(matches!(result, Err(LoadError::Write(_))));
        assert_eq!(store.opened(), 1);
        assert_eq!(store.closed(), 1);
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn a_record_defining_etl_is_overwritten() {
        let store = MemoryStore::new();
        let record = json!({"etl": "bogus", "ip": "8.8.8.8"});

        load(&store, &record, "db", "coll").await.unwrap();

        let stored = &store.documents()[0].document;
        assert!(stored["etl"].is_object());
        assert_eq!(stored["etl"]["version"], 1);
    }
}
