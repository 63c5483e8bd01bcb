//! Document store implementations.
//!
//! Available backends:
//! - `MongoStore` - MongoDB (production)
//! - `MemoryStore` - in-memory (testing and development)

pub mod memory;
pub mod mongo;

pub use memory::{MemoryStore, StoredDocument};
pub use mongo::MongoStore;

// Re-export from traits for convenience
pub use crate::traits::store::{DocumentStore, StoreConnection};
