/// Document store abstraction
///
/// The core persists one JSON document per graph id and never talks to a
/// concrete storage technology directly; it is handed an implementation
/// of [`DocumentStore`]. Consistency across concurrent writers is the
/// implementation's concern, not the core's.

pub mod error;
pub mod memory;
pub mod rocksdb_store;

use crate::types::GraphId;
use async_trait::async_trait;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use rocksdb_store::RocksDbStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Keyed JSON document storage
///
/// Implementations must provide:
/// - `get`: fetch the document stored under an id, if any
/// - `put`: store or replace the document under an id
/// - `allocate_id`: hand out ids that never collide with stored documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a stored document
    ///
    /// # Returns
    /// * `Ok(Some(document))` if found
    /// * `Ok(None)` if not found
    /// * `Err(StorageError)` on storage errors
    async fn get(&self, id: GraphId) -> StorageResult<Option<JsonValue>>;

    /// Store or replace a document
    async fn put(&self, id: GraphId, document: JsonValue) -> StorageResult<()>;

    /// Allocate the next unused graph id
    ///
    /// Ids must never repeat over the lifetime of the stored data:
    /// persistent backends keep the allocation state next to the
    /// documents, so reopening a store continues where it left off
    /// instead of handing out ids that overwrite existing graphs.
    async fn allocate_id(&self) -> StorageResult<GraphId>;
}

/// Shared store handle
pub type SharedStore = Arc<dyn DocumentStore>;
