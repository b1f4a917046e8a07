/// In-memory document store
///
/// Backs tests and demos; documents live in a map behind an RwLock and
/// are gone when the process exits.

use super::{DocumentStore, StorageResult};
use crate::types::GraphId;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Map-backed document store
pub struct MemoryStore {
    documents: RwLock<HashMap<GraphId, JsonValue>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: GraphId) -> StorageResult<Option<JsonValue>> {
        Ok(self.documents.read().unwrap().get(&id).cloned())
    }

    async fn put(&self, id: GraphId, document: JsonValue) -> StorageResult<()> {
        self.documents.write().unwrap().insert(id, document);
        Ok(())
    }

    async fn allocate_id(&self) -> StorageResult<GraphId> {
        Ok(GraphId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }
}
