/// RocksDB document store
///
/// Key space design:
/// - Document: g:{namespace}:{id} → JSON bytes
/// - Counter:  c:{namespace} → max allocated id
///
/// The namespace lets several logical graph collections share one
/// database directory. The counter lives next to the documents so id
/// allocation survives reopening the store.

use super::error::StorageError;
use super::{DocumentStore, StorageResult};
use crate::types::GraphId;
use async_trait::async_trait;
use rocksdb::{Options, DB};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// RocksDB-backed document store
pub struct RocksDbStore {
    /// RocksDB database instance
    db: Arc<DB>,

    /// Collection name (namespace)
    namespace: String,

    /// Serializes counter read-modify-write cycles within this handle
    id_lock: Mutex<()>,
}

impl RocksDbStore {
    /// Open (or create) a store at the given directory
    pub fn new<P: AsRef<Path>>(path: P, namespace: impl Into<String>) -> StorageResult<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open(&opts, path)?;

        Ok(Self {
            db: Arc::new(db),
            namespace: namespace.into(),
            id_lock: Mutex::new(()),
        })
    }

    /// Another view over the same database under a different namespace
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            db: Arc::clone(&self.db),
            namespace: namespace.into(),
            id_lock: Mutex::new(()),
        }
    }

    fn make_key(&self, id: GraphId) -> String {
        format!("g:{}:{}", self.namespace, id)
    }

    fn make_counter_key(&self) -> String {
        format!("c:{}", self.namespace)
    }

    fn read_counter(&self) -> StorageResult<u64> {
        match self.db.get(self.make_counter_key().as_bytes())? {
            Some(bytes) if bytes.len() == 8 => {
                let mut raw = [0u8; 8];
                raw.copy_from_slice(&bytes);
                Ok(u64::from_le_bytes(raw))
            }
            Some(_) => Err(StorageError::Other(format!(
                "corrupt id counter for namespace '{}'",
                self.namespace
            ))),
            None => Ok(0),
        }
    }
}

#[async_trait]
impl DocumentStore for RocksDbStore {
    async fn get(&self, id: GraphId) -> StorageResult<Option<JsonValue>> {
        let key = self.make_key(id);
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, id: GraphId, document: JsonValue) -> StorageResult<()> {
        let key = self.make_key(id);
        let bytes = serde_json::to_vec(&document)?;
        self.db.put(key.as_bytes(), bytes)?;
        Ok(())
    }

    async fn allocate_id(&self) -> StorageResult<GraphId> {
        let _guard = self.id_lock.lock().unwrap();
        let next = self.read_counter()? + 1;
        self.db
            .put(self.make_counter_key().as_bytes(), next.to_le_bytes())?;
        Ok(GraphId(next))
    }
}
