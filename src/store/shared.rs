//! Shared store handle
//!
//! Handlers run concurrently on the tokio runtime, so every store operation
//! goes through one exclusive lock acquisition. Reads share the lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::errors::StoreResult;
use super::memory::RecordStore;
use super::record::{Record, RecordId};

/// Cloneable, lock-guarded handle to a `RecordStore`
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<RecordStore>>,
}

impl SharedStore {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn list_all(&self) -> Vec<Record> {
        self.inner.read().await.list_all()
    }

    pub async fn snapshot_map(&self) -> BTreeMap<RecordId, String> {
        self.inner.read().await.snapshot_map()
    }

    pub async fn get(&self, id: RecordId) -> StoreResult<Record> {
        self.inner.read().await.get(id)
    }

    pub async fn create(&self, content: impl Into<String>) -> Record {
        self.inner.write().await.create(content)
    }

    pub async fn replace(&self, id: RecordId, content: impl Into<String>) -> StoreResult<Record> {
        self.inner.write().await.replace(id, content)
    }

    pub async fn update_partial(
        &self,
        id: RecordId,
        content: Option<String>,
    ) -> StoreResult<Record> {
        self.inner.write().await.update_partial(id, content)
    }

    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.inner.write().await.delete(id)
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear()
    }
}

impl From<RecordStore> for SharedStore {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}
