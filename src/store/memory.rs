//! In-memory record store
//!
//! Records live in a `Vec` in insertion order. Lookups are linear scans;
//! the collections this serves are small.

use std::collections::BTreeMap;

use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordId};

/// Ordered collection of records with server-assigned ids
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single record with id 0
    pub fn with_seed(content: impl Into<String>) -> Self {
        Self {
            records: vec![Record::new(0, content)],
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of all records in insertion order
    pub fn list_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Id-to-content view of the store, ordered by id
    pub fn snapshot_map(&self) -> BTreeMap<RecordId, String> {
        self.records
            .iter()
            .map(|r| (r.id, r.content.clone()))
            .collect()
    }

    /// Fetch one record by id
    pub fn get(&self, id: RecordId) -> StoreResult<Record> {
        self.position(id)
            .map(|idx| self.records[idx].clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a record with the next id and return it
    pub fn create(&mut self, content: impl Into<String>) -> Record {
        let record = Record::new(self.next_id(), content);
        self.records.push(record.clone());
        record
    }

    /// Replace the record at `id` with a new record carrying the same id
    pub fn replace(&mut self, id: RecordId, content: impl Into<String>) -> StoreResult<Record> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        let updated = Record::new(id, content);
        self.records[idx] = updated.clone();
        Ok(updated)
    }

    /// Overwrite content only when a value is supplied
    ///
    /// `Some("")` is a real value and clears the content.
    pub fn update_partial(&mut self, id: RecordId, content: Option<String>) -> StoreResult<Record> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        let record = &mut self.records[idx];
        if let Some(content) = content {
            record.content = content;
        }
        Ok(record.clone())
    }

    /// Remove one record, keeping the order of the rest
    pub fn delete(&mut self, id: RecordId) -> StoreResult<()> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.records.remove(idx);
        Ok(())
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// `max(existing ids) + 1`, or 0 for an empty store.
    ///
    /// Not a counter: removing the highest id frees it for reuse.
    fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
