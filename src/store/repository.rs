use std::collections::BTreeMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::store::record::StringRecord;
use crate::types::StringId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("String already exists in the system")]
    AlreadyExists(StringId),
    #[error("String does not exist in the system")]
    NotFound,
}

/// Content-addressed in-memory collection of analyzed records.
///
/// At most one record exists per id. The uniqueness check and the insert
/// run under a single write lock, so a concurrent insert of the same
/// identity cannot interleave; reads take snapshots and never observe a
/// partially applied mutation.
#[derive(Debug, Default)]
pub struct StringRepository {
    records: RwLock<BTreeMap<StringId, StringRecord>>,
}

impl StringRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, failing if its identity is already present.
    pub fn insert(&self, record: StringRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &StringId) -> Option<StringRecord> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.get(id).cloned()
    }

    /// Re-derive the identity from the value, then look it up.
    pub fn get_by_value(&self, value: &str) -> Option<StringRecord> {
        self.get(&StringId::from_value(value))
    }

    /// Remove the record addressed by the value. No tombstones.
    pub fn remove_by_value(&self, value: &str) -> Result<StringRecord, StoreError> {
        let id = StringId::from_value(value);
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.remove(&id).ok_or(StoreError::NotFound)
    }

    /// Snapshot of all records, in id order.
    pub fn all(&self) -> Vec<StringRecord> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
