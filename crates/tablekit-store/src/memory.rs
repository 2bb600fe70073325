//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tablekit_core::TableId;

use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    /// Rows indexed by (table, primary key).
    rows: RwLock<HashMap<(TableId, u64), Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<(TableId, u64), Vec<u8>>>> {
        self.rows
            .read()
            .map_err(|e| StoreError::InvalidData(format!("lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<(TableId, u64), Vec<u8>>>> {
        self.rows
            .write()
            .map_err(|e| StoreError::InvalidData(format!("lock poisoned: {}", e)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_row(
        &self,
        table: &TableId,
        primary_key: u64,
        row: &[u8],
    ) -> Result<InsertResult> {
        let mut rows = self.write()?;

        match rows.entry((*table, primary_key)) {
            std::collections::hash_map::Entry::Occupied(_) => Ok(InsertResult::Duplicate),
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(row.to_vec());
                Ok(InsertResult::Inserted)
            }
        }
    }

    async fn get_row(&self, table: &TableId, primary_key: u64) -> Result<Option<Vec<u8>>> {
        let rows = self.read()?;
        Ok(rows.get(&(*table, primary_key)).cloned())
    }

    async fn has_row(&self, table: &TableId, primary_key: u64) -> Result<bool> {
        let rows = self.read()?;
        Ok(rows.contains_key(&(*table, primary_key)))
    }

    async fn row_count(&self, table: &TableId) -> Result<u64> {
        let rows = self.read()?;
        Ok(rows.keys().filter(|(t, _)| t == table).count() as u64)
    }
}
