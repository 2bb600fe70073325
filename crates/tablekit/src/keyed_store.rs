//! KeyedStore: an insert-only table keyed by a projected 64-bit primary key.
//!
//! The store owns its table address and a handle to the backend. Nothing is
//! global: two `KeyedStore`s over the same backend but different scopes never
//! see each other's rows.

use std::marker::PhantomData;
use std::sync::Arc;

use tablekit_core::{decode_row, encode_row, PrimaryKey, Record, Scope, TableId, TableValue};
use tablekit_store::{InsertResult, Store};

use crate::config::ContractConfig;
use crate::error::{Result, TablekitError};

/// A scoped, insert-only table of `Record<K, V>`.
pub struct KeyedStore<K, V, S> {
    store: Arc<S>,
    table: TableId,
    config: ContractConfig,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V, S> KeyedStore<K, V, S>
where
    K: PrimaryKey,
    V: TableValue,
    S: Store,
{
    /// Open the table `config.table` within `scope`.
    pub fn new(store: Arc<S>, scope: Scope, config: ContractConfig) -> Self {
        let table = scope.table(config.table);
        Self {
            store,
            table,
            config,
            _marker: PhantomData,
        }
    }

    /// The table this store writes to.
    pub fn table(&self) -> &TableId {
        &self.table
    }

    pub fn scope(&self) -> Scope {
        self.table.scope()
    }

    /// The backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Insert a new record.
    ///
    /// Fails with `InvalidValue` before touching the backend if the value is
    /// malformed, and with `DuplicateKey` if the projected key is taken. On
    /// failure nothing is written.
    pub async fn save(&self, id: K, value: V) -> Result<()> {
        value.validate()?;

        let record = Record::new(id, value);
        let primary_key = record.primary_key();
        let row = encode_row(&record)?;

        match self.store.insert_row(&self.table, primary_key, &row).await? {
            InsertResult::Inserted => {
                tracing::debug!(
                    table = %self.table,
                    primary_key,
                    key = ?record.key,
                    "saved record"
                );
                Ok(())
            }
            InsertResult::Duplicate => {
                tracing::warn!(table = %self.table, primary_key, "rejected duplicate key");
                Err(TablekitError::DuplicateKey {
                    table: self.table,
                    primary_key,
                })
            }
        }
    }

    /// Read a record back by primary key.
    ///
    /// This is an inspection path for tooling and tests. It is not an action.
    pub async fn get(&self, primary_key: u64) -> Result<Option<Record<K, V>>> {
        let Some(row) = self.store.get_row(&self.table, primary_key).await? else {
            return Ok(None);
        };

        let record: Record<K, V> = decode_row(&row)?;
        if record.primary_key() != primary_key {
            return Err(tablekit_core::CoreError::PrimaryKeyMismatch {
                stored: record.primary_key(),
                expected: primary_key,
            }
            .into());
        }
        if self.config.validate_on_read {
            record.value.validate()?;
        }
        Ok(Some(record))
    }

    /// Read a record back by its key.
    pub async fn get_by_key(&self, key: &K) -> Result<Option<Record<K, V>>> {
        self.get(key.primary_key()).await
    }

    /// Check whether a primary key is taken.
    pub async fn contains(&self, primary_key: u64) -> Result<bool> {
        Ok(self.store.has_row(&self.table, primary_key).await?)
    }

    /// Number of records in the table.
    pub async fn len(&self) -> Result<u64> {
        Ok(self.store.row_count(&self.table).await?)
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
