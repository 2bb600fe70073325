//! SQLite implementation of the Store trait.
//!
//! This is the durable storage backend. It uses rusqlite with bundled
//! SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tablekit_core::TableId;

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{InsertResult, Store};

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::info!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the connection on the blocking pool.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|e| {
                StoreError::Database(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                    Some(format!("mutex poisoned: {}", e)),
                ))
            })?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

/// SQLite integers are signed; u64 keys are stored by bit pattern.
fn to_sql(v: u64) -> i64 {
    v as i64
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_row(
        &self,
        table: &TableId,
        primary_key: u64,
        row: &[u8],
    ) -> Result<InsertResult> {
        let table = *table;
        let row = row.to_vec();

        self.with_conn(move |conn| {
            let changed = conn.execute(
                "INSERT INTO table_rows (owner, namespace, tbl, primary_key, payload)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT (owner, namespace, tbl, primary_key) DO NOTHING",
                params![
                    to_sql(table.owner.value()),
                    to_sql(table.namespace),
                    to_sql(table.table.value()),
                    to_sql(primary_key),
                    row,
                ],
            )?;

            Ok(if changed == 1 {
                InsertResult::Inserted
            } else {
                InsertResult::Duplicate
            })
        })
        .await
    }

    async fn get_row(&self, table: &TableId, primary_key: u64) -> Result<Option<Vec<u8>>> {
        let table = *table;

        self.with_conn(move |conn| {
            let row = conn
                .query_row(
                    "SELECT payload FROM table_rows
                     WHERE owner = ?1 AND namespace = ?2 AND tbl = ?3 AND primary_key = ?4",
                    params![
                        to_sql(table.owner.value()),
                        to_sql(table.namespace),
                        to_sql(table.table.value()),
                        to_sql(primary_key),
                    ],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(row)
        })
        .await
    }

    async fn has_row(&self, table: &TableId, primary_key: u64) -> Result<bool> {
        let table = *table;

        self.with_conn(move |conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM table_rows
                    WHERE owner = ?1 AND namespace = ?2 AND tbl = ?3 AND primary_key = ?4
                 )",
                params![
                    to_sql(table.owner.value()),
                    to_sql(table.namespace),
                    to_sql(table.table.value()),
                    to_sql(primary_key),
                ],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
        .await
    }

    async fn row_count(&self, table: &TableId) -> Result<u64> {
        let table = *table;

        self.with_conn(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM table_rows WHERE owner = ?1 AND namespace = ?2 AND tbl = ?3",
                params![
                    to_sql(table.owner.value()),
                    to_sql(table.namespace),
                    to_sql(table.table.value()),
                ],
                |row| row.get(0),
            )?;
            u64::try_from(count).map_err(|_| StoreError::InvalidData(format!("row count {count}")))
        })
        .await
    }
}
