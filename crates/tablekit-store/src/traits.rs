//! Store trait: the abstract interface for row persistence.
//!
//! Rows are opaque bytes addressed by `(TableId, primary_key)`. Encoding and
//! key projection happen above this layer, so a backend only has to keep
//! slots unique.

use async_trait::async_trait;
use tablekit_core::TableId;

use crate::error::Result;

/// Result of inserting a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Row was written.
    Inserted,
    /// The slot was already occupied; nothing was written.
    Duplicate,
}

/// The Store trait: async interface for row persistence.
///
/// All methods are async so SQLite work can run on the blocking pool.
///
/// # Design Notes
///
/// - **Insert-only**: there is no update or delete. An occupied slot is never
///   overwritten.
/// - **Atomic check-and-write**: the occupancy check and the write happen
///   under one lock or one statement.
/// - **Scoped**: slots in different tables never interact.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a row into an empty slot.
    ///
    /// # Returns
    /// - `Inserted` if the slot was empty and the row is now stored.
    /// - `Duplicate` if the slot was occupied. The existing row is untouched.
    async fn insert_row(&self, table: &TableId, primary_key: u64, row: &[u8])
        -> Result<InsertResult>;

    /// Read the row in a slot.
    async fn get_row(&self, table: &TableId, primary_key: u64) -> Result<Option<Vec<u8>>>;

    /// Check whether a slot is occupied.
    async fn has_row(&self, table: &TableId, primary_key: u64) -> Result<bool>;

    /// Number of rows in a table.
    async fn row_count(&self, table: &TableId) -> Result<u64>;
}

#[async_trait]
impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    async fn insert_row(
        &self,
        table: &TableId,
        primary_key: u64,
        row: &[u8],
    ) -> Result<InsertResult> {
        (**self).insert_row(table, primary_key, row).await
    }

    async fn get_row(&self, table: &TableId, primary_key: u64) -> Result<Option<Vec<u8>>> {
        (**self).get_row(table, primary_key).await
    }

    async fn has_row(&self, table: &TableId, primary_key: u64) -> Result<bool> {
        (**self).has_row(table, primary_key).await
    }

    async fn row_count(&self, table: &TableId) -> Result<u64> {
        (**self).row_count(table).await
    }
}
