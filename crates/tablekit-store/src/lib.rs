//! # Tablekit Store
//!
//! Storage abstraction for Tablekit. Provides a trait-based interface for
//! row persistence with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store abstracts row storage behind the [`Store`] trait, so a keyed
//! table does not care where its rows live. The durable implementation is
//! [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`InsertResult`] - Result of inserting a row
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablekit_core::{Name, Scope};
//! use tablekit_store::{InsertResult, SqliteStore, Store};
//!
//! async fn example() {
//!     let store = SqliteStore::open("tables.db").unwrap();
//!     let table = Scope::own(Name::new("alice").unwrap()).table(Name::new("mytable").unwrap());
//!
//!     let result = store.insert_row(&table, 42, b"row bytes").await.unwrap();
//!     assert_eq!(result, InsertResult::Inserted);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Insert-only**: an occupied slot returns `Duplicate` and is left as is
//! - **Opaque rows**: encoding is the caller's concern
//! - **Scoped slots**: rows are addressed by `(TableId, primary_key)`

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{InsertResult, Store};
