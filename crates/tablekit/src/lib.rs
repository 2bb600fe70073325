//! # Tablekit
//!
//! Scoped, insert-only, primary-key-indexed tables behind a single `save`
//! action.
//!
//! ## Overview
//!
//! A [`Contract`] is deployed on an account and owns exactly one
//! [`KeyedStore`] in that account's own scope. The store accepts a record
//! only if its projected 64-bit primary key is free, and never overwrites.
//!
//! Three variants are provided:
//!
//! - [`Int64Contract`] - `u64` keys, text values
//! - [`NameContract`] - [`Name`] keys, text values
//! - [`SymbolContract`] - `u64` keys, [`Symbol`] values
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tablekit::store::SqliteStore;
//! use tablekit::{ContractConfig, Int64Contract, Name};
//!
//! async fn example() {
//!     let store = Arc::new(SqliteStore::open("tables.db").unwrap());
//!     let contract = Int64Contract::deploy(
//!         Name::new("intcontract").unwrap(),
//!         store,
//!         ContractConfig::default(),
//!     );
//!
//!     contract.save(42, "hello".to_string()).await.unwrap();
//!     assert!(contract.save(42, "world".to_string()).await.is_err());
//! }
//! ```
//!
//! ## Hosts
//!
//! A host that receives requests in wire form hands them to a contract
//! through the [`Dispatcher`] trait. Identity checks and commit or rollback
//! are the host's job.
//!
//! ## Re-exports
//!
//! - `tablekit::core` - Names, symbols, scopes, records
//! - `tablekit::store` - Storage abstraction and SQLite

pub mod abi;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod keyed_store;

// Re-export component crates
pub use tablekit_core as core;
pub use tablekit_store as store;

// Re-export main types for convenience
pub use abi::Abi;
pub use config::{ContractConfig, DEFAULT_TABLE};
pub use contract::{Contract, Int64Contract, NameContract, SymbolContract};
pub use dispatch::{ActionRequest, Dispatcher, SAVE_ACTION};
pub use error::{Result, TablekitError};
pub use keyed_store::KeyedStore;

// Re-export commonly used core types
pub use tablekit_core::{Name, PrimaryKey, Record, Scope, Symbol, SymbolCode, TableId, TableValue};
