//! # Tablekit Core
//!
//! Pure primitives for Tablekit: names, symbols, scopes, records, and the
//! canonical row encoding.
//!
//! This crate contains no I/O and no storage. It defines what a key and a
//! value must provide before a table will accept them.
//!
//! ## Key Types
//!
//! - [`Name`] - Up to 13 base32 characters packed into a `u64`
//! - [`Symbol`] - Precision plus an uppercase code, e.g. `4,EOS`
//! - [`Scope`] / [`TableId`] - Where a table lives
//! - [`Record`] - The persisted `{key, value}` pair
//! - [`PrimaryKey`] / [`TableValue`] - Capabilities required of keys and values
//!
//! ## Canonicalization
//!
//! Rows are encoded as deterministic CBOR. See [`canonical`].

pub mod canonical;
pub mod error;
pub mod name;
pub mod record;
pub mod scope;
pub mod symbol;

pub use canonical::{decode_row, encode_row, ROW_VERSION};
pub use error::{CoreError, ValidationError};
pub use name::Name;
pub use record::{PrimaryKey, Record, TableValue};
pub use scope::{Scope, TableId};
pub use symbol::{Symbol, SymbolCode};
