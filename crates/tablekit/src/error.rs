//! Error types for Tablekit.

use tablekit_core::{CoreError, Name, TableId, ValidationError};
use tablekit_store::StoreError;
use thiserror::Error;

/// Errors that can occur during table operations.
#[derive(Debug, Error)]
pub enum TablekitError {
    /// The primary key is already occupied in this table.
    #[error("duplicate key {primary_key} in table {table}")]
    DuplicateKey { table: TableId, primary_key: u64 },

    /// The value failed its own validity check.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] ValidationError),

    /// Row encoding or decoding error.
    #[error("row error: {0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The request named an action this contract does not have.
    #[error("unknown action: {0}")]
    UnknownAction(Name),

    /// The request was addressed to another account.
    #[error("request for {requested} delivered to {receiver}")]
    WrongReceiver { requested: Name, receiver: Name },

    /// Action arguments could not be decoded.
    #[error("cannot decode arguments: {0}")]
    Decode(String),
}

impl TablekitError {
    /// True if the request was rejected because the key was taken.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, TablekitError::DuplicateKey { .. })
    }

    /// True if the request was rejected because the value was malformed.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, TablekitError::InvalidValue(_))
    }
}

/// Result type for Tablekit operations.
pub type Result<T> = std::result::Result<T, TablekitError>;
