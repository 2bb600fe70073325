//! Error types for Tablekit core.

use thiserror::Error;

/// Errors raised while encoding or decoding stored rows.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("unsupported row version: {0}")]
    UnsupportedVersion(u64),

    #[error("primary key mismatch: row says {stored}, slot is {expected}")]
    PrimaryKeyMismatch { stored: u64, expected: u64 },
}

/// Validation errors for keys and values, raised at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is {0} characters long, at most 13 allowed")]
    NameTooLong(usize),

    #[error("invalid character {ch:?} at position {pos} in name")]
    InvalidNameChar { ch: char, pos: usize },

    #[error("thirteenth character {0:?} in name must be one of .12345abcdefghij")]
    InvalidThirteenthChar(char),

    #[error("name {0:?} ends with '.'")]
    TrailingDot(String),

    #[error("invalid symbol code {0:?}: expected 1-7 uppercase letters")]
    InvalidSymbolCode(String),

    #[error("malformed symbol {0:?}: expected \"<precision>,<CODE>\"")]
    InvalidSymbolFormat(String),
}
