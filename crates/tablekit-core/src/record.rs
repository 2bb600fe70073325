//! Records and the key/value capabilities a table needs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::ValidationError;
use crate::name::Name;
use crate::symbol::Symbol;

/// A key type with a deterministic 64-bit projection.
///
/// Two keys that are not equal must never project to the same value.
pub trait PrimaryKey: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Type name used in ABI descriptions.
    const ABI_TYPE: &'static str;

    /// The 64-bit primary key used to index the record.
    fn primary_key(&self) -> u64;
}

impl PrimaryKey for u64 {
    const ABI_TYPE: &'static str = "uint64";

    fn primary_key(&self) -> u64 {
        *self
    }
}

impl PrimaryKey for Name {
    const ABI_TYPE: &'static str = "name";

    fn primary_key(&self) -> u64 {
        self.value()
    }
}

/// A value type that can re-check its own validity.
pub trait TableValue: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Type name used in ABI descriptions.
    const ABI_TYPE: &'static str;

    /// Field name of the value in the stored struct and the action arguments.
    const FIELD: &'static str;

    /// Build a value from its text form, applying the validity rule.
    fn parse(s: &str) -> Result<Self, ValidationError>;

    fn validate(&self) -> Result<(), ValidationError>;
}

impl TableValue for String {
    const ABI_TYPE: &'static str = "string";
    const FIELD: &'static str = "text";

    fn parse(s: &str) -> Result<Self, ValidationError> {
        Ok(s.to_string())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl TableValue for Symbol {
    const ABI_TYPE: &'static str = "symbol";
    const FIELD: &'static str = "sym";

    fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Symbol::validate(self)
    }
}

/// The persisted unit: a key and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<K, V> {
    pub key: K,
    pub value: V,
}

impl<K: PrimaryKey, V> Record<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn primary_key(&self) -> u64 {
        self.key.primary_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_projection_is_identity() {
        assert_eq!(42u64.primary_key(), 42);
        assert_eq!(u64::MAX.primary_key(), u64::MAX);
    }

    #[test]
    fn test_name_projection() {
        let name = Name::new("alice").unwrap();
        assert_eq!(name.primary_key(), 3773036822876127232);
        assert_eq!(Record::new(name, "note".to_string()).primary_key(), name.value());
    }

    #[test]
    fn test_value_fields() {
        assert_eq!(<String as TableValue>::FIELD, "text");
        assert_eq!(<Symbol as TableValue>::FIELD, "sym");
        assert!("anything".to_string().validate().is_ok());
        assert!(Symbol::new(4, "EOS").unwrap().validate().is_ok());
        assert_eq!(<Symbol as TableValue>::parse("4,EOS").unwrap().raw(), 1397703940);
        assert!(<Symbol as TableValue>::parse("4,eos").is_err());
    }
}
