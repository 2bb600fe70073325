//! Canonical CBOR encoding of stored rows.
//!
//! A row is a CBOR map with small integer keys, written in key order:
//!
//! | key | field |
//! |-----|-------|
//! | 0 | format version |
//! | 1 | primary key |
//! | 2 | record key |
//! | 3 | record value |
//!
//! ciborium writes definite lengths and the shortest integer forms, so a
//! record always produces the same bytes.

use ciborium::value::Value;

use crate::error::CoreError;
use crate::record::{PrimaryKey, Record, TableValue};

/// Current row format version.
pub const ROW_VERSION: u64 = 1;

mod keys {
    pub const VERSION: u64 = 0;
    pub const PRIMARY_KEY: u64 = 1;
    pub const KEY: u64 = 2;
    pub const VALUE: u64 = 3;
}

/// Encode a record to its canonical row bytes.
pub fn encode_row<K, V>(record: &Record<K, V>) -> Result<Vec<u8>, CoreError>
where
    K: PrimaryKey,
    V: TableValue,
{
    let key = Value::serialized(&record.key).map_err(|e| CoreError::Encoding(e.to_string()))?;
    let value =
        Value::serialized(&record.value).map_err(|e| CoreError::Encoding(e.to_string()))?;

    let map = Value::Map(vec![
        (Value::Integer(keys::VERSION.into()), Value::Integer(ROW_VERSION.into())),
        (
            Value::Integer(keys::PRIMARY_KEY.into()),
            Value::Integer(record.primary_key().into()),
        ),
        (Value::Integer(keys::KEY.into()), key),
        (Value::Integer(keys::VALUE.into()), value),
    ]);

    let mut buf = Vec::new();
    ciborium::into_writer(&map, &mut buf).map_err(|e| CoreError::Encoding(e.to_string()))?;
    Ok(buf)
}

/// Decode row bytes back into a record.
///
/// The stored primary key must match the projection of the decoded key.
pub fn decode_row<K: PrimaryKey, V: TableValue>(bytes: &[u8]) -> Result<Record<K, V>, CoreError> {
    let value: Value =
        ciborium::from_reader(bytes).map_err(|e| CoreError::Decoding(e.to_string()))?;
    let Value::Map(entries) = value else {
        return Err(CoreError::Decoding("row is not a map".into()));
    };

    let field = |k: u64| {
        entries
            .iter()
            .find(|(key, _)| key.as_integer() == Some(k.into()))
            .map(|(_, v)| v)
            .ok_or_else(|| CoreError::Decoding(format!("missing field {k}")))
    };

    let version = as_u64(field(keys::VERSION)?)?;
    if version != ROW_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }
    let stored = as_u64(field(keys::PRIMARY_KEY)?)?;

    let key: K = field(keys::KEY)?
        .deserialized()
        .map_err(|e| CoreError::Decoding(e.to_string()))?;
    let value: V = field(keys::VALUE)?
        .deserialized()
        .map_err(|e| CoreError::Decoding(e.to_string()))?;

    let record = Record::new(key, value);
    if record.primary_key() != stored {
        return Err(CoreError::PrimaryKeyMismatch {
            stored,
            expected: record.primary_key(),
        });
    }
    Ok(record)
}

fn as_u64(value: &Value) -> Result<u64, CoreError> {
    value
        .as_integer()
        .and_then(|i| u64::try_from(i).ok())
        .ok_or_else(|| CoreError::Decoding("expected unsigned integer".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Name, Symbol};

    #[test]
    fn test_encoding_is_deterministic() {
        let record = Record::new(42u64, "hello".to_string());
        assert_eq!(encode_row(&record).unwrap(), encode_row(&record).unwrap());
    }

    #[test]
    fn test_known_bytes() {
        let bytes = encode_row(&Record::new(1u64, "a".to_string())).unwrap();
        // {0: 1, 1: 1, 2: 1, 3: "a"}
        assert_eq!(hex::encode(bytes), "a4000101010201036161");
    }

    #[test]
    fn test_name_record_decodes() {
        let record = Record::new(Name::new("alice").unwrap(), "note".to_string());
        let bytes = encode_row(&record).unwrap();
        let back: Record<Name, String> = decode_row(&bytes).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_symbol_record_decodes() {
        let record = Record::new(7u64, Symbol::new(4, "EOS").unwrap());
        let bytes = encode_row(&record).unwrap();
        let back: Record<u64, Symbol> = decode_row(&bytes).unwrap();
        assert_eq!(back.value.to_string(), "4,EOS");
    }

    #[test]
    fn test_decode_rejects_wrong_value_type() {
        let bytes = encode_row(&Record::new(7u64, "not a symbol".to_string())).unwrap();
        assert!(matches!(
            decode_row::<u64, Symbol>(&bytes),
            Err(CoreError::Decoding(_))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_row::<u64, String>(&[0xff, 0x00]).is_err());
    }
}
