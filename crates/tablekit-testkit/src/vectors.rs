//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the key projections and the canonical row bytes, so
//! any tool reading a table directly can check itself against them.

use serde::Serialize;
use tablekit_core::{encode_row, Name, Record, Symbol};

/// A name and its encoded value.
#[derive(Debug, Clone, Serialize)]
pub struct NameVector {
    pub text: &'static str,
    /// Expected `u64` encoding (hex, big-endian).
    pub value_hex: &'static str,
}

/// A symbol and its packed form.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolVector {
    pub text: &'static str,
    pub raw: u64,
}

/// A record and its canonical row bytes.
#[derive(Debug, Clone, Serialize)]
pub struct RowVector {
    pub name: &'static str,
    pub primary_key: u64,
    /// Expected row bytes (hex).
    pub row_hex: &'static str,
}

pub fn name_vectors() -> Vec<NameVector> {
    vec![
        NameVector {
            text: "",
            value_hex: "0000000000000000",
        },
        NameVector {
            text: "a",
            value_hex: "3000000000000000",
        },
        NameVector {
            text: "1",
            value_hex: "0800000000000000",
        },
        NameVector {
            text: "alice",
            value_hex: "345c850000000000",
        },
        NameVector {
            text: "bob",
            value_hex: "3d0e000000000000",
        },
        NameVector {
            text: "eosio",
            value_hex: "5530ea0000000000",
        },
        NameVector {
            text: "eosio.token",
            value_hex: "5530ea033482a600",
        },
        NameVector {
            text: "mytable",
            value_hex: "97b263c540000000",
        },
        NameVector {
            text: "zzzzzzzzzzzzj",
            value_hex: "ffffffffffffffff",
        },
    ]
}

pub fn symbol_vectors() -> Vec<SymbolVector> {
    vec![
        SymbolVector {
            text: "4,EOS",
            raw: 1397703940,
        },
        SymbolVector {
            text: "2,USD",
            raw: 1146311938,
        },
        SymbolVector {
            text: "8,BTC",
            raw: 1129595400,
        },
    ]
}

pub fn row_vectors() -> Vec<(RowVector, Vec<u8>)> {
    vec![
        (
            RowVector {
                name: "int64 42 => hello",
                primary_key: 42,
                row_hex: "a4000101182a02182a036568656c6c6f",
            },
            row_bytes(Record::new(42u64, "hello".to_string())),
        ),
        (
            RowVector {
                name: "name alice => note",
                primary_key: 3773036822876127232,
                row_hex: "a40001011b345c8500000000000265616c69636503646e6f7465",
            },
            row_bytes(Record::new(Name::from_value(3773036822876127232), "note".to_string())),
        ),
        (
            RowVector {
                name: "symbol 7 => 4,EOS",
                primary_key: 7,
                row_hex: "a40001010702070365342c454f53",
            },
            row_bytes(Record::new(7u64, Symbol::new(4, "EOS").expect("valid symbol"))),
        ),
    ]
}

fn row_bytes<K, V>(record: Record<K, V>) -> Vec<u8>
where
    K: tablekit_core::PrimaryKey,
    V: tablekit_core::TableValue,
{
    encode_row(&record).expect("vector record encodes")
}

/// Check every vector. Returns `(name, passed, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let mut results = Vec::new();

    for v in name_vectors() {
        let actual = match Name::new(v.text) {
            Ok(name) => hex::encode(name.value().to_be_bytes()),
            Err(e) => e.to_string(),
        };
        results.push((format!("name {:?}", v.text), actual == v.value_hex, actual));
    }

    for v in symbol_vectors() {
        let actual = match v.text.parse::<Symbol>() {
            Ok(sym) => sym.raw().to_string(),
            Err(e) => e.to_string(),
        };
        results.push((format!("symbol {}", v.text), actual == v.raw.to_string(), actual));
    }

    for (v, bytes) in row_vectors() {
        let actual = hex::encode(bytes);
        results.push((v.name.to_string(), actual == v.row_hex, actual));
    }

    results
}

/// All vectors as JSON, for other implementations to consume.
pub fn vectors_json() -> serde_json::Result<String> {
    let rows: Vec<RowVector> = row_vectors().into_iter().map(|(v, _)| v).collect();
    serde_json::to_string_pretty(&serde_json::json!({
        "names": name_vectors(),
        "symbols": symbol_vectors(),
        "rows": rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed, actual) in verify_all_vectors() {
            assert!(passed, "vector {name} failed, got {actual}");
        }
    }

    #[test]
    fn test_name_vectors_decode_back() {
        for v in name_vectors() {
            let bytes: [u8; 8] = hex::decode(v.value_hex).unwrap().try_into().unwrap();
            assert_eq!(Name::from_value(u64::from_be_bytes(bytes)).to_string(), v.text);
        }
    }

    #[test]
    fn test_vectors_json_lists_everything() {
        let json: serde_json::Value = serde_json::from_str(&vectors_json().unwrap()).unwrap();
        assert_eq!(json["names"].as_array().unwrap().len(), name_vectors().len());
        assert_eq!(json["rows"][0]["row_hex"], "a4000101182a02182a036568656c6c6f");
    }
}
