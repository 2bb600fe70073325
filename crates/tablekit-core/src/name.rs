//! Name: a short symbolic identifier packed into a `u64`.
//!
//! Up to 13 characters from `.12345abcdefghijklmnopqrstuvwxyz`. The first
//! twelve characters take 5 bits each (most significant first), the
//! thirteenth takes the low 4 bits.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Maximum length of a name in characters.
pub const MAX_NAME_LEN: usize = 13;

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// A 64-bit encoded name.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(u64);

impl Name {
    /// The empty name (encodes to 0).
    pub const EMPTY: Self = Self(0);

    /// Parse and encode a name.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let len = s.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong(len));
        }
        if s.ends_with('.') {
            return Err(ValidationError::TrailingDot(s.to_string()));
        }

        let mut value = 0u64;
        for (i, ch) in s.chars().enumerate() {
            let symbol = char_to_symbol(ch).ok_or(ValidationError::InvalidNameChar { ch, pos: i })?;

            if i < 12 {
                value |= (symbol & 0x1f) << (64 - 5 * (i + 1));
            } else {
                if symbol > 0x0f {
                    return Err(ValidationError::InvalidThirteenthChar(ch));
                }
                value |= symbol;
            }
        }

        Ok(Self(value))
    }

    /// Wrap a raw encoded value. Every `u64` is a valid name.
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// The canonical `u64` encoding.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Number of characters in the decoded form.
    pub fn len(&self) -> usize {
        self.to_string().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

fn char_to_symbol(c: char) -> Option<u64> {
    match c {
        'a'..='z' => Some(c as u64 - 'a' as u64 + 6),
        '1'..='5' => Some(c as u64 - '1' as u64 + 1),
        '.' => Some(0),
        _ => None,
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; MAX_NAME_LEN];
        let mut tmp = self.0;
        for i in 0..MAX_NAME_LEN {
            let pos = MAX_NAME_LEN - 1 - i;
            if i == 0 {
                out[pos] = CHARMAP[(tmp & 0x0f) as usize];
                tmp >>= 4;
            } else {
                out[pos] = CHARMAP[(tmp & 0x1f) as usize];
                tmp >>= 5;
            }
        }

        let end = out.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
        // CHARMAP is ASCII.
        let s = std::str::from_utf8(&out[..end]).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Name> for u64 {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(Name::new("alice").unwrap().value(), 3773036822876127232);
        assert_eq!(Name::new("eosio").unwrap().value(), 0x5530ea0000000000);
        assert_eq!(Name::new("eosio.token").unwrap().value(), 0x5530ea033482a600);
        assert_eq!(Name::new("").unwrap().value(), 0);
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["alice", "bob", "mytable", "eosio.token", "a.b.c", "zzzzzzzzzzzzj", "12345"] {
            let name: Name = s.parse().unwrap();
            assert_eq!(name.to_string(), s);
        }
    }

    #[test]
    fn test_max_value() {
        let name = Name::new("zzzzzzzzzzzzj").unwrap();
        assert_eq!(name.value(), u64::MAX);
        assert_eq!(Name::from_value(u64::MAX), name);
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(matches!(
            Name::new("aaaaaaaaaaaaaa"),
            Err(ValidationError::NameTooLong(14))
        ));
    }

    #[test]
    fn test_rejects_bad_chars() {
        assert!(matches!(
            Name::new("Alice"),
            Err(ValidationError::InvalidNameChar { ch: 'A', pos: 0 })
        ));
        assert!(Name::new("al6ce").is_err());
        assert!(Name::new("al ce").is_err());
    }

    #[test]
    fn test_non_ascii_reported_by_char() {
        assert!(matches!(
            Name::new("bé"),
            Err(ValidationError::InvalidNameChar { ch: 'é', pos: 1 })
        ));
        assert!(matches!(
            Name::new("ééééééé"),
            Err(ValidationError::InvalidNameChar { ch: 'é', pos: 0 })
        ));
        assert!(matches!(
            Name::new("éééééééééééééé"),
            Err(ValidationError::NameTooLong(14))
        ));
    }

    #[test]
    fn test_rejects_thirteenth_char_after_j() {
        assert!(matches!(
            Name::new("aaaaaaaaaaaak"),
            Err(ValidationError::InvalidThirteenthChar('k'))
        ));
        assert!(Name::new("aaaaaaaaaaaaj").is_ok());
    }

    #[test]
    fn test_rejects_trailing_dot() {
        assert!(matches!(Name::new("alice."), Err(ValidationError::TrailingDot(_))));
        assert!(Name::new(".alice").is_ok());
    }

    #[test]
    fn test_serde_as_string() {
        let name = Name::new("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
        assert!(serde_json::from_str::<Name>("\"ALICE\"").is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn name_string() -> impl Strategy<Value = String> {
            "([.1-5a-z]{0,11}[1-5a-z]|[.1-5a-z]{12}[1-5a-j])?"
        }

        proptest! {
            #[test]
            fn test_encoding_is_deterministic(s in name_string()) {
                prop_assert_eq!(Name::new(&s).unwrap(), Name::new(&s).unwrap());
            }

            #[test]
            fn test_decode_inverts_encode(s in name_string()) {
                prop_assert_eq!(Name::new(&s).unwrap().to_string(), s);
            }

            #[test]
            fn test_distinct_names_distinct_values(a in name_string(), b in name_string()) {
                prop_assume!(a != b);
                prop_assert_ne!(Name::new(&a).unwrap().value(), Name::new(&b).unwrap().value());
            }

            #[test]
            fn test_every_value_roundtrips(v in any::<u64>()) {
                let name = Name::from_value(v);
                prop_assert_eq!(Name::new(&name.to_string()).unwrap(), name);
            }
        }
    }
}
