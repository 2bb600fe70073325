//! Currency-style symbols: a decimal precision plus a short uppercase code.
//!
//! The packed form follows the usual token layout: the code characters
//! little-endian from bit 8 upward, the precision in the low byte.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Maximum number of characters in a symbol code.
pub const MAX_CODE_LEN: usize = 7;

/// A 1-7 character uppercase symbol code, e.g. `EOS`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolCode(u64);

impl SymbolCode {
    /// Validate and pack a code.
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let bytes = code.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_CODE_LEN {
            return Err(ValidationError::InvalidSymbolCode(code.to_string()));
        }
        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(ValidationError::InvalidSymbolCode(code.to_string()));
        }

        let raw = bytes
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &c)| acc | ((c as u64) << (8 * i)));
        Ok(Self(raw))
    }

    /// Unpack and validate a raw code.
    ///
    /// Characters must be contiguous from the low byte: no zero bytes between
    /// letters.
    pub fn from_raw(raw: u64) -> Result<Self, ValidationError> {
        let code = Self(raw);
        let mut tmp = raw;
        let mut len = 0;
        while tmp & 0xff != 0 {
            if !(tmp as u8).is_ascii_uppercase() {
                return Err(ValidationError::InvalidSymbolCode(format!("{raw:#x}")));
            }
            tmp >>= 8;
            len += 1;
        }
        if len == 0 || tmp != 0 || len > MAX_CODE_LEN {
            return Err(ValidationError::InvalidSymbolCode(format!("{raw:#x}")));
        }
        Ok(code)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        (0..8).take_while(|i| (self.0 >> (8 * i)) & 0xff != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tmp = self.0;
        while tmp & 0xff != 0 {
            write!(f, "{}", (tmp & 0xff) as u8 as char)?;
            tmp >>= 8;
        }
        Ok(())
    }
}

impl fmt::Debug for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolCode({})", self)
    }
}

impl FromStr for SymbolCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A symbol: precision plus code, e.g. `4,EOS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    precision: u8,
    code: SymbolCode,
}

impl Symbol {
    /// Construct a symbol. Only the code is checked; every precision is valid.
    pub fn new(precision: u8, code: &str) -> Result<Self, ValidationError> {
        let code = SymbolCode::new(code)?;
        Ok(Self::from_parts(precision, code))
    }

    pub const fn from_parts(precision: u8, code: SymbolCode) -> Self {
        Self { precision, code }
    }

    /// Unpack a raw `code << 8 | precision` value.
    pub fn from_raw(raw: u64) -> Result<Self, ValidationError> {
        let code = SymbolCode::from_raw(raw >> 8)?;
        Ok(Self::from_parts((raw & 0xff) as u8, code))
    }

    pub const fn precision(&self) -> u8 {
        self.precision
    }

    pub const fn code(&self) -> SymbolCode {
        self.code
    }

    /// Packed representation.
    pub const fn raw(&self) -> u64 {
        (self.code.raw() << 8) | self.precision as u64
    }

    /// Re-check the invariants held by this value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::from_raw(self.raw()).map(|_| ())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    /// Parse `"<precision>,<CODE>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| ValidationError::InvalidSymbolFormat(s.to_string()))?;
        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidSymbolFormat(s.to_string()))?;
        Self::new(precision, code.trim())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eos_raw() {
        let sym = Symbol::new(4, "EOS").unwrap();
        assert_eq!(sym.code().raw(), 0x534f45);
        assert_eq!(sym.raw(), 1397703940);
        assert_eq!(Symbol::from_raw(1397703940).unwrap(), sym);
    }

    #[test]
    fn test_display_and_parse() {
        let sym: Symbol = "2,USD".parse().unwrap();
        assert_eq!(sym.precision(), 2);
        assert_eq!(sym.code().to_string(), "USD");
        assert_eq!(sym.to_string(), "2,USD");
    }

    #[test]
    fn test_code_bounds() {
        assert!(SymbolCode::new("A").is_ok());
        assert!(SymbolCode::new("ABCDEFG").is_ok());
        assert!(SymbolCode::new("").is_err());
        assert!(SymbolCode::new("ABCDEFGH").is_err());
    }

    #[test]
    fn test_code_rejects_non_uppercase() {
        for bad in ["eos", "EoS", "E0S", "E S", "ÉOS"] {
            assert!(
                matches!(SymbolCode::new(bad), Err(ValidationError::InvalidSymbolCode(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_any_precision_accepted() {
        for precision in [0, 18, 19, 255] {
            let sym = Symbol::new(precision, "EOS").unwrap();
            assert_eq!(sym.precision(), precision);
            assert_eq!(Symbol::from_raw(sym.raw()).unwrap(), sym);
            assert_eq!(sym.to_string().parse::<Symbol>().unwrap(), sym);
        }
        assert_eq!(Symbol::new(255, "EOS").unwrap().raw(), (0x534f45 << 8) | 0xff);
    }

    #[test]
    fn test_raw_code_with_gap_rejected() {
        // "A", zero byte, "B"
        assert!(SymbolCode::from_raw(0x42_00_41).is_err());
        assert!(SymbolCode::from_raw(0).is_err());
    }

    #[test]
    fn test_bad_format() {
        assert!(matches!(
            "EOS".parse::<Symbol>(),
            Err(ValidationError::InvalidSymbolFormat(_))
        ));
        assert!("x,EOS".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_serde_validates() {
        let sym: Symbol = serde_json::from_str("\"4,EOS\"").unwrap();
        assert_eq!(sym, Symbol::new(4, "EOS").unwrap());
        assert!(serde_json::from_str::<Symbol>("\"4,eos\"").is_err());
    }
}
