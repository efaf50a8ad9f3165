//! Table lookup and ASC/ASCQ key handling.
//!
//! [`decode`] is the single lookup shared by every category: a linear scan
//! over the known entries, falling back to a copy of the sentinel that
//! echoes the queried code. Nothing here writes to a table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{Category, CodeEntry, CodeTable};
use crate::tables;

/// Look `code` up in `table`.
///
/// Returns the first known entry with that code, or the table's sentinel
/// with `code` filled in. Any integer is accepted.
pub fn decode(table: &CodeTable, code: i64) -> CodeEntry {
    if let Some(entry) = table.lookup(code) {
        return *entry;
    }
    tracing::trace!(code, sentinel = table.sentinel().name, "no entry for code");
    table.sentinel().with_code(code)
}

/// Decode an additional sense code / qualifier pair.
pub fn decode_asc_ascq(asc: u8, ascq: u8) -> CodeEntry {
    let key = AscAscq::new(asc, ascq).key();
    decode(&tables::ADDITIONAL_SENSE_DATA, i64::from(key))
}

// ── ASC/ASCQ pair ────────────────────────────────────────────────────

/// Additional sense code and its qualifier, as reported after CHECK CONDITION.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AscAscq {
    pub asc: u8,
    pub ascq: u8,
}

impl AscAscq {
    pub const fn new(asc: u8, ascq: u8) -> Self {
        Self { asc, ascq }
    }

    /// Composite 16-bit lookup key, `(asc << 8) | ascq`.
    pub const fn key(self) -> u16 {
        u16::from_be_bytes([self.asc, self.ascq])
    }

    pub fn decode(self) -> CodeEntry {
        decode_asc_ascq(self.asc, self.ascq)
    }
}

impl fmt::Display for AscAscq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}/{:02x}", self.asc, self.ascq)
    }
}

impl FromStr for AscAscq {
    type Err = CoreError;

    /// Parses `<ASC>/<ASCQ>`, each half one or two hex digits with an
    /// optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CoreError::InvalidSensePair {
            input: s.to_owned(),
            reason,
        };

        let (asc, ascq) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected <ASC>/<ASCQ>, e.g. 20/0b".into()))?;

        Ok(Self {
            asc: parse_hex_byte(asc).map_err(invalid)?,
            ascq: parse_hex_byte(ascq).map_err(invalid)?,
        })
    }
}

fn parse_hex_byte(field: &str) -> Result<u8, String> {
    let field = field.trim();
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);

    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("'{field}' is not a hex byte"));
    }
    u8::from_str_radix(digits, 16).map_err(|e| format!("'{field}': {e}"))
}

// ── Decoded report unit ──────────────────────────────────────────────

/// A lookup result tagged with the category it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub category: Category,
    #[serde(flatten)]
    pub entry: CodeEntry,
}

impl Decoded {
    pub fn lookup(category: Category, code: i64) -> Self {
        Self {
            category,
            entry: decode(category.table(), code),
        }
    }

    pub fn asc_ascq(pair: AscAscq) -> Self {
        Self {
            category: Category::AdditionalSenseData,
            entry: pair.decode(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category.table().lookup(self.entry.code).is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn known_codes_return_stored_entry() {
        for category in Category::iter() {
            let table = category.table();
            for entry in table.entries() {
                assert_eq!(decode(table, entry.code), *entry, "{category}");
            }
        }
    }

    #[test]
    fn miss_returns_sentinel_with_query_code() {
        for category in Category::iter() {
            let table = category.table();
            let before = (table.entries().to_vec(), table.sentinel());

            for code in [999_999, -1, i64::MAX, i64::MIN] {
                let entry = decode(table, code);
                assert_eq!(entry.name, "UNKNOWN", "{category}");
                assert_eq!(entry.code, code);
                assert_eq!(entry.description, table.sentinel().description);
            }

            let after = (table.entries().to_vec(), table.sentinel());
            assert_eq!(before, after, "{category} table changed after a miss");
        }
    }

    #[test]
    fn miss_does_not_leak_into_next_lookup() {
        let table = Category::Plugin.table();
        let first = decode(table, 77);
        let second = decode(table, 78);
        assert_eq!(first.code, 77);
        assert_eq!(second.code, 78);
        assert_eq!(table.sentinel().code, 0xff);
    }

    #[test]
    fn decoding_is_idempotent() {
        for code in [0, 3, 0x28, 12345] {
            assert_eq!(
                decode(Category::Device.table(), code),
                decode(Category::Device.table(), code)
            );
        }
    }

    #[test]
    fn host_zero_is_ok() {
        let entry = decode(Category::Host.table(), 0);
        assert_eq!(entry.code, 0);
        assert_eq!(entry.name, "OK");
    }

    #[test]
    fn asc_ascq_composes_key() {
        assert_eq!(AscAscq::new(0x20, 0x0b).key(), 0x200b);
        let entry = decode_asc_ascq(0x20, 0x0b);
        assert_eq!(entry.code, 0x200b);
        assert_eq!(entry.description, "ACCESS DENIED - ACL LUN CONFLICT");
    }

    #[test]
    fn asc_ascq_miss_echoes_key() {
        let entry = decode_asc_ascq(0xfe, 0x01);
        assert_eq!(entry.name, "UNKNOWN");
        assert_eq!(entry.code, 0xfe01);
    }

    #[test]
    fn parse_pair_variants() {
        assert_eq!("20/0b".parse::<AscAscq>().unwrap(), AscAscq::new(0x20, 0x0b));
        assert_eq!("0x4/0X1".parse::<AscAscq>().unwrap(), AscAscq::new(0x04, 0x01));
        assert_eq!(" 3A / 00 ".parse::<AscAscq>().unwrap(), AscAscq::new(0x3a, 0x00));
        assert_eq!("ff/ff".parse::<AscAscq>().unwrap(), AscAscq::new(0xff, 0xff));
    }

    #[test]
    fn parse_pair_rejects_malformed() {
        for input in ["zz/00", "20", "20/", "/0b", "100/00", "20/0b/01", "", "20-0b", "0x/01"] {
            let err = input.parse::<AscAscq>().unwrap_err();
            let CoreError::InvalidSensePair { input: echoed, .. } = err;
            assert_eq!(echoed, input);
        }
    }

    #[test]
    fn pair_display_is_lower_hex() {
        assert_eq!(AscAscq::new(0x3a, 0x2).to_string(), "3a/02");
    }

    #[test]
    fn decoded_serializes_flat() {
        let decoded = Decoded::lookup(Category::SenseKey, 2);
        let value = serde_json::to_value(decoded).unwrap();
        assert_eq!(value["category"], "sense-key");
        assert_eq!(value["code"], 2);
        assert_eq!(value["name"], "NOT READY");
    }

    #[test]
    fn unknown_flag_tracks_table_membership() {
        assert!(!Decoded::lookup(Category::Host, 1).is_unknown());
        assert!(Decoded::lookup(Category::Host, 999).is_unknown());
        assert!(Decoded::asc_ascq(AscAscq::new(0xfe, 0xfe)).is_unknown());
    }
}
