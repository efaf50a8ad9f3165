// ── Reference table model ──
//
// A `CodeTable` is a fixed list of known entries plus one "unknown"
// sentinel. Tables are `'static` and never written to; lookups hand out
// copies, so a miss can carry the queried code without touching the table.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::tables;

/// One row of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodeEntry {
    /// Category-specific code. Additional sense data uses `(asc << 8) | ascq`.
    pub code: i64,
    /// Short symbolic label, e.g. `BUS_BUSY`. Empty for most ASC/ASCQ rows.
    pub name: &'static str,
    /// Free-text explanation. May be empty.
    pub description: &'static str,
}

impl CodeEntry {
    pub const fn new(code: i64, name: &'static str, description: &'static str) -> Self {
        Self {
            code,
            name,
            description,
        }
    }

    /// Copy of this entry reporting `code` instead of the stored one.
    #[must_use]
    pub const fn with_code(self, code: i64) -> Self {
        Self { code, ..self }
    }
}

/// Ordered known entries followed by the sentinel returned on a miss.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    known: &'static [CodeEntry],
    sentinel: CodeEntry,
}

impl CodeTable {
    /// Evaluated in a `static`, an empty `known` slice fails to compile.
    pub const fn new(known: &'static [CodeEntry], sentinel: CodeEntry) -> Self {
        assert!(!known.is_empty(), "code table needs at least one known entry");
        Self { known, sentinel }
    }

    /// Known entries in table order, sentinel excluded.
    pub fn entries(&self) -> &'static [CodeEntry] {
        self.known
    }

    pub fn sentinel(&self) -> CodeEntry {
        self.sentinel
    }

    /// Number of known entries.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// First known entry whose code equals `code`. Never matches the sentinel.
    pub fn lookup(&self, code: i64) -> Option<&'static CodeEntry> {
        self.known.iter().find(|entry| entry.code == code)
    }
}

/// The five code families. Declaration order is the report order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Host,
    Device,
    Plugin,
    SenseKey,
    AdditionalSenseData,
}

impl Category {
    /// Section header used in text reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Host => "Host Status",
            Self::Device => "Device Status",
            Self::Plugin => "Plugin Status",
            Self::SenseKey => "Sense Key",
            Self::AdditionalSenseData => "Additional Sense Data",
        }
    }

    pub fn table(self) -> &'static CodeTable {
        match self {
            Self::Host => &tables::HOST_STATUS,
            Self::Device => &tables::DEVICE_STATUS,
            Self::Plugin => &tables::PLUGIN_STATUS,
            Self::SenseKey => &tables::SENSE_KEYS,
            Self::AdditionalSenseData => &tables::ADDITIONAL_SENSE_DATA,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    #[test]
    fn with_code_leaves_original_untouched() {
        let entry = CodeEntry::new(0x2, "BUSY", "busy");
        let moved = entry.with_code(42);
        assert_eq!(moved.code, 42);
        assert_eq!(moved.name, "BUSY");
        assert_eq!(entry.code, 0x2);
    }

    #[test]
    fn categories_iterate_in_report_order() {
        let order: Vec<_> = Category::iter().collect();
        assert_eq!(
            order,
            vec![
                Category::Host,
                Category::Device,
                Category::Plugin,
                Category::SenseKey,
                Category::AdditionalSenseData,
            ]
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn category_names_are_kebab_case() {
        assert_eq!(Category::SenseKey.to_string(), "sense-key");
        assert_eq!(
            Category::from_str("additional-sense-data").unwrap(),
            Category::AdditionalSenseData
        );
        assert!(Category::from_str("bogus").is_err());
    }

    #[test]
    fn every_table_has_entries_and_a_distinct_sentinel() {
        for category in Category::iter() {
            let table = category.table();
            assert!(!table.is_empty(), "{category} table has no known entries");
            assert_eq!(table.entries().len(), table.len());
            assert!(!table.entries().contains(&table.sentinel()), "{category}");
        }
    }

    #[test]
    fn lookup_skips_sentinel() {
        let table = Category::Device.table();
        assert!(table.lookup(table.sentinel().code).is_none());
    }
}
