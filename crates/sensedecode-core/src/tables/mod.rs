//! Static reference tables, one per [`Category`](crate::Category).
//!
//! Host, device and plugin codes are the ESXi VMkernel values reported in
//! `vmkernel.log` lines such as `H:0x0 D:0x2 P:0x0 Valid sense data: 0x5 0x20 0x0`.
//! Sense keys follow SPC-4 table 43; ASC/ASCQ text follows the T10 assignments.

mod asc;
mod device;
mod host;
mod plugin;
mod sense_key;

pub use asc::ADDITIONAL_SENSE_DATA;
pub use device::DEVICE_STATUS;
pub use host::HOST_STATUS;
pub use plugin::PLUGIN_STATUS;
pub use sense_key::SENSE_KEYS;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use crate::{Category, decode_asc_ascq};

    #[test]
    fn codes_are_unique_within_each_table() {
        for category in Category::iter() {
            let mut seen = HashSet::new();
            for entry in category.table().entries() {
                assert!(
                    seen.insert(entry.code),
                    "{category}: duplicate code {:#x}",
                    entry.code
                );
            }
        }
    }

    #[test]
    fn sentinels_are_named_unknown_and_unreachable() {
        for category in Category::iter() {
            let table = category.table();
            assert_eq!(table.sentinel().name, "UNKNOWN");
            assert!(!table.sentinel().description.is_empty());
            assert!(table.lookup(table.sentinel().code).is_none());
        }
    }

    #[test]
    fn status_entries_are_named_and_described() {
        for category in [Category::Host, Category::Device, Category::Plugin, Category::SenseKey] {
            for entry in category.table().entries() {
                assert!(!entry.name.is_empty(), "{category} {:#x}", entry.code);
                assert!(!entry.description.is_empty(), "{category} {}", entry.name);
            }
        }
    }

    #[test]
    fn asc_entries_carry_text() {
        for entry in Category::AdditionalSenseData.table().entries() {
            assert!(!entry.description.is_empty(), "{:#06x}", entry.code);
            assert!((0..=0xffff).contains(&entry.code));
        }
    }

    #[test]
    fn impending_failure_and_environment_warnings_decode() {
        let expected = [
            (0x5d, 0x10, "HARDWARE IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
            (0x5d, 0x14, "HARDWARE IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
            (0x5d, 0x1d, "HARDWARE IMPENDING FAILURE POWER LOSS PROTECTION CIRCUIT"),
            (0x5d, 0x20, "CONTROLLER IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
            (0x5d, 0x30, "DATA CHANNEL IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
            (0x5d, 0x42, "SERVO IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
            (0x5d, 0x5b, "SPINDLE IMPENDING FAILURE SPIN-UP RETRY COUNT"),
            (0x5d, 0x6c, "FIRMWARE IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
            (0x5d, 0x73, "MEDIA IMPENDING FAILURE ENDURANCE LIMIT MET"),
            (0x0b, 0x0a, "WARNING - HIGH CRITICAL TEMPERATURE LIMIT EXCEEDED"),
            (0x0b, 0x14, "WARNING - PHYSICAL ELEMENT STATUS CHANGE"),
        ];
        for (asc, ascq, description) in expected {
            let entry = decode_asc_ascq(asc, ascq);
            assert_eq!(entry.description, description, "{asc:02x}/{ascq:02x}");
            assert_eq!(entry.code, i64::from(u16::from_be_bytes([asc, ascq])));
        }
        // Reserved gaps inside the block stay unknown
        assert_eq!(decode_asc_ascq(0x5d, 0x1e).name, "UNKNOWN");
        assert_eq!(decode_asc_ascq(0x5d, 0x2d).name, "UNKNOWN");
    }

    #[test]
    fn sense_keys_cover_four_bits() {
        let table = Category::SenseKey.table();
        for key in 0..=0xf {
            assert!(table.lookup(key).is_some(), "sense key {key:#x} missing");
        }
    }
}
