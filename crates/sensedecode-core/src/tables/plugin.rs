// Plugin status: outcome reported by the NMP / multipathing plugin layer
// (ESXi 5.x and later).

use crate::model::{CodeEntry, CodeTable};

pub static PLUGIN_STATUS: CodeTable = CodeTable::new(
    ENTRIES,
    CodeEntry::new(0xff, "UNKNOWN", "Plugin Status Code unknown."),
);

const ENTRIES: &[CodeEntry] = &[
    CodeEntry::new(0x0, "GOOD", "No error."),
    CodeEntry::new(
        0x1,
        "TRANSIENT",
        "An unspecified error occurred. The I/O command should be tried again.",
    ),
    CodeEntry::new(
        0x2,
        "SNAPSHOT",
        "The device is a deactivated snapshot. The I/O command failed because the device is \
         a deactivated snapshot and so the LUN is read-only.",
    ),
    CodeEntry::new(0x3, "RESERVATION_LOST", "SCSI-2 reservation was lost."),
    CodeEntry::new(
        0x4,
        "REQUEUE",
        "The plug-in wants to requeue the I/O back. The I/O will be retried.",
    ),
    CodeEntry::new(
        0x5,
        "ATS_MISCOMPARE",
        "The test and set data in the ATS request returned false for equality.",
    ),
    CodeEntry::new(
        0x6,
        "THINPROV_BUSY_GROWING",
        "Allocating more thin provision space. Device server is in the process of \
         allocating more space in the backing pool for a thin provisioned LUN.",
    ),
    CodeEntry::new(0x7, "THINPROV_ATQUOTA", "Thin provisioning soft-limit exceeded."),
    CodeEntry::new(
        0x8,
        "THINPROV_NOSPACE",
        "Backing pool for thin provisioned LUN is out of space.",
    ),
];
