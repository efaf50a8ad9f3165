// Host status: completion reported by the HBA driver for an I/O.

use crate::model::{CodeEntry, CodeTable};

pub static HOST_STATUS: CodeTable = CodeTable::new(
    ENTRIES,
    CodeEntry::new(0xff, "UNKNOWN", "Host Status Code unknown."),
);

const ENTRIES: &[CodeEntry] = &[
    CodeEntry::new(
        0x0,
        "OK",
        "This status is returned when there is no error on the host side. This is when you \
         see if there is a status for a device or plugin. This status is also when you see \
         valid sense data instead of possible sense data.",
    ),
    CodeEntry::new(
        0x1,
        "NO_CONNECT",
        "This status is returned if the connection is lost to the LUN. This can occur if the \
         LUN is no longer visible to the host from the array side or if the physical \
         connection to the array has been removed.",
    ),
    CodeEntry::new(
        0x2,
        "BUS_BUSY",
        "This status is returned when the HBA driver is unable to issue a command to the \
         device. This status occurs due to dropped FCP frames in the environment.",
    ),
    CodeEntry::new(
        0x3,
        "TIMEOUT",
        "This status is returned when the command in-flight to the array times out.",
    ),
    CodeEntry::new(
        0x4,
        "BAD_TARGET",
        "This status is returned after the driver aborts commands to a bad target. \
         Typically this status occurs when the target experiences a hardware error, but it \
         can also occur if a command is sent to a bad target ID.",
    ),
    CodeEntry::new(
        0x5,
        "ABORT",
        "This status is returned if the driver aborts commands in-flight to the target. \
         This occurs due to a command timeout or parity error in the frame.",
    ),
    CodeEntry::new(
        0x6,
        "PARITY",
        "This status is returned for generic errors. For example, this status occurs for \
         events not covered by the other errors (such as data overrun or underrun).",
    ),
    CodeEntry::new(
        0x7,
        "ERROR",
        "This status is returned when a device is reset due to a Storage Initiator Error. \
         This typically occurs due to an outdated HBA firmware or possibly (though rarely) \
         as the result of a bad HBA.",
    ),
    CodeEntry::new(
        0x8,
        "RESET",
        "This status is returned when the HBA driver aborts I/O. It also occurs if the HBA \
         resets the target.",
    ),
    CodeEntry::new(
        0x9,
        "BAD_INTR",
        "This is a legacy error and is never returned.",
    ),
    CodeEntry::new(
        0xa,
        "PASSTHROUGH",
        "This is a legacy error and is never returned. It was meant as a way for drivers to \
         return an I/O that failed due to temporary conditions in the driver so that the \
         I/O would be retried.",
    ),
    CodeEntry::new(
        0xb,
        "SOFT_ERROR",
        "This status is returned if the HBA driver returns a DID_REQUEUE command. Upon \
         receiving this status, the I/O command is reissued immediately.",
    ),
    CodeEntry::new(
        0xc,
        "RETRY",
        "This status is returned due to a transient error. When this status is returned, \
         the I/O command is requeued and issued again.",
    ),
    CodeEntry::new(
        0xd,
        "REQUEUE",
        "This status is returned when the HBA driver tries to abort a command which then \
         sets the IOSTAT_LOCAL_REJECT status on all commands in the iocb ring. This causes \
         the original command to requeue.",
    ),
];
