// Sense keys, SPC-4 4.5.6 table 43.

use crate::model::{CodeEntry, CodeTable};

pub static SENSE_KEYS: CodeTable = CodeTable::new(
    ENTRIES,
    CodeEntry::new(0xff, "UNKNOWN", "Sense Key unknown."),
);

const ENTRIES: &[CodeEntry] = &[
    CodeEntry::new(
        0x0,
        "NO SENSE",
        "No specific sense key information to report; the command completed, or CHECK \
         CONDITION was caused by one of the FILEMARK, EOM or ILI bits.",
    ),
    CodeEntry::new(
        0x1,
        "RECOVERED ERROR",
        "The command completed successfully after the device server performed some \
         recovery action.",
    ),
    CodeEntry::new(0x2, "NOT READY", "The logical unit is not accessible."),
    CodeEntry::new(
        0x3,
        "MEDIUM ERROR",
        "The command terminated with a non-recovered error, usually caused by a flaw in the \
         medium or an error in the recorded data.",
    ),
    CodeEntry::new(
        0x4,
        "HARDWARE ERROR",
        "The device server detected a non-recoverable hardware failure (controller, parity, \
         self-test) while performing the command.",
    ),
    CodeEntry::new(
        0x5,
        "ILLEGAL REQUEST",
        "The command or its parameters were invalid: unsupported operation code, invalid \
         field in the CDB or parameter list, or an invalid LUN.",
    ),
    CodeEntry::new(
        0x6,
        "UNIT ATTENTION",
        "A unit attention condition was established, e.g. medium change, logical unit \
         reset or changed mode parameters.",
    ),
    CodeEntry::new(
        0x7,
        "DATA PROTECT",
        "A read or write was attempted on a block that is protected against that operation.",
    ),
    CodeEntry::new(
        0x8,
        "BLANK CHECK",
        "Blank medium or a format-defined end-of-data indication was encountered while \
         reading, or non-blank medium while writing a write-once device.",
    ),
    CodeEntry::new(
        0x9,
        "VENDOR SPECIFIC",
        "Reserved for reporting vendor specific conditions.",
    ),
    CodeEntry::new(
        0xa,
        "COPY ABORTED",
        "An EXTENDED COPY or similar copy command was aborted due to an error condition on \
         the source device, the destination device, or both.",
    ),
    CodeEntry::new(
        0xb,
        "ABORTED COMMAND",
        "The device server aborted the command. The application client may be able to \
         recover by trying the command again.",
    ),
    CodeEntry::new(
        0xc,
        "EQUAL",
        "Obsolete. Formerly reported that a SEARCH DATA command satisfied an equal \
         comparison.",
    ),
    CodeEntry::new(
        0xd,
        "VOLUME OVERFLOW",
        "A buffered device reached the end-of-partition and data may remain in the buffer \
         that has not been written to the medium.",
    ),
    CodeEntry::new(
        0xe,
        "MISCOMPARE",
        "The source data did not match the data read from the medium.",
    ),
    CodeEntry::new(
        0xf,
        "COMPLETED",
        "The sense data reports completion information; may occur for a command that \
         completed successfully.",
    ),
];
