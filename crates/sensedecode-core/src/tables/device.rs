// Device status: SCSI status byte returned by the target/LUN (SAM-5).

use crate::model::{CodeEntry, CodeTable};

pub static DEVICE_STATUS: CodeTable = CodeTable::new(
    ENTRIES,
    CodeEntry::new(0xff, "UNKNOWN", "Device Status Code unknown."),
);

const ENTRIES: &[CodeEntry] = &[
    CodeEntry::new(
        0x00,
        "GOOD",
        "This status is returned when there is no error from the device or target side. \
         This is when you will see if there is a status for Host or Plugin.",
    ),
    CodeEntry::new(
        0x02,
        "CHECK_CONDITION",
        "This status is returned when a command fails for a specific reason. When a CHECK \
         CONDITION is received, the ESX storage stack will send out a SCSI command 0x3 \
         (REQUEST SENSE) in order to get the SCSI sense data (Sense Key, Additional Sense \
         Code, ASC Qualifier, and other bits). The sense data is listed after Valid sense \
         data in the order of Sense Key, Additional Sense Code, and ASC Qualifier.",
    ),
    CodeEntry::new(
        0x04,
        "CONDITION_MET",
        "This status is returned for successful completion of conditional commands, such \
         as PREFETCH.",
    ),
    CodeEntry::new(
        0x08,
        "BUSY",
        "This status is returned when a LUN cannot accept SCSI commands at the moment. As \
         this should be a temporary condition, the command is tried again.",
    ),
    CodeEntry::new(
        0x10,
        "INTERMEDIATE",
        "This status is the same as 0x0 (GOOD) and is returned for a command that was part \
         of a series of linked commands.",
    ),
    CodeEntry::new(
        0x14,
        "INTERMEDIATE_CONDITION_MET",
        "This status is the combination of device statuses CONDITION MET (0x4) and \
         INTERMEDIATE (0x10).",
    ),
    CodeEntry::new(
        0x18,
        "RESERVATION_CONFLICT",
        "This status is returned when a LUN is in a Reserved status and commands from \
         initiators that did not place that SCSI reservation attempt to issue commands to \
         it.",
    ),
    CodeEntry::new(
        0x22,
        "COMMAND_TERMINATED",
        "Obsolete status code. Was originally returned as a result of a TERMINATE I/O \
         message.",
    ),
    CodeEntry::new(
        0x28,
        "TASK_SET_FULL",
        "This status is returned when the LUN prevents accepting SCSI commands from \
         initiators due to lack of resources, namely the queue depth on the array. Adaptive \
         queue depth code was introduced into ESX 3.5 U4 (native in ESX 4.x) that adjusts \
         the LUN queue depth in the VMkernel. If configured, this code will activate when \
         device status TASK SET FULL (0x28) is returned for failed commands and essentially \
         throttles back the I/O until the array stops returning this status.",
    ),
    CodeEntry::new(
        0x30,
        "ACA_ACTIVE",
        "This status is returned when an Auto Contingent Allegiance (ACA) has been aborted \
         by another SCSI initiator. This status has been observed on arrays running \
         older/unsupported firmware with ESX 4.1, specifically because the firmware does \
         not support VAAI commands.",
    ),
    CodeEntry::new(
        0x40,
        "TASK_ABORTED",
        "This status is returned when a command has been aborted by another SCSI initiator \
         and the TASK ABORT STATUS bit is set to '1'. So far this status has only been \
         returned by iSCSI arrays.",
    ),
];
