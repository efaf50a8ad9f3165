// Additional sense code / qualifier assignments (T10 asc-num list),
// keyed by `(asc << 8) | ascq`. Rows carry no symbolic name.

use crate::decode::AscAscq;
use crate::model::{CodeEntry, CodeTable};

const fn asc(asc: u8, ascq: u8, description: &'static str) -> CodeEntry {
    #[allow(clippy::as_conversions)]
    let key = AscAscq::new(asc, ascq).key() as i64;
    CodeEntry::new(key, "", description)
}

pub static ADDITIONAL_SENSE_DATA: CodeTable = CodeTable::new(
    ENTRIES,
    CodeEntry::new(0xffff, "UNKNOWN", "Additional Sense Data unknown."),
);

const ENTRIES: &[CodeEntry] = &[
    asc(0x00, 0x00, "NO ADDITIONAL SENSE INFORMATION"),
    asc(0x00, 0x01, "FILEMARK DETECTED"),
    asc(0x00, 0x02, "END-OF-PARTITION/MEDIUM DETECTED"),
    asc(0x00, 0x03, "SETMARK DETECTED"),
    asc(0x00, 0x04, "BEGINNING-OF-PARTITION/MEDIUM DETECTED"),
    asc(0x00, 0x05, "END-OF-DATA DETECTED"),
    asc(0x00, 0x06, "I/O PROCESS TERMINATED"),
    asc(0x00, 0x07, "PROGRAMMABLE EARLY WARNING DETECTED"),
    asc(0x00, 0x11, "AUDIO PLAY OPERATION IN PROGRESS"),
    asc(0x00, 0x12, "AUDIO PLAY OPERATION PAUSED"),
    asc(0x00, 0x13, "AUDIO PLAY OPERATION SUCCESSFULLY COMPLETED"),
    asc(0x00, 0x14, "AUDIO PLAY OPERATION STOPPED DUE TO ERROR"),
    asc(0x00, 0x15, "NO CURRENT AUDIO STATUS TO RETURN"),
    asc(0x00, 0x16, "OPERATION IN PROGRESS"),
    asc(0x00, 0x17, "CLEANING REQUESTED"),
    asc(0x00, 0x18, "ERASE OPERATION IN PROGRESS"),
    asc(0x00, 0x19, "LOCATE OPERATION IN PROGRESS"),
    asc(0x00, 0x1a, "REWIND OPERATION IN PROGRESS"),
    asc(0x00, 0x1b, "SET CAPACITY OPERATION IN PROGRESS"),
    asc(0x00, 0x1c, "VERIFY OPERATION IN PROGRESS"),
    asc(0x00, 0x1d, "ATA PASS THROUGH INFORMATION AVAILABLE"),
    asc(0x00, 0x1e, "CONFLICTING SA CREATION REQUEST"),
    asc(0x00, 0x1f, "LOGICAL UNIT TRANSITIONING TO ANOTHER POWER CONDITION"),
    asc(0x00, 0x20, "EXTENDED COPY INFORMATION AVAILABLE"),
    asc(0x01, 0x00, "NO INDEX/SECTOR SIGNAL"),
    asc(0x02, 0x00, "NO SEEK COMPLETE"),
    asc(0x03, 0x00, "PERIPHERAL DEVICE WRITE FAULT"),
    asc(0x03, 0x01, "NO WRITE CURRENT"),
    asc(0x03, 0x02, "EXCESSIVE WRITE ERRORS"),
    asc(0x04, 0x00, "LOGICAL UNIT NOT READY, CAUSE NOT REPORTABLE"),
    asc(0x04, 0x01, "LOGICAL UNIT IS IN PROCESS OF BECOMING READY"),
    asc(0x04, 0x02, "LOGICAL UNIT NOT READY, INITIALIZING COMMAND REQUIRED"),
    asc(0x04, 0x03, "LOGICAL UNIT NOT READY, MANUAL INTERVENTION REQUIRED"),
    asc(0x04, 0x04, "LOGICAL UNIT NOT READY, FORMAT IN PROGRESS"),
    asc(0x04, 0x05, "LOGICAL UNIT NOT READY, REBUILD IN PROGRESS"),
    asc(0x04, 0x06, "LOGICAL UNIT NOT READY, RECALCULATION IN PROGRESS"),
    asc(0x04, 0x07, "LOGICAL UNIT NOT READY, OPERATION IN PROGRESS"),
    asc(0x04, 0x08, "LOGICAL UNIT NOT READY, LONG WRITE IN PROGRESS"),
    asc(0x04, 0x09, "LOGICAL UNIT NOT READY, SELF-TEST IN PROGRESS"),
    asc(0x04, 0x0a, "LOGICAL UNIT NOT ACCESSIBLE, ASYMMETRIC ACCESS STATE TRANSITION"),
    asc(0x04, 0x0b, "LOGICAL UNIT NOT ACCESSIBLE, TARGET PORT IN STANDBY STATE"),
    asc(0x04, 0x0c, "LOGICAL UNIT NOT ACCESSIBLE, TARGET PORT IN UNAVAILABLE STATE"),
    asc(0x04, 0x0d, "LOGICAL UNIT NOT READY, STRUCTURE CHECK REQUIRED"),
    asc(0x04, 0x0e, "LOGICAL UNIT NOT READY, SECURITY SESSION IN PROGRESS"),
    asc(0x04, 0x10, "LOGICAL UNIT NOT READY, AUXILIARY MEMORY NOT ACCESSIBLE"),
    asc(0x04, 0x11, "LOGICAL UNIT NOT READY, NOTIFY (ENABLE SPINUP) REQUIRED"),
    asc(0x04, 0x12, "LOGICAL UNIT NOT READY, OFFLINE"),
    asc(0x04, 0x13, "LOGICAL UNIT NOT READY, SA CREATION IN PROGRESS"),
    asc(0x04, 0x14, "LOGICAL UNIT NOT READY, SPACE ALLOCATION IN PROGRESS"),
    asc(0x04, 0x15, "LOGICAL UNIT NOT READY, ROBOTICS DISABLED"),
    asc(0x04, 0x16, "LOGICAL UNIT NOT READY, CONFIGURATION REQUIRED"),
    asc(0x04, 0x17, "LOGICAL UNIT NOT READY, CALIBRATION REQUIRED"),
    asc(0x04, 0x18, "LOGICAL UNIT NOT READY, A DOOR IS OPEN"),
    asc(0x04, 0x19, "LOGICAL UNIT NOT READY, OPERATING IN SEQUENTIAL MODE"),
    asc(0x04, 0x1a, "LOGICAL UNIT NOT READY, START STOP UNIT COMMAND IN PROGRESS"),
    asc(0x04, 0x1b, "LOGICAL UNIT NOT READY, SANITIZE IN PROGRESS"),
    asc(0x04, 0x1c, "LOGICAL UNIT NOT READY, ADDITIONAL POWER USE NOT YET GRANTED"),
    asc(0x04, 0x1d, "LOGICAL UNIT NOT READY, CONFIGURATION IN PROGRESS"),
    asc(0x04, 0x1e, "LOGICAL UNIT NOT READY, MICROCODE ACTIVATION REQUIRED"),
    asc(0x04, 0x1f, "LOGICAL UNIT NOT READY, MICROCODE DOWNLOAD REQUIRED"),
    asc(0x04, 0x20, "LOGICAL UNIT NOT READY, LOGICAL UNIT RESET REQUIRED"),
    asc(0x04, 0x21, "LOGICAL UNIT NOT READY, HARD RESET REQUIRED"),
    asc(0x04, 0x22, "LOGICAL UNIT NOT READY, POWER CYCLE REQUIRED"),
    asc(0x05, 0x00, "LOGICAL UNIT DOES NOT RESPOND TO SELECTION"),
    asc(0x06, 0x00, "NO REFERENCE POSITION FOUND"),
    asc(0x07, 0x00, "MULTIPLE PERIPHERAL DEVICES SELECTED"),
    asc(0x08, 0x00, "LOGICAL UNIT COMMUNICATION FAILURE"),
    asc(0x08, 0x01, "LOGICAL UNIT COMMUNICATION TIME-OUT"),
    asc(0x08, 0x02, "LOGICAL UNIT COMMUNICATION PARITY ERROR"),
    asc(0x08, 0x03, "LOGICAL UNIT COMMUNICATION CRC ERROR (ULTRA-DMA/32)"),
    asc(0x08, 0x04, "UNREACHABLE COPY TARGET"),
    asc(0x09, 0x00, "TRACK FOLLOWING ERROR"),
    asc(0x09, 0x01, "TRACKING SERVO FAILURE"),
    asc(0x09, 0x02, "FOCUS SERVO FAILURE"),
    asc(0x09, 0x03, "SPINDLE SERVO FAILURE"),
    asc(0x09, 0x04, "HEAD SELECT FAULT"),
    asc(0x0a, 0x00, "ERROR LOG OVERFLOW"),
    asc(0x0b, 0x00, "WARNING"),
    asc(0x0b, 0x01, "WARNING - SPECIFIED TEMPERATURE EXCEEDED"),
    asc(0x0b, 0x02, "WARNING - ENCLOSURE DEGRADED"),
    asc(0x0b, 0x03, "WARNING - BACKGROUND SELF-TEST FAILED"),
    asc(0x0b, 0x04, "WARNING - BACKGROUND PRE-SCAN DETECTED MEDIUM ERROR"),
    asc(0x0b, 0x05, "WARNING - BACKGROUND MEDIUM SCAN DETECTED MEDIUM ERROR"),
    asc(0x0b, 0x06, "WARNING - NON-VOLATILE CACHE NOW VOLATILE"),
    asc(0x0b, 0x07, "WARNING - DEGRADED POWER TO NON-VOLATILE CACHE"),
    asc(0x0b, 0x08, "WARNING - POWER LOSS EXPECTED"),
    asc(0x0b, 0x09, "WARNING - DEVICE STATISTICS NOTIFICATION ACTIVE"),
    asc(0x0b, 0x0a, "WARNING - HIGH CRITICAL TEMPERATURE LIMIT EXCEEDED"),
    asc(0x0b, 0x0b, "WARNING - LOW CRITICAL TEMPERATURE LIMIT EXCEEDED"),
    asc(0x0b, 0x0c, "WARNING - HIGH OPERATING TEMPERATURE LIMIT EXCEEDED"),
    asc(0x0b, 0x0d, "WARNING - LOW OPERATING TEMPERATURE LIMIT EXCEEDED"),
    asc(0x0b, 0x0e, "WARNING - HIGH CRITICAL HUMIDITY LIMIT EXCEEDED"),
    asc(0x0b, 0x0f, "WARNING - LOW CRITICAL HUMIDITY LIMIT EXCEEDED"),
    asc(0x0b, 0x10, "WARNING - HIGH OPERATING HUMIDITY LIMIT EXCEEDED"),
    asc(0x0b, 0x11, "WARNING - LOW OPERATING HUMIDITY LIMIT EXCEEDED"),
    asc(0x0b, 0x12, "WARNING - MICROCODE SECURITY AT RISK"),
    asc(0x0b, 0x13, "WARNING - MICROCODE DIGITAL SIGNATURE VALIDATION FAILURE"),
    asc(0x0b, 0x14, "WARNING - PHYSICAL ELEMENT STATUS CHANGE"),
    asc(0x0c, 0x00, "WRITE ERROR"),
    asc(0x0c, 0x01, "WRITE ERROR - RECOVERED WITH AUTO REALLOCATION"),
    asc(0x0c, 0x02, "WRITE ERROR - AUTO REALLOCATION FAILED"),
    asc(0x0c, 0x03, "WRITE ERROR - RECOMMEND REASSIGNMENT"),
    asc(0x0c, 0x04, "COMPRESSION CHECK MISCOMPARE ERROR"),
    asc(0x0c, 0x05, "DATA EXPANSION OCCURRED DURING COMPRESSION"),
    asc(0x0c, 0x06, "BLOCK NOT COMPRESSIBLE"),
    asc(0x0c, 0x07, "WRITE ERROR - RECOVERY NEEDED"),
    asc(0x0c, 0x08, "WRITE ERROR - RECOVERY FAILED"),
    asc(0x0c, 0x09, "WRITE ERROR - LOSS OF STREAMING"),
    asc(0x0c, 0x0a, "WRITE ERROR - PADDING BLOCKS ADDED"),
    asc(0x0c, 0x0b, "AUXILIARY MEMORY WRITE ERROR"),
    asc(0x0c, 0x0c, "WRITE ERROR - UNEXPECTED UNSOLICITED DATA"),
    asc(0x0c, 0x0d, "WRITE ERROR - NOT ENOUGH UNSOLICITED DATA"),
    asc(0x0c, 0x0f, "DEFECTS IN ERROR WINDOW"),
    asc(0x0d, 0x00, "ERROR DETECTED BY THIRD PARTY TEMPORARY INITIATOR"),
    asc(0x0d, 0x01, "THIRD PARTY DEVICE FAILURE"),
    asc(0x0d, 0x02, "COPY TARGET DEVICE NOT REACHABLE"),
    asc(0x0d, 0x03, "INCORRECT COPY TARGET DEVICE TYPE"),
    asc(0x0d, 0x04, "COPY TARGET DEVICE DATA UNDERRUN"),
    asc(0x0d, 0x05, "COPY TARGET DEVICE DATA OVERRUN"),
    asc(0x0e, 0x00, "INVALID INFORMATION UNIT"),
    asc(0x0e, 0x01, "INFORMATION UNIT TOO SHORT"),
    asc(0x0e, 0x02, "INFORMATION UNIT TOO LONG"),
    asc(0x0e, 0x03, "INVALID FIELD IN COMMAND INFORMATION UNIT"),
    asc(0x10, 0x00, "ID CRC OR ECC ERROR"),
    asc(0x10, 0x01, "LOGICAL BLOCK GUARD CHECK FAILED"),
    asc(0x10, 0x02, "LOGICAL BLOCK APPLICATION TAG CHECK FAILED"),
    asc(0x10, 0x03, "LOGICAL BLOCK REFERENCE TAG CHECK FAILED"),
    asc(0x10, 0x04, "LOGICAL BLOCK PROTECTION ERROR ON RECOVER BUFFERED DATA"),
    asc(0x10, 0x05, "LOGICAL BLOCK PROTECTION METHOD ERROR"),
    asc(0x11, 0x00, "UNRECOVERED READ ERROR"),
    asc(0x11, 0x01, "READ RETRIES EXHAUSTED"),
    asc(0x11, 0x02, "ERROR TOO LONG TO CORRECT"),
    asc(0x11, 0x03, "MULTIPLE READ ERRORS"),
    asc(0x11, 0x04, "UNRECOVERED READ ERROR - AUTO REALLOCATE FAILED"),
    asc(0x11, 0x05, "L-EC UNCORRECTABLE ERROR"),
    asc(0x11, 0x06, "CIRC UNRECOVERED ERROR"),
    asc(0x11, 0x07, "DATA RE-SYNCHRONIZATION ERROR"),
    asc(0x11, 0x08, "INCOMPLETE BLOCK READ"),
    asc(0x11, 0x09, "NO GAP FOUND"),
    asc(0x11, 0x0a, "MISCORRECTED ERROR"),
    asc(0x11, 0x0b, "UNRECOVERED READ ERROR - RECOMMEND REASSIGNMENT"),
    asc(0x11, 0x0c, "UNRECOVERED READ ERROR - RECOMMEND REWRITE THE DATA"),
    asc(0x11, 0x0d, "DE-COMPRESSION CRC ERROR"),
    asc(0x11, 0x0e, "CANNOT DECOMPRESS USING DECLARED ALGORITHM"),
    asc(0x11, 0x0f, "ERROR READING UPC/EAN NUMBER"),
    asc(0x11, 0x10, "ERROR READING ISRC NUMBER"),
    asc(0x11, 0x11, "READ ERROR - LOSS OF STREAMING"),
    asc(0x11, 0x12, "AUXILIARY MEMORY READ ERROR"),
    asc(0x11, 0x13, "READ ERROR - FAILED RETRANSMISSION REQUEST"),
    asc(0x11, 0x14, "READ ERROR - LBA MARKED BAD BY APPLICATION CLIENT"),
    asc(0x12, 0x00, "ADDRESS MARK NOT FOUND FOR ID FIELD"),
    asc(0x13, 0x00, "ADDRESS MARK NOT FOUND FOR DATA FIELD"),
    asc(0x14, 0x00, "RECORDED ENTITY NOT FOUND"),
    asc(0x14, 0x01, "RECORD NOT FOUND"),
    asc(0x14, 0x02, "FILEMARK OR SETMARK NOT FOUND"),
    asc(0x14, 0x03, "END-OF-DATA NOT FOUND"),
    asc(0x14, 0x04, "BLOCK SEQUENCE ERROR"),
    asc(0x14, 0x05, "RECORD NOT FOUND - RECOMMEND REASSIGNMENT"),
    asc(0x14, 0x06, "RECORD NOT FOUND - DATA AUTO-REALLOCATED"),
    asc(0x14, 0x07, "LOCATE OPERATION FAILURE"),
    asc(0x15, 0x00, "RANDOM POSITIONING ERROR"),
    asc(0x15, 0x01, "MECHANICAL POSITIONING ERROR"),
    asc(0x15, 0x02, "POSITIONING ERROR DETECTED BY READ OF MEDIUM"),
    asc(0x16, 0x00, "DATA SYNCHRONIZATION MARK ERROR"),
    asc(0x16, 0x01, "DATA SYNC ERROR - DATA REWRITTEN"),
    asc(0x16, 0x02, "DATA SYNC ERROR - RECOMMEND REWRITE"),
    asc(0x16, 0x03, "DATA SYNC ERROR - DATA AUTO-REALLOCATED"),
    asc(0x16, 0x04, "DATA SYNC ERROR - RECOMMEND REASSIGNMENT"),
    asc(0x17, 0x00, "RECOVERED DATA WITH NO ERROR CORRECTION APPLIED"),
    asc(0x17, 0x01, "RECOVERED DATA WITH RETRIES"),
    asc(0x17, 0x02, "RECOVERED DATA WITH POSITIVE HEAD OFFSET"),
    asc(0x17, 0x03, "RECOVERED DATA WITH NEGATIVE HEAD OFFSET"),
    asc(0x17, 0x04, "RECOVERED DATA WITH RETRIES AND/OR CIRC APPLIED"),
    asc(0x17, 0x05, "RECOVERED DATA USING PREVIOUS SECTOR ID"),
    asc(0x17, 0x06, "RECOVERED DATA WITHOUT ECC - DATA AUTO-REALLOCATED"),
    asc(0x17, 0x07, "RECOVERED DATA WITHOUT ECC - RECOMMEND REASSIGNMENT"),
    asc(0x17, 0x08, "RECOVERED DATA WITHOUT ECC - RECOMMEND REWRITE"),
    asc(0x17, 0x09, "RECOVERED DATA WITHOUT ECC - DATA REWRITTEN"),
    asc(0x18, 0x00, "RECOVERED DATA WITH ERROR CORRECTION APPLIED"),
    asc(0x18, 0x01, "RECOVERED DATA WITH ERROR CORR. & RETRIES APPLIED"),
    asc(0x18, 0x02, "RECOVERED DATA - DATA AUTO-REALLOCATED"),
    asc(0x18, 0x03, "RECOVERED DATA WITH CIRC"),
    asc(0x18, 0x04, "RECOVERED DATA WITH L-EC"),
    asc(0x18, 0x05, "RECOVERED DATA - RECOMMEND REASSIGNMENT"),
    asc(0x18, 0x06, "RECOVERED DATA - RECOMMEND REWRITE"),
    asc(0x18, 0x07, "RECOVERED DATA WITH ECC - DATA REWRITTEN"),
    asc(0x18, 0x08, "RECOVERED DATA WITH LINKING"),
    asc(0x19, 0x00, "DEFECT LIST ERROR"),
    asc(0x19, 0x01, "DEFECT LIST NOT AVAILABLE"),
    asc(0x19, 0x02, "DEFECT LIST ERROR IN PRIMARY LIST"),
    asc(0x19, 0x03, "DEFECT LIST ERROR IN GROWN LIST"),
    asc(0x1a, 0x00, "PARAMETER LIST LENGTH ERROR"),
    asc(0x1b, 0x00, "SYNCHRONOUS DATA TRANSFER ERROR"),
    asc(0x1c, 0x00, "DEFECT LIST NOT FOUND"),
    asc(0x1c, 0x01, "PRIMARY DEFECT LIST NOT FOUND"),
    asc(0x1c, 0x02, "GROWN DEFECT LIST NOT FOUND"),
    asc(0x1d, 0x00, "MISCOMPARE DURING VERIFY OPERATION"),
    asc(0x1d, 0x01, "MISCOMPARE VERIFY OF UNMAPPED LBA"),
    asc(0x1e, 0x00, "RECOVERED ID WITH ECC CORRECTION"),
    asc(0x1f, 0x00, "PARTIAL DEFECT LIST TRANSFER"),
    asc(0x20, 0x00, "INVALID COMMAND OPERATION CODE"),
    asc(0x20, 0x01, "ACCESS DENIED - INITIATOR PENDING-ENROLLED"),
    asc(0x20, 0x02, "ACCESS DENIED - NO ACCESS RIGHTS"),
    asc(0x20, 0x03, "ACCESS DENIED - INVALID MGMT ID KEY"),
    asc(0x20, 0x04, "ILLEGAL COMMAND WHILE IN WRITE CAPABLE STATE"),
    asc(0x20, 0x06, "ILLEGAL COMMAND WHILE IN EXPLICIT ADDRESS MODE"),
    asc(0x20, 0x07, "ILLEGAL COMMAND WHILE IN IMPLICIT ADDRESS MODE"),
    asc(0x20, 0x08, "ACCESS DENIED - ENROLLMENT CONFLICT"),
    asc(0x20, 0x09, "ACCESS DENIED - INVALID LU IDENTIFIER"),
    asc(0x20, 0x0a, "ACCESS DENIED - INVALID PROXY TOKEN"),
    asc(0x20, 0x0b, "ACCESS DENIED - ACL LUN CONFLICT"),
    asc(0x20, 0x0c, "ILLEGAL COMMAND WHEN NOT IN APPEND-ONLY MODE"),
    asc(0x21, 0x00, "LOGICAL BLOCK ADDRESS OUT OF RANGE"),
    asc(0x21, 0x01, "INVALID ELEMENT ADDRESS"),
    asc(0x21, 0x02, "INVALID ADDRESS FOR WRITE"),
    asc(0x21, 0x03, "INVALID WRITE CROSSING LAYER JUMP"),
    asc(0x21, 0x04, "UNALIGNED WRITE COMMAND"),
    asc(0x21, 0x05, "WRITE BOUNDARY VIOLATION"),
    asc(0x21, 0x06, "ATTEMPT TO READ INVALID DATA"),
    asc(0x21, 0x07, "READ BOUNDARY VIOLATION"),
    asc(0x22, 0x00, "ILLEGAL FUNCTION (USE 20 00, 24 00, OR 26 00)"),
    asc(0x23, 0x00, "INVALID TOKEN OPERATION, CAUSE NOT REPORTABLE"),
    asc(0x23, 0x01, "INVALID TOKEN OPERATION, UNSUPPORTED TOKEN TYPE"),
    asc(0x23, 0x02, "INVALID TOKEN OPERATION, REMOTE TOKEN USAGE NOT SUPPORTED"),
    asc(0x23, 0x03, "INVALID TOKEN OPERATION, REMOTE ROD TOKEN CREATION NOT SUPPORTED"),
    asc(0x23, 0x04, "INVALID TOKEN OPERATION, TOKEN UNKNOWN"),
    asc(0x23, 0x05, "INVALID TOKEN OPERATION, TOKEN CORRUPT"),
    asc(0x23, 0x06, "INVALID TOKEN OPERATION, TOKEN REVOKED"),
    asc(0x23, 0x07, "INVALID TOKEN OPERATION, TOKEN EXPIRED"),
    asc(0x23, 0x08, "INVALID TOKEN OPERATION, TOKEN CANCELLED"),
    asc(0x23, 0x09, "INVALID TOKEN OPERATION, TOKEN DELETED"),
    asc(0x23, 0x0a, "INVALID TOKEN OPERATION, INVALID TOKEN LENGTH"),
    asc(0x24, 0x00, "INVALID FIELD IN CDB"),
    asc(0x24, 0x01, "CDB DECRYPTION ERROR"),
    asc(0x24, 0x04, "SECURITY AUDIT VALUE FROZEN"),
    asc(0x24, 0x05, "SECURITY WORKING KEY FROZEN"),
    asc(0x24, 0x06, "NONCE NOT UNIQUE"),
    asc(0x24, 0x07, "NONCE TIMESTAMP OUT OF RANGE"),
    asc(0x24, 0x08, "INVALID XCDB"),
    asc(0x25, 0x00, "LOGICAL UNIT NOT SUPPORTED"),
    asc(0x26, 0x00, "INVALID FIELD IN PARAMETER LIST"),
    asc(0x26, 0x01, "PARAMETER NOT SUPPORTED"),
    asc(0x26, 0x02, "PARAMETER VALUE INVALID"),
    asc(0x26, 0x03, "THRESHOLD PARAMETERS NOT SUPPORTED"),
    asc(0x26, 0x04, "INVALID RELEASE OF PERSISTENT RESERVATION"),
    asc(0x26, 0x05, "DATA DECRYPTION ERROR"),
    asc(0x26, 0x06, "TOO MANY TARGET DESCRIPTORS"),
    asc(0x26, 0x07, "UNSUPPORTED TARGET DESCRIPTOR TYPE CODE"),
    asc(0x26, 0x08, "TOO MANY SEGMENT DESCRIPTORS"),
    asc(0x26, 0x09, "UNSUPPORTED SEGMENT DESCRIPTOR TYPE CODE"),
    asc(0x26, 0x0a, "UNEXPECTED INEXACT SEGMENT"),
    asc(0x26, 0x0b, "INLINE DATA LENGTH EXCEEDED"),
    asc(0x26, 0x0c, "INVALID OPERATION FOR COPY SOURCE OR DESTINATION"),
    asc(0x26, 0x0d, "COPY SEGMENT GRANULARITY VIOLATION"),
    asc(0x26, 0x0e, "INVALID PARAMETER WHILE PORT IS ENABLED"),
    asc(0x26, 0x0f, "INVALID DATA-OUT BUFFER INTEGRITY CHECK VALUE"),
    asc(0x26, 0x10, "DATA DECRYPTION KEY FAIL LIMIT REACHED"),
    asc(0x26, 0x11, "INCOMPLETE KEY-ASSOCIATED DATA SET"),
    asc(0x26, 0x12, "VENDOR SPECIFIC KEY REFERENCE NOT FOUND"),
    asc(0x27, 0x00, "WRITE PROTECTED"),
    asc(0x27, 0x01, "HARDWARE WRITE PROTECTED"),
    asc(0x27, 0x02, "LOGICAL UNIT SOFTWARE WRITE PROTECTED"),
    asc(0x27, 0x03, "ASSOCIATED WRITE PROTECT"),
    asc(0x27, 0x04, "PERSISTENT WRITE PROTECT"),
    asc(0x27, 0x05, "PERMANENT WRITE PROTECT"),
    asc(0x27, 0x06, "CONDITIONAL WRITE PROTECT"),
    asc(0x27, 0x07, "SPACE ALLOCATION FAILED WRITE PROTECT"),
    asc(0x28, 0x00, "NOT READY TO READY CHANGE, MEDIUM MAY HAVE CHANGED"),
    asc(0x28, 0x01, "IMPORT OR EXPORT ELEMENT ACCESSED"),
    asc(0x28, 0x02, "FORMAT-LAYER MAY HAVE CHANGED"),
    asc(0x28, 0x03, "IMPORT/EXPORT ELEMENT ACCESSED, MEDIUM CHANGED"),
    asc(0x29, 0x00, "POWER ON, RESET, OR BUS DEVICE RESET OCCURRED"),
    asc(0x29, 0x01, "POWER ON OCCURRED"),
    asc(0x29, 0x02, "SCSI BUS RESET OCCURRED"),
    asc(0x29, 0x03, "BUS DEVICE RESET FUNCTION OCCURRED"),
    asc(0x29, 0x04, "DEVICE INTERNAL RESET"),
    asc(0x29, 0x05, "TRANSCEIVER MODE CHANGED TO SINGLE-ENDED"),
    asc(0x29, 0x06, "TRANSCEIVER MODE CHANGED TO LVD"),
    asc(0x29, 0x07, "I_T NEXUS LOSS OCCURRED"),
    asc(0x2a, 0x00, "PARAMETERS CHANGED"),
    asc(0x2a, 0x01, "MODE PARAMETERS CHANGED"),
    asc(0x2a, 0x02, "LOG PARAMETERS CHANGED"),
    asc(0x2a, 0x03, "RESERVATIONS PREEMPTED"),
    asc(0x2a, 0x04, "RESERVATIONS RELEASED"),
    asc(0x2a, 0x05, "REGISTRATIONS PREEMPTED"),
    asc(0x2a, 0x06, "ASYMMETRIC ACCESS STATE CHANGED"),
    asc(0x2a, 0x07, "IMPLICIT ASYMMETRIC ACCESS STATE TRANSITION FAILED"),
    asc(0x2a, 0x08, "PRIORITY CHANGED"),
    asc(0x2a, 0x09, "CAPACITY DATA HAS CHANGED"),
    asc(0x2a, 0x0a, "ERROR HISTORY I_T NEXUS CLEARED"),
    asc(0x2a, 0x0b, "ERROR HISTORY SNAPSHOT RELEASED"),
    asc(0x2a, 0x0c, "ERROR RECOVERY ATTRIBUTES HAVE CHANGED"),
    asc(0x2a, 0x0d, "DATA ENCRYPTION CAPABILITIES CHANGED"),
    asc(0x2a, 0x10, "TIMESTAMP CHANGED"),
    asc(0x2a, 0x11, "DATA ENCRYPTION PARAMETERS CHANGED BY ANOTHER I_T NEXUS"),
    asc(0x2a, 0x12, "DATA ENCRYPTION PARAMETERS CHANGED BY VENDOR SPECIFIC EVENT"),
    asc(0x2a, 0x13, "DATA ENCRYPTION KEY INSTANCE COUNTER HAS CHANGED"),
    asc(0x2a, 0x14, "SA CREATION CAPABILITIES DATA HAS CHANGED"),
    asc(0x2a, 0x15, "MEDIUM REMOVAL PREVENTION PREEMPTED"),
    asc(0x2b, 0x00, "COPY CANNOT EXECUTE SINCE HOST CANNOT DISCONNECT"),
    asc(0x2c, 0x00, "COMMAND SEQUENCE ERROR"),
    asc(0x2c, 0x01, "TOO MANY WINDOWS SPECIFIED"),
    asc(0x2c, 0x02, "INVALID COMBINATION OF WINDOWS SPECIFIED"),
    asc(0x2c, 0x03, "CURRENT PROGRAM AREA IS NOT EMPTY"),
    asc(0x2c, 0x04, "CURRENT PROGRAM AREA IS EMPTY"),
    asc(0x2c, 0x05, "ILLEGAL POWER CONDITION REQUEST"),
    asc(0x2c, 0x06, "PERSISTENT PREVENT CONFLICT"),
    asc(0x2c, 0x07, "PREVIOUS BUSY STATUS"),
    asc(0x2c, 0x08, "PREVIOUS TASK SET FULL STATUS"),
    asc(0x2c, 0x09, "PREVIOUS RESERVATION CONFLICT STATUS"),
    asc(0x2c, 0x0a, "PARTITION OR COLLECTION CONTAINS USER OBJECTS"),
    asc(0x2c, 0x0b, "NOT RESERVED"),
    asc(0x2c, 0x0c, "ORWRITE GENERATION DOES NOT MATCH"),
    asc(0x2d, 0x00, "OVERWRITE ERROR ON UPDATE IN PLACE"),
    asc(0x2e, 0x00, "INSUFFICIENT TIME FOR OPERATION"),
    asc(0x2f, 0x00, "COMMANDS CLEARED BY ANOTHER INITIATOR"),
    asc(0x2f, 0x01, "COMMANDS CLEARED BY POWER LOSS NOTIFICATION"),
    asc(0x2f, 0x02, "COMMANDS CLEARED BY DEVICE SERVER"),
    asc(0x30, 0x00, "INCOMPATIBLE MEDIUM INSTALLED"),
    asc(0x30, 0x01, "CANNOT READ MEDIUM - UNKNOWN FORMAT"),
    asc(0x30, 0x02, "CANNOT READ MEDIUM - INCOMPATIBLE FORMAT"),
    asc(0x30, 0x03, "CLEANING CARTRIDGE INSTALLED"),
    asc(0x30, 0x04, "CANNOT WRITE MEDIUM - UNKNOWN FORMAT"),
    asc(0x30, 0x05, "CANNOT WRITE MEDIUM - INCOMPATIBLE FORMAT"),
    asc(0x30, 0x06, "CANNOT FORMAT MEDIUM - INCOMPATIBLE MEDIUM"),
    asc(0x30, 0x07, "CLEANING FAILURE"),
    asc(0x30, 0x08, "CANNOT WRITE - APPLICATION CODE MISMATCH"),
    asc(0x30, 0x09, "CURRENT SESSION NOT FIXATED FOR APPEND"),
    asc(0x30, 0x0a, "CLEANING REQUEST REJECTED"),
    asc(0x30, 0x0c, "WORM MEDIUM - OVERWRITE ATTEMPTED"),
    asc(0x30, 0x0d, "WORM MEDIUM - INTEGRITY CHECK"),
    asc(0x30, 0x10, "MEDIUM NOT FORMATTED"),
    asc(0x30, 0x11, "INCOMPATIBLE VOLUME TYPE"),
    asc(0x30, 0x12, "INCOMPATIBLE VOLUME QUALIFIER"),
    asc(0x30, 0x13, "CLEANING VOLUME EXPIRED"),
    asc(0x31, 0x00, "MEDIUM FORMAT CORRUPTED"),
    asc(0x31, 0x01, "FORMAT COMMAND FAILED"),
    asc(0x31, 0x02, "ZONED FORMATTING FAILED DUE TO SPARE LINKING"),
    asc(0x31, 0x03, "SANITIZE COMMAND FAILED"),
    asc(0x32, 0x00, "NO DEFECT SPARE LOCATION AVAILABLE"),
    asc(0x32, 0x01, "DEFECT LIST UPDATE FAILURE"),
    asc(0x33, 0x00, "TAPE LENGTH ERROR"),
    asc(0x34, 0x00, "ENCLOSURE FAILURE"),
    asc(0x35, 0x00, "ENCLOSURE SERVICES FAILURE"),
    asc(0x35, 0x01, "UNSUPPORTED ENCLOSURE FUNCTION"),
    asc(0x35, 0x02, "ENCLOSURE SERVICES UNAVAILABLE"),
    asc(0x35, 0x03, "ENCLOSURE SERVICES TRANSFER FAILURE"),
    asc(0x35, 0x04, "ENCLOSURE SERVICES TRANSFER REFUSED"),
    asc(0x35, 0x05, "ENCLOSURE SERVICES CHECKSUM ERROR"),
    asc(0x36, 0x00, "RIBBON, INK, OR TONER FAILURE"),
    asc(0x37, 0x00, "ROUNDED PARAMETER"),
    asc(0x38, 0x00, "EVENT STATUS NOTIFICATION"),
    asc(0x38, 0x02, "ESN - POWER MANAGEMENT CLASS EVENT"),
    asc(0x38, 0x04, "ESN - MEDIA CLASS EVENT"),
    asc(0x38, 0x06, "ESN - DEVICE BUSY CLASS EVENT"),
    asc(0x38, 0x07, "THIN PROVISIONING SOFT THRESHOLD REACHED"),
    asc(0x39, 0x00, "SAVING PARAMETERS NOT SUPPORTED"),
    asc(0x3a, 0x00, "MEDIUM NOT PRESENT"),
    asc(0x3a, 0x01, "MEDIUM NOT PRESENT - TRAY CLOSED"),
    asc(0x3a, 0x02, "MEDIUM NOT PRESENT - TRAY OPEN"),
    asc(0x3a, 0x03, "MEDIUM NOT PRESENT - LOADABLE"),
    asc(0x3a, 0x04, "MEDIUM NOT PRESENT - MEDIUM AUXILIARY MEMORY ACCESSIBLE"),
    asc(0x3b, 0x00, "SEQUENTIAL POSITIONING ERROR"),
    asc(0x3b, 0x01, "TAPE POSITION ERROR AT BEGINNING-OF-MEDIUM"),
    asc(0x3b, 0x02, "TAPE POSITION ERROR AT END-OF-MEDIUM"),
    asc(0x3b, 0x08, "REPOSITION ERROR"),
    asc(0x3b, 0x0d, "MEDIUM DESTINATION ELEMENT FULL"),
    asc(0x3b, 0x0e, "MEDIUM SOURCE ELEMENT EMPTY"),
    asc(0x3b, 0x11, "MEDIUM MAGAZINE NOT ACCESSIBLE"),
    asc(0x3b, 0x12, "MEDIUM MAGAZINE REMOVED"),
    asc(0x3b, 0x13, "MEDIUM MAGAZINE INSERTED"),
    asc(0x3b, 0x14, "MEDIUM MAGAZINE LOCKED"),
    asc(0x3b, 0x15, "MEDIUM MAGAZINE UNLOCKED"),
    asc(0x3d, 0x00, "INVALID BITS IN IDENTIFY MESSAGE"),
    asc(0x3e, 0x00, "LOGICAL UNIT HAS NOT SELF-CONFIGURED YET"),
    asc(0x3e, 0x01, "LOGICAL UNIT FAILURE"),
    asc(0x3e, 0x02, "TIMEOUT ON LOGICAL UNIT"),
    asc(0x3e, 0x03, "LOGICAL UNIT FAILED SELF-TEST"),
    asc(0x3e, 0x04, "LOGICAL UNIT UNABLE TO UPDATE SELF-TEST LOG"),
    asc(0x3f, 0x00, "TARGET OPERATING CONDITIONS HAVE CHANGED"),
    asc(0x3f, 0x01, "MICROCODE HAS BEEN CHANGED"),
    asc(0x3f, 0x02, "CHANGED OPERATING DEFINITION"),
    asc(0x3f, 0x03, "INQUIRY DATA HAS CHANGED"),
    asc(0x3f, 0x04, "COMPONENT DEVICE ATTACHED"),
    asc(0x3f, 0x05, "DEVICE IDENTIFIER CHANGED"),
    asc(0x3f, 0x06, "REDUNDANCY GROUP CREATED OR MODIFIED"),
    asc(0x3f, 0x07, "REDUNDANCY GROUP DELETED"),
    asc(0x3f, 0x08, "SPARE CREATED OR MODIFIED"),
    asc(0x3f, 0x09, "SPARE DELETED"),
    asc(0x3f, 0x0a, "VOLUME SET CREATED OR MODIFIED"),
    asc(0x3f, 0x0b, "VOLUME SET DELETED"),
    asc(0x3f, 0x0c, "VOLUME SET DEASSIGNED"),
    asc(0x3f, 0x0d, "VOLUME SET REASSIGNED"),
    asc(0x3f, 0x0e, "REPORTED LUNS DATA HAS CHANGED"),
    asc(0x3f, 0x0f, "ECHO BUFFER OVERWRITTEN"),
    asc(0x3f, 0x10, "MEDIUM LOADABLE"),
    asc(0x3f, 0x11, "MEDIUM AUXILIARY MEMORY ACCESSIBLE"),
    asc(0x3f, 0x12, "iSCSI IP ADDRESS ADDED"),
    asc(0x3f, 0x13, "iSCSI IP ADDRESS REMOVED"),
    asc(0x3f, 0x14, "iSCSI IP ADDRESS CHANGED"),
    asc(0x40, 0x00, "RAM FAILURE (SHOULD USE 40 NN)"),
    asc(0x41, 0x00, "DATA PATH FAILURE (SHOULD USE 40 NN)"),
    asc(0x42, 0x00, "POWER-ON OR SELF-TEST FAILURE (SHOULD USE 40 NN)"),
    asc(0x43, 0x00, "MESSAGE ERROR"),
    asc(0x44, 0x00, "INTERNAL TARGET FAILURE"),
    asc(0x44, 0x71, "ATA DEVICE FAILED SET FEATURES"),
    asc(0x45, 0x00, "SELECT OR RESELECT FAILURE"),
    asc(0x46, 0x00, "UNSUCCESSFUL SOFT RESET"),
    asc(0x47, 0x00, "SCSI PARITY ERROR"),
    asc(0x47, 0x01, "DATA PHASE CRC ERROR DETECTED"),
    asc(0x47, 0x02, "SCSI PARITY ERROR DETECTED DURING ST DATA PHASE"),
    asc(0x47, 0x03, "INFORMATION UNIT iuCRC ERROR DETECTED"),
    asc(0x47, 0x04, "ASYNCHRONOUS INFORMATION PROTECTION ERROR DETECTED"),
    asc(0x47, 0x05, "PROTOCOL SERVICE CRC ERROR"),
    asc(0x47, 0x06, "PHY TEST FUNCTION IN PROGRESS"),
    asc(0x47, 0x7f, "SOME COMMANDS CLEARED BY ISCSI PROTOCOL EVENT"),
    asc(0x48, 0x00, "INITIATOR DETECTED ERROR MESSAGE RECEIVED"),
    asc(0x49, 0x00, "INVALID MESSAGE ERROR"),
    asc(0x4a, 0x00, "COMMAND PHASE ERROR"),
    asc(0x4b, 0x00, "DATA PHASE ERROR"),
    asc(0x4b, 0x01, "INVALID TARGET PORT TRANSFER TAG RECEIVED"),
    asc(0x4b, 0x02, "TOO MUCH WRITE DATA"),
    asc(0x4b, 0x03, "ACK/NAK TIMEOUT"),
    asc(0x4b, 0x04, "NAK RECEIVED"),
    asc(0x4b, 0x05, "DATA OFFSET ERROR"),
    asc(0x4b, 0x06, "INITIATOR RESPONSE TIMEOUT"),
    asc(0x4b, 0x07, "CONNECTION LOST"),
    asc(0x4c, 0x00, "LOGICAL UNIT FAILED SELF-CONFIGURATION"),
    asc(0x4e, 0x00, "OVERLAPPED COMMANDS ATTEMPTED"),
    asc(0x50, 0x00, "WRITE APPEND ERROR"),
    asc(0x50, 0x01, "WRITE APPEND POSITION ERROR"),
    asc(0x50, 0x02, "POSITION ERROR RELATED TO TIMING"),
    asc(0x51, 0x00, "ERASE FAILURE"),
    asc(0x51, 0x01, "ERASE FAILURE - INCOMPLETE ERASE OPERATION DETECTED"),
    asc(0x52, 0x00, "CARTRIDGE FAULT"),
    asc(0x53, 0x00, "MEDIA LOAD OR EJECT FAILED"),
    asc(0x53, 0x01, "UNLOAD TAPE FAILURE"),
    asc(0x53, 0x02, "MEDIUM REMOVAL PREVENTED"),
    asc(0x53, 0x03, "MEDIUM REMOVAL PREVENTED BY DATA TRANSFER ELEMENT"),
    asc(0x53, 0x04, "MEDIUM THREAD OR UNTHREAD FAILURE"),
    asc(0x53, 0x05, "VOLUME IDENTIFIER INVALID"),
    asc(0x53, 0x06, "VOLUME IDENTIFIER MISSING"),
    asc(0x53, 0x07, "DUPLICATE VOLUME IDENTIFIER"),
    asc(0x53, 0x08, "ELEMENT STATUS UNKNOWN"),
    asc(0x54, 0x00, "SCSI TO HOST SYSTEM INTERFACE FAILURE"),
    asc(0x55, 0x00, "SYSTEM RESOURCE FAILURE"),
    asc(0x55, 0x01, "SYSTEM BUFFER FULL"),
    asc(0x55, 0x02, "INSUFFICIENT RESERVATION RESOURCES"),
    asc(0x55, 0x03, "INSUFFICIENT RESOURCES"),
    asc(0x55, 0x04, "INSUFFICIENT REGISTRATION RESOURCES"),
    asc(0x55, 0x05, "INSUFFICIENT ACCESS CONTROL RESOURCES"),
    asc(0x55, 0x06, "AUXILIARY MEMORY OUT OF SPACE"),
    asc(0x55, 0x07, "QUOTA ERROR"),
    asc(0x55, 0x08, "MAXIMUM NUMBER OF SUPPLEMENTAL DECRYPTION KEYS EXCEEDED"),
    asc(0x55, 0x09, "MEDIUM AUXILIARY MEMORY NOT ACCESSIBLE"),
    asc(0x55, 0x0a, "DATA CURRENTLY UNAVAILABLE"),
    asc(0x55, 0x0b, "INSUFFICIENT POWER FOR OPERATION"),
    asc(0x57, 0x00, "UNABLE TO RECOVER TABLE-OF-CONTENTS"),
    asc(0x58, 0x00, "GENERATION DOES NOT EXIST"),
    asc(0x59, 0x00, "UPDATED BLOCK READ"),
    asc(0x5a, 0x00, "OPERATOR REQUEST OR STATE CHANGE INPUT"),
    asc(0x5a, 0x01, "OPERATOR MEDIUM REMOVAL REQUEST"),
    asc(0x5a, 0x02, "OPERATOR SELECTED WRITE PROTECT"),
    asc(0x5a, 0x03, "OPERATOR SELECTED WRITE PERMIT"),
    asc(0x5b, 0x00, "LOG EXCEPTION"),
    asc(0x5b, 0x01, "THRESHOLD CONDITION MET"),
    asc(0x5b, 0x02, "LOG COUNTER AT MAXIMUM"),
    asc(0x5b, 0x03, "LOG LIST CODES EXHAUSTED"),
    asc(0x5c, 0x00, "RPL STATUS CHANGE"),
    asc(0x5c, 0x01, "SPINDLES SYNCHRONIZED"),
    asc(0x5c, 0x02, "SPINDLES NOT SYNCHRONIZED"),
    asc(0x5d, 0x00, "FAILURE PREDICTION THRESHOLD EXCEEDED"),
    asc(0x5d, 0x01, "MEDIA FAILURE PREDICTION THRESHOLD EXCEEDED"),
    asc(0x5d, 0x02, "LOGICAL UNIT FAILURE PREDICTION THRESHOLD EXCEEDED"),
    asc(0x5d, 0x03, "SPARE AREA EXHAUSTION PREDICTION THRESHOLD EXCEEDED"),
    asc(0x5d, 0x10, "HARDWARE IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x11, "HARDWARE IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x12, "HARDWARE IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x13, "HARDWARE IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x14, "HARDWARE IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x15, "HARDWARE IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x16, "HARDWARE IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x17, "HARDWARE IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x18, "HARDWARE IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x19, "HARDWARE IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x1a, "HARDWARE IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x1b, "HARDWARE IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x1c, "HARDWARE IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x1d, "HARDWARE IMPENDING FAILURE POWER LOSS PROTECTION CIRCUIT"),
    asc(0x5d, 0x20, "CONTROLLER IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x21, "CONTROLLER IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x22, "CONTROLLER IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x23, "CONTROLLER IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x24, "CONTROLLER IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x25, "CONTROLLER IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x26, "CONTROLLER IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x27, "CONTROLLER IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x28, "CONTROLLER IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x29, "CONTROLLER IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x2a, "CONTROLLER IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x2b, "CONTROLLER IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x2c, "CONTROLLER IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x30, "DATA CHANNEL IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x31, "DATA CHANNEL IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x32, "DATA CHANNEL IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x33, "DATA CHANNEL IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x34, "DATA CHANNEL IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x35, "DATA CHANNEL IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x36, "DATA CHANNEL IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x37, "DATA CHANNEL IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x38, "DATA CHANNEL IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x39, "DATA CHANNEL IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x3a, "DATA CHANNEL IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x3b, "DATA CHANNEL IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x3c, "DATA CHANNEL IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x40, "SERVO IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x41, "SERVO IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x42, "SERVO IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x43, "SERVO IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x44, "SERVO IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x45, "SERVO IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x46, "SERVO IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x47, "SERVO IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x48, "SERVO IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x49, "SERVO IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x4a, "SERVO IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x4b, "SERVO IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x4c, "SERVO IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x50, "SPINDLE IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x51, "SPINDLE IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x52, "SPINDLE IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x53, "SPINDLE IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x54, "SPINDLE IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x55, "SPINDLE IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x56, "SPINDLE IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x57, "SPINDLE IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x58, "SPINDLE IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x59, "SPINDLE IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x5a, "SPINDLE IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x5b, "SPINDLE IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x5c, "SPINDLE IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x60, "FIRMWARE IMPENDING FAILURE GENERAL HARD DRIVE FAILURE"),
    asc(0x5d, 0x61, "FIRMWARE IMPENDING FAILURE DRIVE ERROR RATE TOO HIGH"),
    asc(0x5d, 0x62, "FIRMWARE IMPENDING FAILURE DATA ERROR RATE TOO HIGH"),
    asc(0x5d, 0x63, "FIRMWARE IMPENDING FAILURE SEEK ERROR RATE TOO HIGH"),
    asc(0x5d, 0x64, "FIRMWARE IMPENDING FAILURE TOO MANY BLOCK REASSIGNS"),
    asc(0x5d, 0x65, "FIRMWARE IMPENDING FAILURE ACCESS TIMES TOO HIGH"),
    asc(0x5d, 0x66, "FIRMWARE IMPENDING FAILURE START UNIT TIMES TOO HIGH"),
    asc(0x5d, 0x67, "FIRMWARE IMPENDING FAILURE CHANNEL PARAMETRICS"),
    asc(0x5d, 0x68, "FIRMWARE IMPENDING FAILURE CONTROLLER DETECTED"),
    asc(0x5d, 0x69, "FIRMWARE IMPENDING FAILURE THROUGHPUT PERFORMANCE"),
    asc(0x5d, 0x6a, "FIRMWARE IMPENDING FAILURE SEEK TIME PERFORMANCE"),
    asc(0x5d, 0x6b, "FIRMWARE IMPENDING FAILURE SPIN-UP RETRY COUNT"),
    asc(0x5d, 0x6c, "FIRMWARE IMPENDING FAILURE DRIVE CALIBRATION RETRY COUNT"),
    asc(0x5d, 0x73, "MEDIA IMPENDING FAILURE ENDURANCE LIMIT MET"),
    asc(0x5d, 0xff, "FAILURE PREDICTION THRESHOLD EXCEEDED (FALSE)"),
    asc(0x5e, 0x00, "LOW POWER CONDITION ON"),
    asc(0x5e, 0x01, "IDLE CONDITION ACTIVATED BY TIMER"),
    asc(0x5e, 0x02, "STANDBY CONDITION ACTIVATED BY TIMER"),
    asc(0x5e, 0x03, "IDLE CONDITION ACTIVATED BY COMMAND"),
    asc(0x5e, 0x04, "STANDBY CONDITION ACTIVATED BY COMMAND"),
    asc(0x5e, 0x41, "POWER STATE CHANGE TO ACTIVE"),
    asc(0x5e, 0x42, "POWER STATE CHANGE TO IDLE"),
    asc(0x5e, 0x43, "POWER STATE CHANGE TO STANDBY"),
    asc(0x5e, 0x45, "POWER STATE CHANGE TO SLEEP"),
    asc(0x5e, 0x47, "POWER STATE CHANGE TO DEVICE CONTROL"),
    asc(0x60, 0x00, "LAMP FAILURE"),
    asc(0x61, 0x00, "VIDEO ACQUISITION ERROR"),
    asc(0x61, 0x01, "UNABLE TO ACQUIRE VIDEO"),
    asc(0x61, 0x02, "OUT OF FOCUS"),
    asc(0x62, 0x00, "SCAN HEAD POSITIONING ERROR"),
    asc(0x63, 0x00, "END OF USER AREA ENCOUNTERED ON THIS TRACK"),
    asc(0x63, 0x01, "PACKET DOES NOT FIT IN AVAILABLE SPACE"),
    asc(0x64, 0x00, "ILLEGAL MODE FOR THIS TRACK"),
    asc(0x64, 0x01, "INVALID PACKET SIZE"),
    asc(0x65, 0x00, "VOLTAGE FAULT"),
    asc(0x66, 0x00, "AUTOMATIC DOCUMENT FEEDER COVER UP"),
    asc(0x67, 0x00, "CONFIGURATION FAILURE"),
    asc(0x67, 0x01, "CONFIGURATION OF INCAPABLE LOGICAL UNITS FAILED"),
    asc(0x67, 0x02, "ADD LOGICAL UNIT FAILED"),
    asc(0x67, 0x03, "MODIFICATION OF LOGICAL UNIT FAILED"),
    asc(0x67, 0x04, "EXCHANGE OF LOGICAL UNIT FAILED"),
    asc(0x67, 0x05, "REMOVE OF LOGICAL UNIT FAILED"),
    asc(0x67, 0x06, "ATTACHMENT OF LOGICAL UNIT FAILED"),
    asc(0x67, 0x07, "CREATION OF LOGICAL UNIT FAILED"),
    asc(0x67, 0x08, "ASSIGN FAILURE OCCURRED"),
    asc(0x67, 0x09, "MULTIPLY ASSIGNED LOGICAL UNIT"),
    asc(0x67, 0x0a, "SET TARGET PORT GROUPS COMMAND FAILED"),
    asc(0x67, 0x0b, "ATA DEVICE FEATURE NOT ENABLED"),
    asc(0x68, 0x00, "LOGICAL UNIT NOT CONFIGURED"),
    asc(0x69, 0x00, "DATA LOSS ON LOGICAL UNIT"),
    asc(0x69, 0x01, "MULTIPLE LOGICAL UNIT FAILURES"),
    asc(0x69, 0x02, "PARITY/DATA MISMATCH"),
    asc(0x6a, 0x00, "INFORMATIONAL, REFER TO LOG"),
    asc(0x6b, 0x00, "STATE CHANGE HAS OCCURRED"),
    asc(0x6b, 0x01, "REDUNDANCY LEVEL GOT BETTER"),
    asc(0x6b, 0x02, "REDUNDANCY LEVEL GOT WORSE"),
    asc(0x6c, 0x00, "REBUILD FAILURE OCCURRED"),
    asc(0x6d, 0x00, "RECALCULATE FAILURE OCCURRED"),
    asc(0x6e, 0x00, "COMMAND TO LOGICAL UNIT FAILED"),
    asc(0x6f, 0x00, "COPY PROTECTION KEY EXCHANGE FAILURE - AUTHENTICATION FAILURE"),
    asc(0x6f, 0x01, "COPY PROTECTION KEY EXCHANGE FAILURE - KEY NOT PRESENT"),
    asc(0x6f, 0x02, "COPY PROTECTION KEY EXCHANGE FAILURE - KEY NOT ESTABLISHED"),
    asc(0x6f, 0x03, "READ OF SCRAMBLED SECTOR WITHOUT AUTHENTICATION"),
    asc(0x6f, 0x04, "MEDIA REGION CODE IS MISMATCHED TO LOGICAL UNIT REGION"),
    asc(0x6f, 0x05, "DRIVE REGION MUST BE PERMANENT/REGION RESET COUNT ERROR"),
    asc(0x71, 0x00, "DECOMPRESSION EXCEPTION LONG ALGORITHM ID"),
    asc(0x72, 0x00, "SESSION FIXATION ERROR"),
    asc(0x72, 0x01, "SESSION FIXATION ERROR WRITING LEAD-IN"),
    asc(0x72, 0x02, "SESSION FIXATION ERROR WRITING LEAD-OUT"),
    asc(0x73, 0x00, "CD CONTROL ERROR"),
    asc(0x73, 0x01, "POWER CALIBRATION AREA ALMOST FULL"),
    asc(0x73, 0x02, "POWER CALIBRATION AREA IS FULL"),
    asc(0x73, 0x03, "POWER CALIBRATION AREA ERROR"),
    asc(0x74, 0x00, "SECURITY ERROR"),
    asc(0x74, 0x01, "UNABLE TO DECRYPT DATA"),
    asc(0x74, 0x02, "UNENCRYPTED DATA ENCOUNTERED WHILE DECRYPTING"),
    asc(0x74, 0x03, "INCORRECT DATA ENCRYPTION KEY"),
    asc(0x74, 0x04, "CRYPTOGRAPHIC INTEGRITY VALIDATION FAILED"),
    asc(0x74, 0x05, "ERROR DECRYPTING DATA"),
    asc(0x74, 0x08, "DIGITAL SIGNATURE VALIDATION FAILURE"),
    asc(0x74, 0x71, "LOGICAL UNIT ACCESS NOT AUTHORIZED"),
    asc(0x74, 0x79, "SECURITY CONFLICT IN TRANSLATED DEVICE"),
];
