// sensedecode-core: SCSI status reference tables and the lookup shared by the CLI.

pub mod decode;
pub mod error;
pub mod model;
pub mod tables;

// ── Primary re-exports ──────────────────────────────────────────────
pub use decode::{AscAscq, Decoded, decode, decode_asc_ascq};
pub use error::CoreError;
pub use model::{Category, CodeEntry, CodeTable};
