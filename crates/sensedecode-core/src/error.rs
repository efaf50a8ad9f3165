// ── Core error types ──
//
// Lookups never fail: an unmatched code resolves to the table's sentinel.
// The only error surface is turning user text into a lookup key.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid additional sense data '{input}': {reason}")]
    InvalidSensePair { input: String, reason: String },
}
