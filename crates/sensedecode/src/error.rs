//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use sensedecode_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Arguments ────────────────────────────────────────────────────

    #[error("Invalid value for --{field}: {reason}")]
    #[diagnostic(
        code(sensedecode::invalid_argument),
        help("Additional sense data is two hex bytes separated by '/', e.g. -a 20/0b")
    )]
    InvalidArgument { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid {field} in configuration: {reason}")]
    #[diagnostic(code(sensedecode::invalid_config))]
    InvalidConfig { field: String, reason: String },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(sensedecode::no_config),
        help("Check the --config path or unset SENSEDECODE_CONFIG.")
    )]
    ConfigNotFound { path: String },

    #[error(transparent)]
    #[diagnostic(code(sensedecode::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(sensedecode::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(sensedecode::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidSensePair { input, reason } => CliError::InvalidArgument {
                field: "additional-sense-data".into(),
                reason: format!("'{input}': {reason}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_sense_pair_is_a_usage_error() {
        let err: CliError = CoreError::InvalidSensePair {
            input: "zz/00".into(),
            reason: "ASC is not a hex byte".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(
            err.to_string(),
            "Invalid value for --additional-sense-data: 'zz/00': ASC is not a hex byte"
        );
    }

    #[test]
    fn config_problems_are_general_failures() {
        let missing = CliError::ConfigNotFound {
            path: "/nope.toml".into(),
        };
        let bad = CliError::InvalidConfig {
            field: "defaults.output".into(),
            reason: "unknown format 'xml'".into(),
        };
        assert_eq!(missing.exit_code(), exit_code::GENERAL);
        assert_eq!(bad.exit_code(), exit_code::GENERAL);
        assert_ne!(exit_code::SUCCESS, bad.exit_code());
    }
}
