//! Optional TOML configuration and its resolution against CLI flags.
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! `SENSEDECODE_DEFAULTS_*` environment variables, then `--output` /
//! `--color` (or their `SENSEDECODE_OUTPUT` / `SENSEDECODE_COLOR` env forms).

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, ColorMode, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "text".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config path ─────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "sensedecode", "sensedecode").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sensedecode");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SENSEDECODE_").split("_"))
}

/// Load config from the default location plus environment.
pub fn load_config() -> Result<Config, CliError> {
    let config: Config = figment_for(&config_path()).extract()?;
    Ok(config)
}

/// Load config from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, CliError> {
    if !path.is_file() {
        return Err(CliError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }
    let config: Config = figment_for(path).extract()?;
    Ok(config)
}

/// Load config, returning a default if the file is missing or unreadable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, path = %config_path().display(), "ignoring config file");
        Config::default()
    })
}

// ── Settings resolution ─────────────────────────────────────────────

/// Effective presentation settings for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: bool,
}

/// Merge CLI flags over configured defaults.
pub fn resolve_settings(cli: &Cli, cfg: &Config) -> Result<Settings, CliError> {
    let output = match cli.output {
        Some(format) => format,
        None => parse_value::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
    };
    let color_mode = match cli.color {
        Some(mode) => mode,
        None => parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?,
    };

    Ok(Settings {
        output,
        color: output::should_color(color_mode),
    })
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw.trim(), true).map_err(|_| CliError::InvalidConfig {
        field: field.into(),
        reason: format!(
            "'{raw}' is not one of: {}",
            T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_owned()))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::io::Write;

    use clap::Parser;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sensedecode"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_are_text_and_auto() {
        let cfg = Config::default();
        assert_eq!(cfg.defaults.output, "text");
        assert_eq!(cfg.defaults.color, "auto");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let file = write_config("[defaults]\noutput = \"json\"\ncolor = \"never\"\n");
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.defaults.output, "json");

        let settings = resolve_settings(&cli(&["--color", "never"]), &cfg).unwrap();
        assert_eq!(settings.output, OutputFormat::Json);
        assert!(!settings.color);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_config("[defaults]\ncolor = \"never\"\n");
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.defaults.output, "text");
        assert_eq!(cfg.defaults.color, "never");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_explicit_file_is_an_error() {
        let file = write_config("[defaults\noutput = ");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn cli_flag_beats_config() {
        let cfg = Config {
            defaults: Defaults {
                output: "yaml".into(),
                color: "never".into(),
            },
        };
        let settings = resolve_settings(&cli(&["-o", "plain"]), &cfg).unwrap();
        assert_eq!(settings.output, OutputFormat::Plain);
    }

    #[test]
    fn config_values_are_case_insensitive() {
        let cfg = Config {
            defaults: Defaults {
                output: "JSON-Compact".into(),
                color: "Never".into(),
            },
        };
        let settings = resolve_settings(&cli(&[]), &cfg).unwrap();
        assert_eq!(settings.output, OutputFormat::JsonCompact);
        assert!(!settings.color);
    }

    #[test]
    fn unknown_configured_format_is_rejected() {
        let cfg = Config {
            defaults: Defaults {
                output: "xml".into(),
                color: "auto".into(),
            },
        };
        let err = resolve_settings(&cli(&["--color", "never"]), &cfg).unwrap_err();
        match err {
            CliError::InvalidConfig { field, reason } => {
                assert_eq!(field, "defaults.output");
                assert!(reason.contains("json-compact"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
