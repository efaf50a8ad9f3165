//! Clap derive structures for the `sensedecode` CLI.
//!
//! `-h` is the host-status option, so help is long-only (`--help`) and
//! `-v` is taken by `--version`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sensedecode -- decode ESXi SCSI status and sense codes
#[derive(Debug, Parser)]
#[command(
    name = "sensedecode",
    version,
    about = "Decode ESXi SCSI status codes, sense keys and ASC/ASCQ pairs",
    long_about = "Decode the numeric codes in a vmkernel SCSI failure line into names and \
        descriptions.\n\n\
        A line such as `H:0x0 D:0x2 P:0x0 Valid sense data: 0x5 0x20 0x0` decodes with:\n  \
        sensedecode -h 0 -d 2 -p 0 -s 5 -a 20/00\n\n\
        The -h, -d, -p and -s values are decimal, so convert the log's hex first: \
        `D:0x28` (TASK_SET_FULL) is `-d 40`. The report echoes the value as typed \
        behind `0x`. The -a pair is hex and is taken as written.\n\n\
        Reports are printed in the order host, device, plugin, sense key, additional \
        sense data, whatever the order on the command line.",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Decode a host (HBA driver) status code, given in decimal
    #[arg(long, short = 'h', value_name = "N", allow_negative_numbers = true)]
    pub host: Option<i64>,

    /// Decode a device (target/LUN) status code, given in decimal
    #[arg(long, short = 'd', value_name = "N", allow_negative_numbers = true)]
    pub device: Option<i64>,

    /// Decode a plugin (NMP) status code, given in decimal
    #[arg(long, short = 'p', value_name = "N", allow_negative_numbers = true)]
    pub plugin: Option<i64>,

    /// Decode a sense key, given in decimal
    #[arg(long, short = 's', value_name = "N", allow_negative_numbers = true)]
    pub sense_key: Option<i64>,

    /// Decode an additional sense code / qualifier pair, both in hex (e.g. 20/0b)
    #[arg(long, short = 'a', value_name = "ASC/ASCQ")]
    pub additional_sense_data: Option<String>,

    /// List every known code of a category (repeatable)
    #[arg(long, value_name = "CATEGORY", action = ArgAction::Append)]
    pub list: Vec<CategoryArg>,

    /// Output format [default: text]
    #[arg(long, short = 'o', env = "SENSEDECODE_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, env = "SENSEDECODE_COLOR")]
    pub color: Option<ColorMode>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH", env = "SENSEDECODE_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (--verbose, --verbose --verbose, ...)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, short = 'v', action = ArgAction::Version)]
    pub version: Option<bool>,
}

// ── Value enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Report blocks, one per decoded code (default)
    Text,
    /// Pretty table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Tab-separated category, code and name (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Host (HBA driver) status
    Host,
    /// Device (target/LUN) status
    Device,
    /// Plugin (NMP) status
    Plugin,
    /// Sense keys
    SenseKey,
    /// Additional sense code / qualifier pairs
    #[value(alias = "asc")]
    AdditionalSenseData,
}
