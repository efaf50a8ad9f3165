//! Command dispatch: bridges CLI args -> core lookups -> output formatting.

pub mod decode;
pub mod list;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

/// Decode the requested codes, append any `--list` tables, and print the
/// result as a single document.
pub fn dispatch(cli: &Cli, settings: Settings) -> Result<(), CliError> {
    let mut reports = decode::queries(cli)?;
    reports.extend(list::entries(&cli.list));

    tracing::debug!(reports = reports.len(), format = ?settings.output, "rendering");
    let out = output::render_reports(settings, &reports)?;
    output::print_output(&out)
}
