//! Output formatting: report blocks, table, JSON, YAML, plain.
//!
//! Renders decoded codes in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one tab-separated
//! line per code.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use sensedecode_core::{Category, Decoded};

use crate::cli::{ColorMode, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Code rendering ───────────────────────────────────────────────────

/// Render a code for display.
///
/// Status codes and sense keys are taken on the command line as decimal and
/// echoed as entered behind a `0x` prefix, the way vmkernel log tooling
/// prints them. ASC/ASCQ keys are hex on input and stay hex.
pub fn format_code(category: Category, code: i64) -> String {
    match category {
        Category::AdditionalSenseData => format!("{code:#06x}"),
        _ => format!("0x{code}"),
    }
}

// ── Render dispatcher ────────────────────────────────────────────────

/// Render decoded codes in the chosen format. Empty input renders nothing.
pub fn render_reports(settings: Settings, reports: &[Decoded]) -> Result<String, CliError> {
    if reports.is_empty() {
        return Ok(String::new());
    }

    let rendered = match settings.output {
        OutputFormat::Text => reports
            .iter()
            .map(|report| render_block(report, settings.color))
            .collect::<String>(),
        OutputFormat::Table => {
            let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::JsonCompact => serde_json::to_string(reports)?,
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
        OutputFormat::Plain => reports
            .iter()
            .map(render_plain_line)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

/// Write rendered output to stdout, newline-terminated.
pub fn print_output(output: &str) -> Result<(), CliError> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

// ── Format-specific renderers ────────────────────────────────────────

/// One report block, terminated by a blank line.
fn render_block(report: &Decoded, color: bool) -> String {
    let header = format!(
        "==================== {} ======================",
        report.category.label()
    );
    let mut block = if color {
        header.bold().to_string()
    } else {
        header
    };
    block.push('\n');

    block.push_str(&format!(
        "Code: [{}]\n",
        format_code(report.category, report.entry.code)
    ));
    if !report.entry.name.is_empty() {
        block.push_str(&format!("Name: {}\n", report.entry.name));
    }
    if !report.entry.description.is_empty() {
        block.push_str(&format!("Description: {}\n", report.entry.description));
    }
    block.push('\n');
    block
}

fn render_plain_line(report: &Decoded) -> String {
    let label = if report.entry.name.is_empty() {
        report.entry.description
    } else {
        report.entry.name
    };
    format!(
        "{}\t{}\t{label}",
        report.category,
        format_code(report.category, report.entry.code)
    )
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

impl From<&Decoded> for ReportRow {
    fn from(report: &Decoded) -> Self {
        Self {
            category: report.category.label(),
            code: format_code(report.category, report.entry.code),
            name: report.entry.name,
            description: report.entry.description,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use sensedecode_core::AscAscq;

    fn settings(output: OutputFormat) -> Settings {
        Settings {
            output,
            color: false,
        }
    }

    #[test]
    fn status_codes_echo_input_digits() {
        assert_eq!(format_code(Category::Host, 0), "0x0");
        assert_eq!(format_code(Category::Host, 999), "0x999");
        assert_eq!(format_code(Category::Device, -1), "0x-1");
        assert_eq!(format_code(Category::SenseKey, 5), "0x5");
    }

    #[test]
    fn asc_ascq_codes_render_as_hex() {
        assert_eq!(format_code(Category::AdditionalSenseData, 0x200b), "0x200b");
        assert_eq!(format_code(Category::AdditionalSenseData, 0x0400), "0x0400");
    }

    #[test]
    fn sense_key_block() {
        let out = render_reports(
            settings(OutputFormat::Text),
            &[Decoded::lookup(Category::SenseKey, 2)],
        )
        .unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        ==================== Sense Key ======================
        Code: [0x2]
        Name: NOT READY
        Description: The logical unit is not accessible.
        ");
    }

    #[test]
    fn blocks_end_with_blank_line() {
        let reports = [
            Decoded::lookup(Category::Host, 0),
            Decoded::lookup(Category::Plugin, 0),
        ];
        let out = render_reports(settings(OutputFormat::Text), &reports).unwrap();
        assert!(out.ends_with("No error.\n\n"), "{out}");
        assert_eq!(out.matches("\n\n====").count(), 1);
    }

    #[test]
    fn empty_name_line_is_omitted() {
        let pair: AscAscq = "20/0b".parse().unwrap();
        let out =
            render_reports(settings(OutputFormat::Text), &[Decoded::asc_ascq(pair)]).unwrap();
        assert!(!out.contains("Name:"), "{out}");
        assert!(out.contains("Code: [0x200b]"));
        assert!(out.contains("Description: ACCESS DENIED - ACL LUN CONFLICT"));
    }

    #[test]
    fn color_only_touches_the_header() {
        let colored = Settings {
            output: OutputFormat::Text,
            color: true,
        };
        let out = render_reports(colored, &[Decoded::lookup(Category::Host, 0)]).unwrap();
        assert!(out.starts_with("\u{1b}["), "{out:?}");
        assert!(out.contains("\nCode: [0x0]\n"));
    }

    #[test]
    fn plain_falls_back_to_description() {
        let reports = [
            Decoded::lookup(Category::Host, 8),
            Decoded::asc_ascq(AscAscq::new(0x04, 0x00)),
        ];
        let out = render_reports(settings(OutputFormat::Plain), &reports).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "host\t0x8\tRESET");
        assert!(lines[1].starts_with("additional-sense-data\t0x0400\tLOGICAL UNIT NOT READY"));
    }

    #[test]
    fn json_is_an_array_of_reports() {
        let out = render_reports(
            settings(OutputFormat::JsonCompact),
            &[Decoded::lookup(Category::Device, 3)],
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["category"], "device");
        assert_eq!(value[0]["code"], 3);
        assert_eq!(value[0]["name"], "UNKNOWN");
    }

    #[test]
    fn table_has_header_row() {
        let out = render_reports(
            settings(OutputFormat::Table),
            &[Decoded::lookup(Category::Plugin, 3)],
        )
        .unwrap();
        assert!(out.contains("Category"));
        assert!(out.contains("RESERVATION_LOST"));
        assert!(out.contains("Plugin Status"));
    }

    #[test]
    fn nothing_to_render_is_empty() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            assert_eq!(render_reports(settings(format), &[]).unwrap(), "");
        }
    }
}
