//! Single-code lookups requested by `-h`, `-d`, `-p`, `-s` and `-a`.

use sensedecode_core::{AscAscq, Category, Decoded};

use crate::cli::Cli;
use crate::error::CliError;

/// Resolve every requested code, in report order.
///
/// The ASC/ASCQ argument is parsed before anything is looked up, so a
/// malformed pair fails the whole invocation without partial output.
pub fn queries(cli: &Cli) -> Result<Vec<Decoded>, CliError> {
    let pair = cli
        .additional_sense_data
        .as_deref()
        .map(str::parse::<AscAscq>)
        .transpose()?;
    if let Some(pair) = pair {
        tracing::debug!(%pair, key = pair.key(), "parsed additional sense data");
    }

    let numeric = [
        (Category::Host, cli.host),
        (Category::Device, cli.device),
        (Category::Plugin, cli.plugin),
        (Category::SenseKey, cli.sense_key),
    ];

    let mut reports: Vec<Decoded> = numeric
        .into_iter()
        .filter_map(|(category, code)| code.map(|code| Decoded::lookup(category, code)))
        .collect();
    reports.extend(pair.map(Decoded::asc_ascq));

    for report in reports.iter().filter(|r| r.is_unknown()) {
        tracing::info!(category = %report.category, code = report.entry.code, "code not in table");
    }
    Ok(reports)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn run(args: &[&str]) -> Result<Vec<Decoded>, CliError> {
        let mut argv = vec!["sensedecode"];
        argv.extend_from_slice(args);
        queries(&Cli::try_parse_from(argv).unwrap())
    }

    fn categories(reports: &[Decoded]) -> Vec<Category> {
        reports.iter().map(|r| r.category).collect()
    }

    #[test]
    fn no_flags_means_no_reports() {
        assert!(run(&[]).unwrap().is_empty());
    }

    #[test]
    fn reports_follow_fixed_order() {
        let reports = run(&["-a", "20/0b", "-s", "5", "-p", "0", "-d", "2", "-h", "0"]).unwrap();
        assert_eq!(
            categories(&reports),
            [
                Category::Host,
                Category::Device,
                Category::Plugin,
                Category::SenseKey,
                Category::AdditionalSenseData,
            ]
        );
        assert_eq!(reports[1].entry.name, "CHECK_CONDITION");
        assert_eq!(reports[4].entry.code, 0x200b);
    }

    #[test]
    fn unknown_code_keeps_queried_value() {
        let reports = run(&["-h", "999"]).unwrap();
        assert_eq!(reports[0].entry.code, 999);
        assert_eq!(reports[0].entry.name, "UNKNOWN");
        assert!(reports[0].is_unknown());
    }

    #[test]
    fn negative_code_is_unknown() {
        let reports = run(&["-d", "-1"]).unwrap();
        assert_eq!(reports[0].entry.code, -1);
        assert!(reports[0].is_unknown());
    }

    #[test]
    fn malformed_pair_fails_everything() {
        let err = run(&["-h", "1", "-a", "zz/00"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn last_repeated_flag_wins() {
        let reports = run(&["-s", "2", "-s", "6"]).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].entry.name, "UNIT ATTENTION");
    }
}
