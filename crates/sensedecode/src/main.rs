mod argv;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::{CliError, exit_code};

fn main() {
    // Drop unrecognized flags, then parse what is left
    let filtered = argv::retain_known(&Cli::command(), std::env::args_os());
    let cli = Cli::parse_from(filtered.args);

    // Setup tracing based on verbosity
    init_tracing(cli.verbose);
    for token in &filtered.dropped {
        tracing::debug!(token = %token, "ignoring unrecognized argument");
    }

    // Dispatch and handle errors with proper exit codes
    let code = match run(&cli) {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_env("SENSEDECODE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Shell completions generation
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "sensedecode", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading explicit config");
            config::load_config_from(path)?
        }
        None => config::load_config_or_default(),
    };
    let settings = config::resolve_settings(cli, &cfg)?;

    tracing::debug!(?settings, "dispatching");
    commands::dispatch(cli, settings)
}
