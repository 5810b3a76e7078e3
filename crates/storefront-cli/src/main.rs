//! Storefront CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_cli::cli::Cli;

fn main() -> ExitCode {
    // Initialize tracing subscriber. Logs go to stderr so stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, data_dir = %cli.data_dir.display(), "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match storefront_cli::run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
