//! Wgraph CLI binary.

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wgraph::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // RUST_LOG overrides -v, e.g. RUST_LOG=wgraph=trace,wgraph_text=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting wgraph CLI");

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
