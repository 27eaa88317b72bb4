mod cli;
mod config;
mod container;
mod error;
mod handlers;
mod model;
mod output;
mod runner;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay quiet by default so a run prints one line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CRONCTL_LOG").unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let code = cli::run(args)?;
    if code != model::EXIT_SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
