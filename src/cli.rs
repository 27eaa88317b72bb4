use crate::config::{resolve_config_path, FileConfig};
use crate::container::HandlerRegistry;
use crate::handlers;
use crate::output;
use crate::runner::{JobRunner, SystemClock};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "cronctl",
    version,
    about = "Run configured cron jobs on demand"
)]
pub struct Cli {
    /// Path to the job registry (JSON). Defaults to <config dir>/cronctl/jobs.json
    #[arg(long, global = true, env = "CRONCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON instead of a tagged text line
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run cron job by code immediately
    #[command(name = "cron:run-now")]
    RunNow {
        /// Cron job code
        #[arg(value_name = "JOB_CODE")]
        job_code: String,
    },
}

/// Execute the parsed command and return the process exit code.
pub fn run(args: Cli) -> Result<i32> {
    match &args.command {
        Command::RunNow { job_code } => run_now(&args, job_code),
    }
}

fn run_now(args: &Cli, job_code: &str) -> Result<i32> {
    let path = resolve_config_path(args.config.as_deref())?;
    tracing::debug!(path = %path.display(), job_code, "running job now");

    let config = FileConfig::new(path);
    let mut registry = HandlerRegistry::new();
    handlers::register_builtin(&mut registry);

    let report = JobRunner::new(&config, &registry, &SystemClock).run(job_code)?;

    let line = if args.json {
        output::render_json(&report)?
    } else {
        output::render_text(&report)
    };
    output::emit(line)?;
    Ok(report.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_run_now_with_job_code() {
        let cli = Cli::try_parse_from(["cronctl", "cron:run-now", "sales_clean_quotes"]).unwrap();
        assert_matches!(cli.command, Command::RunNow { job_code } if job_code == "sales_clean_quotes");
        assert!(!cli.json);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cronctl",
            "cron:run-now",
            "indexer_reindex_all_invalid",
            "--json",
            "--config",
            "/etc/cronctl/jobs.json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/cronctl/jobs.json")));
    }

    #[test]
    fn job_code_is_required() {
        let err = Cli::try_parse_from(["cronctl", "cron:run-now"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
