//! Rendering of a [`RunReport`] for the terminal.

use crate::model::{RunReport, Severity};
use anyhow::Result;
use std::io::Write;

/// Output line routing for stdout/stderr.
#[derive(Debug, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Text mode: `info: ...` on stdout, `error: ...` on stderr.
pub fn render_text(report: &RunReport) -> OutputLine {
    let line = format!("{}: {}", report.severity.as_str(), report.message);
    match report.severity {
        Severity::Info => OutputLine::Stdout(line),
        Severity::Error => OutputLine::Stderr(line),
    }
}

/// JSON mode: the whole report as a single line on stdout.
pub fn render_json(report: &RunReport) -> Result<OutputLine> {
    Ok(OutputLine::Stdout(serde_json::to_string(report)?))
}

pub fn emit(line: OutputLine) -> Result<()> {
    match line {
        OutputLine::Stdout(msg) => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{msg}")?;
            out.flush()?;
        }
        OutputLine::Stderr(msg) => {
            let mut err = std::io::stderr().lock();
            writeln!(err, "{msg}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_goes_to_stdout_with_info_tag() {
        let report = RunReport::success("sales_clean_quotes", String::new(), 0.5);
        assert_eq!(
            render_text(&report),
            OutputLine::Stdout(
                "info: Magento cron task has been executed, spent time: 0.5 sec".into()
            )
        );
    }

    #[test]
    fn failure_goes_to_stderr_with_error_tag() {
        let report = RunReport::failure("x", String::new(), "boom");
        assert_eq!(render_text(&report), OutputLine::Stderr("error: boom".into()));
    }

    #[test]
    fn json_is_a_single_line() {
        let report = RunReport::success("sales_clean_quotes", "1970-01-01T00:00:00Z".into(), 0.25);
        let OutputLine::Stdout(line) = render_json(&report).unwrap() else {
            panic!("json output must go to stdout");
        };

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "job_code": "sales_clean_quotes",
                "exit_code": 0,
                "severity": "info",
                "message": "Magento cron task has been executed, spent time: 0.25 sec",
                "started_at_utc": "1970-01-01T00:00:00Z",
                "elapsed_secs": 0.25
            })
        );
    }

    #[test]
    fn json_failure_omits_elapsed() {
        let report = RunReport::failure("x", String::new(), "boom");
        let OutputLine::Stdout(line) = render_json(&report).unwrap() else {
            panic!("json output must go to stdout");
        };
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("elapsed_secs").is_none());
        assert_eq!(value["severity"], "error");
    }
}
