use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for a lookup failure or a recoverable job error.
pub const EXIT_FAILURE: i32 = 1;

/// One configured job entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub name: String,
    pub instance: String,
    pub method: String,
}

impl JobDescriptor {
    pub fn new(
        name: impl Into<String>,
        instance: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            instance: instance.into(),
            method: method.into(),
        }
    }
}

/// Job groups keyed by group name. Groups and the jobs inside them iterate in
/// configured order.
pub type JobGroups = IndexMap<String, Vec<JobDescriptor>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// Outcome of a single `cron:run-now` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub job_code: String,
    pub exit_code: i32,
    pub severity: Severity,
    pub message: String,
    pub started_at_utc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

impl RunReport {
    pub fn failure(job_code: &str, started_at_utc: String, message: impl Into<String>) -> Self {
        Self {
            job_code: job_code.to_string(),
            exit_code: EXIT_FAILURE,
            severity: Severity::Error,
            message: message.into(),
            started_at_utc,
            elapsed_secs: None,
        }
    }

    pub fn success(job_code: &str, started_at_utc: String, elapsed_secs: f64) -> Self {
        Self {
            job_code: job_code.to_string(),
            exit_code: EXIT_SUCCESS,
            severity: Severity::Info,
            message: format!(
                "Magento cron task has been executed, spent time: {} sec",
                elapsed_secs
            ),
            started_at_utc,
            elapsed_secs: Some(elapsed_secs),
        }
    }
}
