//! Run one configured job immediately and time it.

use crate::config::ConfigProvider;
use crate::container::Constructor;
use crate::error::JobError;
use crate::model::{JobDescriptor, RunReport};
use anyhow::Result;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Wall clock in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 / 1_000_000.0
    }
}

/// Elapsed seconds between two millisecond readings. The millisecond delta is
/// rounded to two decimals (half away from zero) before conversion, in a single
/// division so the result prints without float noise. A clock that stepped
/// backwards reports zero.
pub fn elapsed_secs(start_ms: f64, end_ms: f64) -> f64 {
    let hundredths = ((end_ms - start_ms) * 100.0).round();
    if hundredths <= 0.0 {
        return 0.0;
    }
    hundredths / 100_000.0
}

fn format_utc(ms: f64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos((ms * 1_000_000.0) as i128)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default()
}

fn invalid_callback(job: &JobDescriptor) -> String {
    format!(
        "Invalid callback: {}::{} can't be called",
        job.instance, job.method
    )
}

pub struct JobRunner<'a> {
    config: &'a dyn ConfigProvider,
    constructor: &'a dyn Constructor,
    clock: &'a dyn Clock,
}

impl<'a> JobRunner<'a> {
    pub fn new(
        config: &'a dyn ConfigProvider,
        constructor: &'a dyn Constructor,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            config,
            constructor,
            clock,
        }
    }

    /// Look up `job_code`, invoke its handler once and report the outcome.
    ///
    /// Lookup failures and recoverable job errors come back as a failed
    /// [`RunReport`]. `Err` is reserved for registry failures and
    /// [`JobError::Unexpected`].
    pub fn run(&self, job_code: &str) -> Result<RunReport> {
        let start = self.clock.now_ms();
        let started_at = format_utc(start);

        let Some(job) = self.find_job(job_code)? else {
            tracing::debug!(job_code, "job code not found in registry");
            return Ok(RunReport::failure(
                job_code,
                started_at,
                format!("Invalid job code <{job_code}>, can't find it in config"),
            ));
        };

        match self.invoke(&job) {
            Ok(()) => {}
            Err(JobError::Localized(msg)) => {
                tracing::warn!(job_code, instance = %job.instance, method = %job.method, "job failed: {msg}");
                return Ok(RunReport::failure(job_code, started_at, msg));
            }
            Err(JobError::NotConstructible { instance, reason }) => {
                tracing::debug!(%instance, %reason, "handler not constructible");
                return Ok(RunReport::failure(
                    job_code,
                    started_at,
                    invalid_callback(&job),
                ));
            }
            Err(JobError::Unexpected(e)) => {
                return Err(e.context(format!("job `{job_code}` failed")));
            }
        }

        let end = self.clock.now_ms();
        let elapsed = elapsed_secs(start, end);
        tracing::debug!(job_code, elapsed, "job finished");
        Ok(RunReport::success(job_code, started_at, elapsed))
    }

    /// First descriptor named `job_code`, scanning groups in order.
    fn find_job(&self, job_code: &str) -> Result<Option<JobDescriptor>> {
        let groups = self.config.jobs()?;
        Ok(groups
            .into_values()
            .flatten()
            .find(|job| job.name == job_code))
    }

    fn invoke(&self, job: &JobDescriptor) -> Result<(), JobError> {
        let handler = self.constructor.create(&job.instance)?;
        let method = handler
            .resolve(&job.method)
            .ok_or_else(|| JobError::localized(invalid_callback(job)))?;

        tracing::debug!(instance = %job.instance, method = %job.method, "invoking job");
        method()
    }
}
