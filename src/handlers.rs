//! Handlers shipped with the binary.

use crate::container::{HandlerRegistry, JobHandler, JobMethod};
use crate::error::JobError;
use std::process::Command;

/// Register the built-in handlers: `noop` and `shell:<command line>`.
pub fn register_builtin(registry: &mut HandlerRegistry) {
    registry
        .register("noop", || Ok(Box::new(Noop) as Box<dyn JobHandler>))
        .register_prefix("shell:", |command| {
            ShellCommand::new(command).map(|h| Box::new(h) as Box<dyn JobHandler>)
        });
}

/// Does nothing. Useful for checking a registry entry end to end.
pub struct Noop;

impl JobHandler for Noop {
    fn resolve(&self, method: &str) -> Option<JobMethod<'_>> {
        match method {
            "execute" => Some(Box::new(|| Ok::<(), JobError>(()))),
            _ => None,
        }
    }
}

/// Runs a command line through `sh -c`, inheriting stdio.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command: String,
}

impl ShellCommand {
    pub fn new(command: &str) -> Result<Self, JobError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(JobError::NotConstructible {
                instance: "shell:".into(),
                reason: "empty command line".into(),
            });
        }
        Ok(Self {
            command: command.to_string(),
        })
    }

    fn run(&self) -> Result<(), JobError> {
        tracing::debug!(command = %self.command, "spawning shell command");
        let status = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .status()
            .map_err(|e| {
                JobError::localized(format!("Command `{}` could not be started: {e}", self.command))
            })?;

        if status.success() {
            return Ok(());
        }
        let code = status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        Err(JobError::localized(format!(
            "Command `{}` exited with status {}",
            self.command, code
        )))
    }
}

impl JobHandler for ShellCommand {
    fn resolve(&self, method: &str) -> Option<JobMethod<'_>> {
        match method {
            "execute" | "run" => Some(Box::new(move || self.run())),
            _ => None,
        }
    }
}
