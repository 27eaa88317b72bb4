//! Job registry sources.
//!
//! The runner only sees [`ConfigProvider`]. The binary reads the registry from a
//! JSON file shaped like `{ "<group>": [ { "name", "instance", "method" } ] }`;
//! tests hand over an in-memory map instead.

use crate::model::JobGroups;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read-only source of configured jobs.
pub trait ConfigProvider {
    fn jobs(&self) -> Result<JobGroups>;
}

/// Registry backed by a JSON file, re-read on every call.
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigProvider for FileConfig {
    fn jobs(&self) -> Result<JobGroups> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read job registry {}", self.path.display()))?;
        let groups: JobGroups = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse job registry {}", self.path.display()))?;
        tracing::debug!(
            path = %self.path.display(),
            groups = groups.len(),
            "loaded job registry"
        );
        Ok(groups)
    }
}

/// Registry held in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    groups: JobGroups,
}

#[cfg(test)]
impl StaticConfig {
    pub fn new(groups: JobGroups) -> Self {
        Self { groups }
    }
}

#[cfg(test)]
impl ConfigProvider for StaticConfig {
    fn jobs(&self) -> Result<JobGroups> {
        Ok(self.groups.clone())
    }
}

/// Default registry location: `<config dir>/cronctl/jobs.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cronctl").join("jobs.json"))
}

/// Pick the registry path: explicit (flag or env) first, then the platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    default_config_path().context(
        "no job registry given and no platform config directory found; pass --config",
    )
}
