//! Scenario files: one snapshot's counts and matrices in TOML
//!
//! A scenario bundles the shared `processes`/`resources`/`allocation` block
//! with an optional `[safety]` section (maximum claims plus the available
//! vector) and an optional `[deadlock]` section (the 0/1 request matrix).
//! This layer only gets the numbers off disk; well-formedness is still
//! decided by engine validation, so a scenario that parses can still be
//! rejected with an `InputError` when an engine runs it.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::primitives::{Matrix, ResourceVector};

/// Errors raised while loading a scenario file
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {source}")]
    ParseError {
        #[from]
        source: toml::de::Error,
    },

    #[error("Scenario has no [{section}] section")]
    MissingSection { section: &'static str },
}

/// Input for the safety engine
#[derive(Debug, Clone, Deserialize)]
pub struct SafetySection {
    pub max_need: Matrix,
    pub available: ResourceVector,
}

/// Input for the circular-wait engine
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlockSection {
    pub request: Matrix,
}

/// One parsed scenario document
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub processes: usize,
    pub resources: usize,
    pub allocation: Matrix,
    #[serde(default)]
    pub safety: Option<SafetySection>,
    #[serde(default)]
    pub deadlock: Option<DeadlockSection>,
}

impl Scenario {
    /// Parse a scenario from TOML text
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(text)?;
        debug!(
            processes = scenario.processes,
            resources = scenario.resources,
            "scenario parsed"
        );
        Ok(scenario)
    }

    /// Read and parse a scenario file
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The `[safety]` section, required by `ragsim check`
    pub fn safety(&self) -> Result<&SafetySection, ScenarioError> {
        self.safety
            .as_ref()
            .ok_or(ScenarioError::MissingSection { section: "safety" })
    }

    /// The `[deadlock]` section, required by `ragsim detect`
    pub fn deadlock(&self) -> Result<&DeadlockSection, ScenarioError> {
        self.deadlock
            .as_ref()
            .ok_or(ScenarioError::MissingSection {
                section: "deadlock",
            })
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
