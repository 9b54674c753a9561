//! ragsim primitives - core types, errors, and configuration enums
//!
//! Central collection of shared types that form the foundation of ragsim.
//! Node and edge identities, the matrix aliases both engines consume, the
//! input-validation taxonomy, and the logging/config enums all live here.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Instance-count matrix, row per process, column per resource.
///
/// Entries are signed so that negative input is detected and rejected with
/// [`InputError::NegativeValue`] instead of being unrepresentable.
pub type Matrix = Vec<Vec<i64>>;

/// Resource-indexed instance counts (the available/work vectors).
pub type ResourceVector = Vec<i64>;

/// The two node populations of an allocation graph
///
/// `Process < Resource` in the derived ordering; combined with the index
/// ordering on [`NodeId`] this fixes the traversal order every deterministic
/// walk in the crate relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Process,
    Resource,
}

/// Identity of one node: kind plus zero-based index
///
/// Renders as `P3` / `R1`. Immutable for the lifetime of one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub kind: NodeKind,
    pub index: usize,
}

impl NodeId {
    pub fn process(index: usize) -> Self {
        Self {
            kind: NodeKind::Process,
            index,
        }
    }

    pub fn resource(index: usize) -> Self {
        Self {
            kind: NodeKind::Resource,
            index,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Process => write!(f, "P{}", self.index),
            NodeKind::Resource => write!(f, "R{}", self.index),
        }
    }
}

impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Edge roles in the allocation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Resource → process: instances currently held
    Allocation,
    /// Process → resource: instances waited on
    Request,
}

/// One directed edge of the allocation graph
///
/// The weight carries an instance count for presentation; no engine decision
/// reads it. Edge sets are replaced wholesale on every recomputation, never
/// mutated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub weight: Option<i64>,
}

impl Edge {
    pub fn allocation(resource: usize, process: usize, weight: Option<i64>) -> Self {
        Self {
            from: NodeId::resource(resource),
            to: NodeId::process(process),
            kind: EdgeKind::Allocation,
            weight,
        }
    }

    pub fn request(process: usize, resource: usize, weight: Option<i64>) -> Self {
        Self {
            from: NodeId::process(process),
            to: NodeId::resource(resource),
            kind: EdgeKind::Request,
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

// ============================================================================
// INPUT VALIDATION TAXONOMY
// ============================================================================

/// Malformed-input errors raised before any algorithmic step runs
///
/// Validation is all-or-nothing: the first violation aborts the call and no
/// partial result is produced. An unsafe state or a detected cycle is a
/// normal result, not an error. Vectors are validated as a single row, so
/// their coordinates report `row` 0.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field}: count must be positive, got {value}")]
    NonPositiveCount { field: &'static str, value: i64 },

    #[error("{field}: expected {expected} {unit}, found {found}")]
    ShapeMismatch {
        field: &'static str,
        unit: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field}[{row}][{col}]: negative value {value}")]
    NegativeValue {
        field: &'static str,
        row: usize,
        col: usize,
        value: i64,
    },

    #[error("{field}[{row}][{col}]: expected 0 or 1, found {value}")]
    NonBinaryValue {
        field: &'static str,
        row: usize,
        col: usize,
        value: i64,
    },

    #[error(
        "need[{row}][{col}] would be negative: max_need is {max_need} but allocation is {allocation}"
    )]
    NeedUnderflow {
        row: usize,
        col: usize,
        max_need: i64,
        allocation: i64,
    },
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub ansi: bool,
}

/// Color output control for the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Follow terminal detection
    Auto,
    /// Force styled output
    Always,
    /// Plain text only
    Never,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization and operation errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Tracing subscriber build failed: {reason}")]
    SubscriberBuildFailed { reason: String },
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorMode, "invalid color mode");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
