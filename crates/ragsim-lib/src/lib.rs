//! # ragsim Library
//!
//! Deadlock analysis over operating-system resource allocation graphs.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, matrices, and the input-error taxonomy
//! - [`analysis`] - The graph model, the Banker's algorithm safety engine,
//!   and the circular-wait cycle detector
//! - [`scenario`] - TOML scenario files bundling one snapshot's matrices
//! - [`display`] - Styled status output and interactive matrix entry
//! - [`logger`] - Structured logging via tracing
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use ragsim_lib::{run_safety_check, run_deadlock_check};
//!
//! let allocation = vec![vec![1, 0], vec![0, 1]];
//! let max_need = vec![vec![1, 1], vec![1, 1]];
//! let available = vec![1, 1];
//! let safety = run_safety_check(2, 2, &allocation, &max_need, &available).unwrap();
//! assert!(safety.safe);
//!
//! let request = vec![vec![0, 1], vec![1, 0]];
//! let deadlock = run_deadlock_check(2, 2, &allocation, &request).unwrap();
//! assert!(deadlock.has_cycle);
//! ```

pub mod analysis;
pub mod application;
pub mod display;
pub mod logger;
pub mod primitives;
pub mod scenario;

// Re-export commonly used types for convenience
pub use analysis::{
    AllocationGraph, DeadlockResult, SafetyResult, SafetyStep, run_deadlock_check,
    run_safety_check, run_safety_check_observed,
};
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use primitives::{Edge, EdgeKind, InputError, Matrix, NodeId, NodeKind, ResourceVector};
pub use scenario::Scenario;

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Route library diagnostics before executing the command
    Logger::init(config.app_config.logger_config())?;

    // Execute the command
    execute_command(config)
}
