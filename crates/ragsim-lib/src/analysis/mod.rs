//! The two deadlock-analysis engines and their shared graph model
//!
//! Everything in here is synchronous and pure: each entry point receives
//! fresh matrices, owns all of its mutable state for the duration of one
//! call, and returns a self-contained, render-agnostic result.

pub mod circular;
pub mod graph;
pub mod safety;
mod validate;

// Re-export main types for convenience
pub use circular::{DeadlockResult, run_deadlock_check};
pub use graph::AllocationGraph;
pub use safety::{SafetyResult, SafetyStep, run_safety_check, run_safety_check_observed};
