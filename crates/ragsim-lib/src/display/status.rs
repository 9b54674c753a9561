//! Status display for user feedback
//!
//! Provides semantic status updates that replace raw println! usage with
//! styled, color-mode-aware formatting.

use console::style;

/// Status display manager for semantic user feedback
pub struct StatusDisplay;

impl StatusDisplay {
    pub fn new() -> Self {
        Self
    }

    /// Display a success status with optional details
    ///
    /// Output: `✓ safe state: P1 → P3 → P0`
    pub fn success(&self, item: &str, details: &str) {
        if details.is_empty() {
            println!("{} {}", style("✓").green().bold(), item);
        } else {
            println!("{} {}: {}", style("✓").green().bold(), item, details);
        }
    }

    /// Display an error status with details
    ///
    /// Output: `✗ deadlock: cycle of 4 edges`
    pub fn error(&self, item: &str, details: &str) {
        if details.is_empty() {
            println!("{} {}", style("✗").red().bold(), item);
        } else {
            println!("{} {}: {}", style("✗").red().bold(), item, details);
        }
    }

    /// Display a warning status
    pub fn warning(&self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), message);
    }

    /// Display an info status
    pub fn info(&self, message: &str) {
        println!("{} {}", style("·").cyan(), message);
    }

    /// Display a simple message without status symbols
    pub fn message(&self, text: &str) {
        println!("{text}");
    }

    /// Display a subtle/secondary message
    pub fn subtle(&self, text: &str) {
        println!("{}", style(text).dim());
    }

    /// Display a list of items with bullets
    pub fn list(&self, items: &[String]) {
        for item in items {
            println!("  {} {}", style("-").dim(), item);
        }
    }
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::new()
    }
}
