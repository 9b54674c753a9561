use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;
use crate::primitives::ConfigError;

/// ragsim CLI - resource allocation graph analysis
#[derive(Debug, Clone, Parser)]
#[command(name = "ragsim")]
#[command(about = "Deadlock analysis over resource allocation graphs")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// ragsim commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from .env and command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; its values only feed the env
        // fallbacks declared on AppConfig.
        dotenvy::dotenv().ok();

        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available ragsim commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the Banker's algorithm safety check on a scenario
    Check {
        /// Scenario TOML file with a [safety] section
        #[arg(help = "Path to the scenario file")]
        scenario: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        report: ReportFormat,
    },

    /// Look for a circular wait in a scenario snapshot
    Detect {
        /// Scenario TOML file with a [deadlock] section
        #[arg(help = "Path to the scenario file")]
        scenario: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        report: ReportFormat,
    },

    /// Enter counts and matrices interactively
    Interactive,
}

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Styled status lines
    Text,
    /// Machine-readable JSON on stdout
    Json,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
