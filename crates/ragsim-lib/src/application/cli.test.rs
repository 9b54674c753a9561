// Tests for CLI argument parsing

use super::*;
use crate::primitives::{ColorMode, LogFormat};
use std::path::Path;

#[test]
fn test_no_command_parses() {
    let cli = Cli::try_parse_from(["ragsim"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.config.log_level, 0);
    assert_eq!(cli.config.color, ColorMode::Auto);
}

#[test]
fn test_check_command_with_default_report() {
    let cli = Cli::try_parse_from(["ragsim", "check", "snapshot.toml"]).unwrap();
    match cli.command {
        Some(Commands::Check { scenario, report }) => {
            assert_eq!(scenario, Path::new("snapshot.toml"));
            assert_eq!(report, ReportFormat::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_detect_command_with_json_report() {
    let cli =
        Cli::try_parse_from(["ragsim", "detect", "snapshot.toml", "--report", "json"]).unwrap();
    match cli.command {
        Some(Commands::Detect { report, .. }) => assert_eq!(report, ReportFormat::Json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_interactive_command() {
    let cli = Cli::try_parse_from(["ragsim", "interactive"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn test_global_config_flags() {
    let cli = Cli::try_parse_from([
        "ragsim",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "--color",
        "never",
        "check",
        "s.toml",
    ])
    .unwrap();
    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.config.log_format, LogFormat::Json);
    assert_eq!(cli.config.color, ColorMode::Never);
}

#[test]
fn test_check_requires_a_scenario_path() {
    assert!(Cli::try_parse_from(["ragsim", "check"]).is_err());
}
