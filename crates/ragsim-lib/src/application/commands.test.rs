// Tests for command execution

use super::*;
use crate::application::AppConfig;
use std::fs;
use tempfile::TempDir;

fn config_for(command: Commands) -> CliConfig {
    CliConfig {
        app_config: AppConfig::default(),
        command: Some(command),
    }
}

fn write_scenario(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("scenario.toml");
    fs::write(&path, content).unwrap();
    path
}

const SCENARIO: &str = r#"
processes = 2
resources = 2
allocation = [[1, 0], [0, 1]]

[safety]
max_need = [[1, 1], [1, 1]]
available = [1, 1]

[deadlock]
request = [[0, 1], [1, 0]]
"#;

#[test]
fn test_no_command_is_a_successful_run() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: None,
    };
    assert!(execute_command(config).is_ok());
}

#[test]
fn test_check_runs_from_scenario_file() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(&dir, SCENARIO);

    let result = execute_command(config_for(Commands::Check {
        scenario: path,
        report: ReportFormat::Text,
    }));
    assert!(result.is_ok());
}

#[test]
fn test_detect_runs_with_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(&dir, SCENARIO);

    let result = execute_command(config_for(Commands::Detect {
        scenario: path,
        report: ReportFormat::Json,
    }));
    assert!(result.is_ok());
}

#[test]
fn test_missing_scenario_file_is_an_error() {
    let result = execute_command(config_for(Commands::Check {
        scenario: "does-not-exist.toml".into(),
        report: ReportFormat::Text,
    }));
    assert!(result.is_err());
}

#[test]
fn test_missing_section_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
processes = 1
resources = 1
allocation = [[0]]

[safety]
max_need = [[0]]
available = [0]
"#,
    );

    let result = execute_command(config_for(Commands::Detect {
        scenario: path,
        report: ReportFormat::Text,
    }));
    assert!(result.is_err());
}

#[test]
fn test_malformed_matrices_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
processes = 2
resources = 2
allocation = [[1, 0], [0, 1]]

[safety]
max_need = [[1, 1], [1, 1]]
available = [1]
"#,
    );

    let result = execute_command(config_for(Commands::Check {
        scenario: path,
        report: ReportFormat::Text,
    }));
    assert!(result.is_err());
}
