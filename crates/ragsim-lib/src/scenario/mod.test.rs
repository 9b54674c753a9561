// Tests for scenario file loading

use super::*;
use std::fs;
use tempfile::TempDir;

const FULL_SCENARIO: &str = r#"
processes = 2
resources = 2
allocation = [[1, 0], [0, 1]]

[safety]
max_need = [[1, 1], [1, 1]]
available = [0, 0]

[deadlock]
request = [[0, 1], [1, 0]]
"#;

#[test]
fn test_parse_full_scenario() {
    let scenario = Scenario::parse(FULL_SCENARIO).unwrap();

    assert_eq!(scenario.processes, 2);
    assert_eq!(scenario.resources, 2);
    assert_eq!(scenario.allocation, vec![vec![1, 0], vec![0, 1]]);

    let safety = scenario.safety().unwrap();
    assert_eq!(safety.max_need, vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(safety.available, vec![0, 0]);

    let deadlock = scenario.deadlock().unwrap();
    assert_eq!(deadlock.request, vec![vec![0, 1], vec![1, 0]]);
}

#[test]
fn test_sections_are_optional_until_requested() {
    let scenario = Scenario::parse(
        r#"
processes = 1
resources = 1
allocation = [[0]]

[safety]
max_need = [[0]]
available = [0]
"#,
    )
    .unwrap();

    assert!(scenario.safety().is_ok());
    assert!(matches!(
        scenario.deadlock().unwrap_err(),
        ScenarioError::MissingSection {
            section: "deadlock"
        }
    ));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let err = Scenario::parse("processes = ").unwrap_err();
    assert!(matches!(err, ScenarioError::ParseError { .. }));
}

#[test]
fn test_missing_required_key_is_a_parse_error() {
    let err = Scenario::parse("processes = 1\nresources = 1").unwrap_err();
    assert!(matches!(err, ScenarioError::ParseError { .. }));
}

#[test]
fn test_from_path_reads_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.toml");
    fs::write(&path, FULL_SCENARIO).unwrap();

    let scenario = Scenario::from_path(&path).unwrap();
    assert_eq!(scenario.processes, 2);
}

#[test]
fn test_from_path_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = Scenario::from_path(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::ReadError { .. }));
}
