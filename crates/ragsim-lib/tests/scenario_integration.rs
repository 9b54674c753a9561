//! Scenario files driven end-to-end through both engines

use ragsim_lib::scenario::Scenario;
use ragsim_lib::{InputError, run_deadlock_check, run_safety_check};
use std::fs;
use tempfile::TempDir;

const CLASSIC: &str = r#"
processes = 5
resources = 3
allocation = [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]]

[safety]
max_need = [[7, 5, 3], [3, 2, 2], [9, 0, 2], [2, 2, 2], [4, 3, 3]]
available = [3, 3, 2]
"#;

const CIRCULAR: &str = r#"
processes = 2
resources = 2
allocation = [[1, 0], [0, 1]]

[deadlock]
request = [[0, 1], [1, 0]]
"#;

fn run_safety(scenario: &Scenario) -> Result<ragsim_lib::SafetyResult, InputError> {
    let safety = scenario.safety().unwrap();
    run_safety_check(
        scenario.processes,
        scenario.resources,
        &scenario.allocation,
        &safety.max_need,
        &safety.available,
    )
}

#[test]
fn classic_scenario_file_is_safe() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classic.toml");
    fs::write(&path, CLASSIC).unwrap();

    let scenario = Scenario::from_path(&path).unwrap();
    let result = run_safety(&scenario).unwrap();

    assert!(result.safe);
    let labels: Vec<String> = result.sequence.iter().map(|p| p.to_string()).collect();
    assert_eq!(labels, vec!["P1", "P3", "P0", "P2", "P4"]);
}

#[test]
fn starved_classic_scenario_is_unsafe() {
    let starved = CLASSIC.replace("available = [3, 3, 2]", "available = [0, 0, 0]");
    let scenario = Scenario::parse(&starved).unwrap();
    let result = run_safety(&scenario).unwrap();
    assert!(!result.safe);
}

#[test]
fn circular_scenario_file_deadlocks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("circular.toml");
    fs::write(&path, CIRCULAR).unwrap();

    let scenario = Scenario::from_path(&path).unwrap();
    let deadlock = scenario.deadlock().unwrap();
    let result = run_deadlock_check(
        scenario.processes,
        scenario.resources,
        &scenario.allocation,
        &deadlock.request,
    )
    .unwrap();

    assert!(result.has_cycle);
    assert_eq!(result.cycle.len(), 4);
}

#[test]
fn scenario_shape_errors_surface_as_input_errors() {
    let short = CLASSIC.replace("available = [3, 3, 2]", "available = [3, 3]");
    let scenario = Scenario::parse(&short).unwrap();
    let err = run_safety(&scenario).unwrap_err();
    assert_eq!(
        err,
        InputError::ShapeMismatch {
            field: "available",
            unit: "entries",
            expected: 3,
            found: 2,
        }
    );
}
