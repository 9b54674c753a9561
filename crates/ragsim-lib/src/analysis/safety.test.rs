// Tests for the Banker's algorithm safety engine

use super::*;
use crate::primitives::EdgeKind;

// ============================================================================
// Test Fixtures
// ============================================================================

/// The classic five-process, three-resource snapshot
fn classic() -> (Matrix, Matrix, ResourceVector) {
    let allocation = vec![
        vec![0, 1, 0],
        vec![2, 0, 0],
        vec![3, 0, 2],
        vec![2, 1, 1],
        vec![0, 0, 2],
    ];
    let max_need = vec![
        vec![7, 5, 3],
        vec![3, 2, 2],
        vec![9, 0, 2],
        vec![2, 2, 2],
        vec![4, 3, 3],
    ];
    let available = vec![3, 3, 2];
    (allocation, max_need, available)
}

fn labels(sequence: &[NodeId]) -> Vec<String> {
    sequence.iter().map(|p| p.to_string()).collect()
}

// ============================================================================
// Safe / Unsafe Decisions
// ============================================================================

#[test]
fn test_classic_snapshot_is_safe() {
    let (allocation, max_need, available) = classic();
    let result = run_safety_check(5, 3, &allocation, &max_need, &available).unwrap();

    assert!(result.safe);
    // Lowest-indexed eligible process first, rescanning from P0 after every
    // grant: P1, then P3, at which point P0's need [7,4,3] fits work [7,4,3].
    assert_eq!(labels(&result.sequence), vec!["P1", "P3", "P0", "P2", "P4"]);
}

#[test]
fn test_classic_snapshot_with_nothing_available_is_unsafe() {
    let (allocation, max_need, _) = classic();
    let result = run_safety_check(5, 3, &allocation, &max_need, &vec![0, 0, 0]).unwrap();

    assert!(!result.safe);
    assert!(result.sequence.is_empty());
    // The edge list is still reported for diagnostic display
    assert!(!result.edges.is_empty());
}

#[test]
fn test_single_idle_process_is_safe() {
    let result = run_safety_check(1, 1, &vec![vec![0]], &vec![vec![0]], &vec![0]).unwrap();
    assert!(result.safe);
    assert_eq!(labels(&result.sequence), vec!["P0"]);
    assert!(result.edges.is_empty());
}

#[test]
fn test_partial_sequence_reported_on_unsafe_state() {
    // P0 can finish; afterwards nobody else can
    let allocation = vec![vec![0, 0], vec![1, 0], vec![0, 1]];
    let max_need = vec![vec![0, 0], vec![3, 0], vec![0, 3]];
    let result = run_safety_check(3, 2, &allocation, &max_need, &vec![0, 0]).unwrap();

    assert!(!result.safe);
    assert_eq!(labels(&result.sequence), vec!["P0"]);
}

// ============================================================================
// Determinism and Input Preservation
// ============================================================================

#[test]
fn test_identical_inputs_yield_identical_results() {
    let (allocation, max_need, available) = classic();
    let first = run_safety_check(5, 3, &allocation, &max_need, &available).unwrap();
    let second = run_safety_check(5, 3, &allocation, &max_need, &available).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_inputs_are_not_mutated() {
    let (allocation, max_need, available) = classic();
    let (alloc_copy, max_copy, avail_copy) = classic();

    run_safety_check(5, 3, &allocation, &max_need, &available).unwrap();

    assert_eq!(allocation, alloc_copy);
    assert_eq!(max_need, max_copy);
    assert_eq!(available, avail_copy);
}

// ============================================================================
// Step Observer
// ============================================================================

#[test]
fn test_steps_track_the_work_vector() {
    let (allocation, max_need, available) = classic();
    let mut steps = Vec::new();
    let result =
        run_safety_check_observed(5, 3, &allocation, &max_need, &available, |step| {
            steps.push(step.clone());
        })
        .unwrap();

    let step_processes: Vec<NodeId> = steps.iter().map(|s| s.process).collect();
    assert_eq!(step_processes, result.sequence);

    let works: Vec<ResourceVector> = steps.into_iter().map(|s| s.work).collect();
    assert_eq!(
        works,
        vec![
            vec![5, 3, 2],
            vec![7, 4, 3],
            vec![7, 5, 3],
            vec![10, 5, 5],
            vec![10, 5, 7],
        ]
    );
}

#[test]
fn test_replaying_the_sequence_never_overdraws_work() {
    let (allocation, max_need, available) = classic();
    let result = run_safety_check(5, 3, &allocation, &max_need, &available).unwrap();
    assert!(result.safe);

    let mut work = available.clone();
    for process in &result.sequence {
        let i = process.index;
        for j in 0..3 {
            assert!(max_need[i][j] - allocation[i][j] <= work[j]);
        }
        for j in 0..3 {
            work[j] += allocation[i][j];
        }
    }
}

// ============================================================================
// Snapshot Edges
// ============================================================================

#[test]
fn test_edges_reflect_allocation_and_outstanding_need() {
    let allocation = vec![vec![1, 0], vec![0, 0]];
    let max_need = vec![vec![1, 1], vec![0, 0]];
    let result = run_safety_check(2, 2, &allocation, &max_need, &vec![1, 1]).unwrap();

    assert_eq!(
        result.edges,
        vec![Edge::allocation(0, 0, Some(1)), Edge::request(0, 1, Some(1))]
    );
    assert!(result.edges.iter().all(|e| match e.kind {
        EdgeKind::Allocation => e.from.kind == crate::primitives::NodeKind::Resource,
        EdgeKind::Request => e.from.kind == crate::primitives::NodeKind::Process,
    }));
}

// ============================================================================
// Input Rejection
// ============================================================================

#[test]
fn test_zero_process_count_is_rejected() {
    let err = run_safety_check(0, 1, &vec![], &vec![], &vec![0]).unwrap_err();
    assert_eq!(
        err,
        InputError::NonPositiveCount {
            field: "processes",
            value: 0,
        }
    );
}

#[test]
fn test_wrong_available_length_is_rejected_before_simulation() {
    let (allocation, max_need, _) = classic();
    let err = run_safety_check(5, 3, &allocation, &max_need, &vec![3, 3]).unwrap_err();
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

#[test]
fn test_need_underflow_is_rejected() {
    let allocation = vec![vec![2]];
    let max_need = vec![vec![1]];
    let err = run_safety_check(1, 1, &allocation, &max_need, &vec![0]).unwrap_err();
    assert_eq!(
        err,
        InputError::NeedUnderflow {
            row: 0,
            col: 0,
            max_need: 1,
            allocation: 2,
        }
    );
}

#[test]
fn test_negative_allocation_is_rejected() {
    let allocation = vec![vec![-1]];
    let max_need = vec![vec![0]];
    let err = run_safety_check(1, 1, &allocation, &max_need, &vec![0]).unwrap_err();
    assert!(matches!(err, InputError::NegativeValue { field: "allocation", .. }));
}
