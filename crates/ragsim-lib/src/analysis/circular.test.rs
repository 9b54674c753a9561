// Tests for the circular-wait engine

use super::*;
use crate::primitives::EdgeKind;

fn labels(edges: &[Edge]) -> Vec<String> {
    edges.iter().map(|e| e.to_string()).collect()
}

// ============================================================================
// Deadlock Decisions
// ============================================================================

#[test]
fn test_two_process_circular_wait_is_detected() {
    // P0 holds R0 and waits on R1; P1 holds R1 and waits on R0
    let allocation = vec![vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 1], vec![1, 0]];
    let result = run_deadlock_check(2, 2, &allocation, &request).unwrap();

    assert!(result.has_cycle);
    assert_eq!(
        labels(&result.cycle),
        vec!["P0 -> R1", "R1 -> P1", "P1 -> R0", "R0 -> P0"]
    );
}

#[test]
fn test_no_requests_means_no_deadlock() {
    let allocation = vec![vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 0], vec![0, 0]];
    let result = run_deadlock_check(2, 2, &allocation, &request).unwrap();

    assert!(!result.has_cycle);
    assert!(result.cycle.is_empty());
    assert_eq!(
        result.edges,
        vec![Edge::allocation(0, 0, None), Edge::allocation(1, 1, None)]
    );
}

#[test]
fn test_waiting_without_circularity_is_not_deadlock() {
    // P0 waits on R1 which P1 holds, but P1 waits on nothing
    let allocation = vec![vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 1], vec![0, 0]];
    let result = run_deadlock_check(2, 2, &allocation, &request).unwrap();

    assert!(!result.has_cycle);
}

#[test]
fn test_three_party_cycle() {
    // P0 -> R1 -> P1 -> R2 -> P2 -> R0 -> P0
    let allocation = vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]];
    let request = vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]];
    let result = run_deadlock_check(3, 3, &allocation, &request).unwrap();

    assert!(result.has_cycle);
    assert_eq!(
        labels(&result.cycle),
        vec![
            "P0 -> R1",
            "R1 -> P1",
            "P1 -> R2",
            "R2 -> P2",
            "P2 -> R0",
            "R0 -> P0",
        ]
    );
}

#[test]
fn test_cycle_outside_the_first_processes() {
    // P0 is idle; the deadlock is between P1 and P2
    let allocation = vec![vec![0, 0], vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 0], vec![0, 1], vec![1, 0]];
    let result = run_deadlock_check(3, 2, &allocation, &request).unwrap();

    assert!(result.has_cycle);
    assert_eq!(
        labels(&result.cycle),
        vec!["P1 -> R1", "R1 -> P2", "P2 -> R0", "R0 -> P1"]
    );
}

// ============================================================================
// Result Structure
// ============================================================================

#[test]
fn test_edges_carry_both_kinds_unweighted() {
    let allocation = vec![vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 1], vec![1, 0]];
    let result = run_deadlock_check(2, 2, &allocation, &request).unwrap();

    assert_eq!(result.edges.len(), 4);
    assert!(result.edges.iter().all(|e| e.weight.is_none()));
    assert_eq!(
        result
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Allocation)
            .count(),
        2
    );
}

#[test]
fn test_results_are_deterministic_and_inputs_untouched() {
    let allocation = vec![vec![1, 0], vec![0, 1]];
    let request = vec![vec![0, 1], vec![1, 0]];
    let alloc_copy = allocation.clone();
    let request_copy = request.clone();

    let first = run_deadlock_check(2, 2, &allocation, &request).unwrap();
    let second = run_deadlock_check(2, 2, &allocation, &request).unwrap();

    assert_eq!(first, second);
    assert_eq!(allocation, alloc_copy);
    assert_eq!(request, request_copy);
}

// ============================================================================
// Input Rejection
// ============================================================================

#[test]
fn test_counts_must_be_positive() {
    let err = run_deadlock_check(1, 0, &vec![vec![]], &vec![vec![]]).unwrap_err();
    assert_eq!(
        err,
        InputError::NonPositiveCount {
            field: "resources",
            value: 0,
        }
    );
}

#[test]
fn test_non_binary_entries_are_rejected() {
    let allocation = vec![vec![1, 0], vec![0, 2]];
    let request = vec![vec![0, 0], vec![0, 0]];
    let err = run_deadlock_check(2, 2, &allocation, &request).unwrap_err();
    assert_eq!(
        err,
        InputError::NonBinaryValue {
            field: "allocation",
            row: 1,
            col: 1,
            value: 2,
        }
    );
}

#[test]
fn test_request_shape_mismatch_is_rejected() {
    let allocation = vec![vec![0, 0], vec![0, 0]];
    let request = vec![vec![0, 0]];
    let err = run_deadlock_check(2, 2, &allocation, &request).unwrap_err();
    assert_eq!(
        err,
        InputError::ShapeMismatch {
            field: "request",
            unit: "rows",
            expected: 2,
            found: 1,
        }
    );
}
