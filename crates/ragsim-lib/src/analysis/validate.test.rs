// Tests for shared input validation

use super::*;

#[test]
fn test_counts_must_be_positive() {
    assert_eq!(
        ensure_counts(0, 3),
        Err(InputError::NonPositiveCount {
            field: "processes",
            value: 0,
        })
    );
    assert_eq!(
        ensure_counts(3, 0),
        Err(InputError::NonPositiveCount {
            field: "resources",
            value: 0,
        })
    );
    assert_eq!(ensure_counts(1, 1), Ok(()));
}

#[test]
fn test_matrix_row_count_mismatch() {
    let matrix = vec![vec![0, 0]];
    assert_eq!(
        ensure_matrix("allocation", &matrix, 2, 2),
        Err(InputError::ShapeMismatch {
            field: "allocation",
            unit: "rows",
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn test_matrix_column_count_mismatch() {
    let matrix = vec![vec![0, 0], vec![0]];
    assert_eq!(
        ensure_matrix("max_need", &matrix, 2, 2),
        Err(InputError::ShapeMismatch {
            field: "max_need",
            unit: "columns",
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn test_matrix_rejects_negative_entry() {
    let matrix = vec![vec![0, 1], vec![2, -3]];
    assert_eq!(
        ensure_matrix("allocation", &matrix, 2, 2),
        Err(InputError::NegativeValue {
            field: "allocation",
            row: 1,
            col: 1,
            value: -3,
        })
    );
}

#[test]
fn test_vector_length_and_sign() {
    assert_eq!(
        ensure_vector("available", &vec![1, 2], 3),
        Err(InputError::ShapeMismatch {
            field: "available",
            unit: "entries",
            expected: 3,
            found: 2,
        })
    );
    assert_eq!(
        ensure_vector("available", &vec![1, -2, 0], 3),
        Err(InputError::NegativeValue {
            field: "available",
            row: 0,
            col: 1,
            value: -2,
        })
    );
    assert_eq!(ensure_vector("available", &vec![0, 0, 0], 3), Ok(()));
}

#[test]
fn test_binary_matrix_rejects_out_of_domain_values() {
    let matrix = vec![vec![0, 2]];
    assert_eq!(
        ensure_binary_matrix("request", &matrix, 1, 2),
        Err(InputError::NonBinaryValue {
            field: "request",
            row: 0,
            col: 1,
            value: 2,
        })
    );

    // Negatives are out of the {0, 1} domain too
    let matrix = vec![vec![-1, 0]];
    assert_eq!(
        ensure_binary_matrix("allocation", &matrix, 1, 2),
        Err(InputError::NonBinaryValue {
            field: "allocation",
            row: 0,
            col: 0,
            value: -1,
        })
    );
}

#[test]
fn test_need_underflow_detected() {
    let allocation = vec![vec![0, 3]];
    let max_need = vec![vec![0, 2]];
    assert_eq!(
        ensure_need_covers(&allocation, &max_need),
        Err(InputError::NeedUnderflow {
            row: 0,
            col: 1,
            max_need: 2,
            allocation: 3,
        })
    );
    assert_eq!(ensure_need_covers(&max_need, &max_need), Ok(()));
}
