//! Fail-fast input validation shared by both engines
//!
//! Every check runs before the first algorithmic step of a call; the first
//! violation aborts with an [`InputError`] naming the offending field and no
//! partial result is produced.

use crate::primitives::{InputError, Matrix, ResourceVector};

pub(crate) fn ensure_counts(processes: usize, resources: usize) -> Result<(), InputError> {
    if processes == 0 {
        return Err(InputError::NonPositiveCount {
            field: "processes",
            value: 0,
        });
    }
    if resources == 0 {
        return Err(InputError::NonPositiveCount {
            field: "resources",
            value: 0,
        });
    }
    Ok(())
}

/// Shape plus non-negativity for a `processes x resources` count matrix
pub(crate) fn ensure_matrix(
    field: &'static str,
    matrix: &Matrix,
    processes: usize,
    resources: usize,
) -> Result<(), InputError> {
    if matrix.len() != processes {
        return Err(InputError::ShapeMismatch {
            field,
            unit: "rows",
            expected: processes,
            found: matrix.len(),
        });
    }
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != resources {
            return Err(InputError::ShapeMismatch {
                field,
                unit: "columns",
                expected: resources,
                found: entries.len(),
            });
        }
        for (col, &value) in entries.iter().enumerate() {
            if value < 0 {
                return Err(InputError::NegativeValue {
                    field,
                    row,
                    col,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Shape plus non-negativity for a resource-indexed vector
///
/// The vector is validated as a single row, so error coordinates report row 0.
pub(crate) fn ensure_vector(
    field: &'static str,
    vector: &ResourceVector,
    resources: usize,
) -> Result<(), InputError> {
    if vector.len() != resources {
        return Err(InputError::ShapeMismatch {
            field,
            unit: "entries",
            expected: resources,
            found: vector.len(),
        });
    }
    for (col, &value) in vector.iter().enumerate() {
        if value < 0 {
            return Err(InputError::NegativeValue {
                field,
                row: 0,
                col,
                value,
            });
        }
    }
    Ok(())
}

/// Shape plus a {0, 1} domain for a snapshot matrix
///
/// Any entry outside {0, 1} - including negatives - is a `NonBinaryValue`.
pub(crate) fn ensure_binary_matrix(
    field: &'static str,
    matrix: &Matrix,
    processes: usize,
    resources: usize,
) -> Result<(), InputError> {
    if matrix.len() != processes {
        return Err(InputError::ShapeMismatch {
            field,
            unit: "rows",
            expected: processes,
            found: matrix.len(),
        });
    }
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != resources {
            return Err(InputError::ShapeMismatch {
                field,
                unit: "columns",
                expected: resources,
                found: entries.len(),
            });
        }
        for (col, &value) in entries.iter().enumerate() {
            if value != 0 && value != 1 {
                return Err(InputError::NonBinaryValue {
                    field,
                    row,
                    col,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Reject any cell where the claimed maximum is below the current allocation
pub(crate) fn ensure_need_covers(
    allocation: &Matrix,
    max_need: &Matrix,
) -> Result<(), InputError> {
    for (row, (alloc_row, max_row)) in allocation.iter().zip(max_need).enumerate() {
        for (col, (&alloc, &max)) in alloc_row.iter().zip(max_row).enumerate() {
            if max < alloc {
                return Err(InputError::NeedUnderflow {
                    row,
                    col,
                    max_need: max,
                    allocation: alloc,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("validate.test.rs");
}
