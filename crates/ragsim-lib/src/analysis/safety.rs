//! Banker's algorithm safety engine
//!
//! Decides whether a snapshot of allocations, maximum claims, and available
//! resources admits an ordering of process completions that never deadlocks,
//! and produces one such ordering when it does. The search is a deterministic
//! greedy simulation: it always grants the lowest-indexed eligible process,
//! restarting the scan from index 0 after every grant, so identical inputs
//! always yield identical sequences.

use serde::Serialize;
use tracing::{debug, trace};

use super::graph::AllocationGraph;
use super::validate;
use crate::primitives::{Edge, InputError, Matrix, NodeId, ResourceVector};

/// Outcome of one safety check
///
/// `edges` is the allocation/request edge list of the final graph, returned
/// for presentation whether or not the state is safe. On unsafe states
/// `sequence` holds the processes that did complete before the search
/// stalled - a diagnostic prefix, not a safe ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyResult {
    pub safe: bool,
    pub sequence: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

/// One grant during the safety search: the process that completed and the
/// work vector after its allocation was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyStep {
    pub process: NodeId,
    pub work: ResourceVector,
}

/// Run the safety check without step reporting.
pub fn run_safety_check(
    processes: usize,
    resources: usize,
    allocation: &Matrix,
    max_need: &Matrix,
    available: &ResourceVector,
) -> Result<SafetyResult, InputError> {
    run_safety_check_observed(processes, resources, allocation, max_need, available, |_| {})
}

/// Run the safety check, emitting a [`SafetyStep`] to `on_step` after each
/// grant, in sequence order.
///
/// The observer is a caller-supplied sink for step-by-step playback: no
/// timing or rendering semantics attach to it, and the result is identical
/// whether or not anyone listens.
pub fn run_safety_check_observed<F>(
    processes: usize,
    resources: usize,
    allocation: &Matrix,
    max_need: &Matrix,
    available: &ResourceVector,
    mut on_step: F,
) -> Result<SafetyResult, InputError>
where
    F: FnMut(&SafetyStep),
{
    validate::ensure_counts(processes, resources)?;
    validate::ensure_matrix("allocation", allocation, processes, resources)?;
    validate::ensure_matrix("max_need", max_need, processes, resources)?;
    validate::ensure_vector("available", available, resources)?;
    validate::ensure_need_covers(allocation, max_need)?;

    let need: Matrix = (0..processes)
        .map(|i| {
            (0..resources)
                .map(|j| max_need[i][j] - allocation[i][j])
                .collect()
        })
        .collect();

    debug!(processes, resources, "safety check input validated");

    let mut work = available.clone();
    let mut finish = vec![false; processes];
    let mut sequence = Vec::with_capacity(processes);

    loop {
        let mut granted = false;
        for i in 0..processes {
            if finish[i] {
                continue;
            }
            if need[i].iter().zip(&work).any(|(n, w)| n > w) {
                trace!("P{i} not eligible, need exceeds work");
                continue;
            }

            // Grant: release the allocation row back into work, then restart
            // the scan from index 0 so lower-indexed processes are always
            // preferred once they become eligible.
            for j in 0..resources {
                work[j] += allocation[i][j];
            }
            finish[i] = true;
            let process = NodeId::process(i);
            sequence.push(process);
            debug!(%process, work = ?work, "process completes");
            on_step(&SafetyStep {
                process,
                work: work.clone(),
            });
            granted = true;
            break;
        }
        if !granted {
            break;
        }
    }

    let safe = sequence.len() == processes;
    if !safe {
        debug!(
            finished = sequence.len(),
            processes, "no eligible process left, state is unsafe"
        );
    }

    let mut graph = AllocationGraph::with_counts(processes, resources);
    graph.set_edges(&snapshot_edges(processes, resources, allocation, &need));

    Ok(SafetyResult {
        safe,
        sequence,
        edges: graph.edges(),
    })
}

/// Edge list of the snapshot graph: an allocation edge `Rj -> Pi` for every
/// held instance count and a request edge `Pi -> Rj` for every outstanding
/// need, row-major, allocation before request per cell.
fn snapshot_edges(
    processes: usize,
    resources: usize,
    allocation: &Matrix,
    need: &Matrix,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..processes {
        for j in 0..resources {
            if allocation[i][j] > 0 {
                edges.push(Edge::allocation(j, i, Some(allocation[i][j])));
            }
            if need[i][j] > 0 {
                edges.push(Edge::request(i, j, Some(need[i][j])));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    include!("safety.test.rs");
}
