//! Circular-wait engine for multi-instance snapshots
//!
//! Consumes a 0/1 allocation matrix and a 0/1 request matrix, builds the
//! allocation graph, and decides deadlock by cycle detection. The cycle is
//! reported exactly as the deterministic traversal of
//! [`AllocationGraph::find_cycle`] discovers it.

use serde::Serialize;
use tracing::debug;

use super::graph::AllocationGraph;
use super::validate;
use crate::primitives::{Edge, InputError, Matrix};

/// Outcome of one circular-wait check
///
/// `cycle` is empty when the graph is acyclic; `edges` always carries the
/// full snapshot graph for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlockResult {
    pub has_cycle: bool,
    pub cycle: Vec<Edge>,
    pub edges: Vec<Edge>,
}

/// Decide whether the snapshot contains a circular wait.
pub fn run_deadlock_check(
    processes: usize,
    resources: usize,
    allocation: &Matrix,
    request: &Matrix,
) -> Result<DeadlockResult, InputError> {
    validate::ensure_counts(processes, resources)?;
    validate::ensure_binary_matrix("allocation", allocation, processes, resources)?;
    validate::ensure_binary_matrix("request", request, processes, resources)?;

    debug!(processes, resources, "deadlock check input validated");

    let mut edges = Vec::new();
    for i in 0..processes {
        for j in 0..resources {
            if allocation[i][j] == 1 {
                edges.push(Edge::allocation(j, i, None));
            }
            if request[i][j] == 1 {
                edges.push(Edge::request(i, j, None));
            }
        }
    }

    let mut graph = AllocationGraph::with_counts(processes, resources);
    graph.set_edges(&edges);

    let cycle = graph.find_cycle().unwrap_or_default();
    let has_cycle = !cycle.is_empty();
    debug!(has_cycle, cycle_len = cycle.len(), "cycle search finished");

    Ok(DeadlockResult {
        has_cycle,
        cycle,
        edges: graph.edges(),
    })
}

#[cfg(test)]
mod tests {
    include!("circular.test.rs");
}
