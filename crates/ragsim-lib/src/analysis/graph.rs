//! Allocation graph model shared by both engines
//!
//! Holds the current process/resource nodes and allocation/request edges and
//! answers the graph queries the engines' reporting needs: the edge list and
//! deterministic cycle extraction. Rendering concerns (color, layout,
//! animation) never enter this module; callers derive them from the returned
//! edge data.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use tracing::trace;

use crate::primitives::{Edge, EdgeKind, NodeId};

/// Payload stored on each petgraph edge
#[derive(Debug, Clone, Copy)]
struct EdgeAttr {
    kind: EdgeKind,
    weight: Option<i64>,
}

/// Directed graph over process and resource nodes
///
/// Cycle search is deterministic: roots and successors are both visited in
/// ascending [`NodeId`] order (processes before resources), independent of
/// node or edge insertion order.
pub struct AllocationGraph {
    graph: DiGraph<NodeId, EdgeAttr>,
    /// Map from node identity to petgraph index for fast lookup
    node_map: HashMap<NodeId, NodeIndex>,
}

impl AllocationGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Create a graph pre-populated with `P0..Pn-1` and `R0..Rm-1`
    pub fn with_counts(processes: usize, resources: usize) -> Self {
        let mut graph = Self::new();
        for i in 0..processes {
            graph.add_node(NodeId::process(i));
        }
        for j in 0..resources {
            graph.add_node(NodeId::resource(j));
        }
        graph
    }

    /// Add a node to the graph (idempotent - won't duplicate if already exists)
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&id) {
            trace!("node already exists: {id}");
            return idx;
        }

        let idx = self.graph.add_node(id);
        self.node_map.insert(id, idx);
        idx
    }

    /// Replace the full edge set atomically
    ///
    /// Old edges are discarded, not merged: every recomputation rebuilds the
    /// edge set from scratch. Endpoints are added idempotently, so the call
    /// cannot fail on an unknown node.
    pub fn set_edges(&mut self, edges: &[Edge]) {
        self.graph.clear_edges();
        for edge in edges {
            let from = self.add_node(edge.from);
            let to = self.add_node(edge.to);
            self.graph.add_edge(
                from,
                to,
                EdgeAttr {
                    kind: edge.kind,
                    weight: edge.weight,
                },
            );
        }
        trace!("edge set replaced, {} edges", self.graph.edge_count());
    }

    /// Current edge set in insertion order
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|er| Edge {
                from: self.graph[er.source()],
                to: self.graph[er.target()],
                kind: er.weight().kind,
                weight: er.weight().weight,
            })
            .collect()
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a node exists in the graph
    pub fn contains(&self, id: NodeId) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Return the first cycle found by depth-first traversal, if any
    ///
    /// The walk tracks nodes currently on the recursion stack separately from
    /// fully explored ones; a back edge onto the stack closes a cycle. The
    /// returned edges are the on-stack path from the back-edge target to the
    /// current node plus the back edge itself, exactly as discovered.
    pub fn find_cycle(&self) -> Option<Vec<Edge>> {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        let mut roots: Vec<NodeIndex> = self.graph.node_indices().collect();
        roots.sort_by_key(|&idx| self.graph[idx]);

        for root in roots {
            if !visited.contains(&root) {
                if let Some(cycle) = self.dfs_cycle(root, &mut visited, &mut stack) {
                    return Some(cycle);
                }
            }
        }

        None
    }

    /// DFS-based cycle extraction
    fn dfs_cycle(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        stack: &mut Vec<NodeIndex>,
    ) -> Option<Vec<Edge>> {
        visited.insert(node);
        stack.push(node);

        let mut successors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        successors.sort_by_key(|&idx| self.graph[idx]);

        for next in successors {
            if !visited.contains(&next) {
                if let Some(cycle) = self.dfs_cycle(next, visited, stack) {
                    return Some(cycle);
                }
            } else if let Some(pos) = stack.iter().position(|&n| n == next) {
                // Back edge onto the stack - the slice from `pos` is the cycle
                let mut cycle: Vec<Edge> = stack[pos..]
                    .windows(2)
                    .map(|pair| self.edge_between(pair[0], pair[1]))
                    .collect();
                cycle.push(self.edge_between(node, next));
                trace!("cycle of {} edges found", cycle.len());
                return Some(cycle);
            }
        }

        stack.pop();
        None
    }

    fn edge_between(&self, from: NodeIndex, to: NodeIndex) -> Edge {
        // Consecutive stack nodes are parent/child in the DFS tree, so the
        // edge always exists.
        let idx = self
            .graph
            .find_edge(from, to)
            .expect("adjacent DFS stack nodes are connected");
        let attr = self.graph[idx];
        Edge {
            from: self.graph[from],
            to: self.graph[to],
            kind: attr.kind,
            weight: attr.weight,
        }
    }
}

impl Default for AllocationGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
