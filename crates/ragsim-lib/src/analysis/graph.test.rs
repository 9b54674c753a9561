// Tests for the allocation graph model

use super::*;

fn cycle_labels(cycle: &[Edge]) -> Vec<String> {
    cycle.iter().map(|e| e.to_string()).collect()
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = AllocationGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_with_counts_adds_all_nodes() {
    let graph = AllocationGraph::with_counts(3, 2);
    assert_eq!(graph.node_count(), 5);
    assert!(graph.contains(NodeId::process(2)));
    assert!(graph.contains(NodeId::resource(1)));
    assert!(!graph.contains(NodeId::process(3)));
}

#[test]
fn test_add_duplicate_node_is_idempotent() {
    let mut graph = AllocationGraph::new();
    let idx1 = graph.add_node(NodeId::process(0));
    let idx2 = graph.add_node(NodeId::process(0));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_set_edges_replaces_wholesale() {
    let mut graph = AllocationGraph::with_counts(2, 2);

    graph.set_edges(&[
        Edge::allocation(0, 0, Some(1)),
        Edge::request(0, 1, Some(1)),
    ]);
    assert_eq!(graph.edge_count(), 2);

    // Second call discards the previous edge set entirely
    graph.set_edges(&[Edge::allocation(1, 1, Some(2))]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges(), vec![Edge::allocation(1, 1, Some(2))]);
}

#[test]
fn test_set_edges_adds_missing_endpoints() {
    let mut graph = AllocationGraph::new();
    graph.set_edges(&[Edge::request(0, 0, None)]);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains(NodeId::process(0)));
    assert!(graph.contains(NodeId::resource(0)));
}

#[test]
fn test_edges_preserve_insertion_order() {
    let mut graph = AllocationGraph::with_counts(2, 2);
    let edges = vec![
        Edge::request(1, 0, Some(2)),
        Edge::allocation(1, 0, Some(1)),
        Edge::request(0, 1, Some(3)),
    ];
    graph.set_edges(&edges);
    assert_eq!(graph.edges(), edges);
}

// ============================================================================
// Cycle Detection
// ============================================================================

#[test]
fn test_acyclic_graph_has_no_cycle() {
    let mut graph = AllocationGraph::with_counts(2, 2);
    graph.set_edges(&[
        Edge::allocation(0, 0, None),
        Edge::request(0, 1, None),
        Edge::allocation(1, 1, None),
    ]);
    assert!(graph.find_cycle().is_none());
}

#[test]
fn test_empty_graph_has_no_cycle() {
    assert!(AllocationGraph::new().find_cycle().is_none());
    assert!(AllocationGraph::with_counts(3, 3).find_cycle().is_none());
}

#[test]
fn test_two_process_cycle_is_extracted_in_order() {
    let mut graph = AllocationGraph::with_counts(2, 2);
    graph.set_edges(&[
        Edge::allocation(0, 0, None),
        Edge::allocation(1, 1, None),
        Edge::request(0, 1, None),
        Edge::request(1, 0, None),
    ]);

    let cycle = graph.find_cycle().unwrap();
    assert_eq!(
        cycle_labels(&cycle),
        vec!["P0 -> R1", "R1 -> P1", "P1 -> R0", "R0 -> P0"]
    );
}

#[test]
fn test_cycle_search_ignores_edge_insertion_order() {
    let edges = vec![
        Edge::allocation(0, 0, None),
        Edge::allocation(1, 1, None),
        Edge::request(0, 1, None),
        Edge::request(1, 0, None),
    ];

    let mut forward = AllocationGraph::with_counts(2, 2);
    forward.set_edges(&edges);

    let mut reversed = AllocationGraph::with_counts(2, 2);
    let backwards: Vec<Edge> = edges.iter().rev().copied().collect();
    reversed.set_edges(&backwards);

    assert_eq!(forward.find_cycle(), reversed.find_cycle());
}

#[test]
fn test_cycle_not_reachable_from_first_root() {
    // P0 sits outside the cycle; the walk must move on to later roots
    let mut graph = AllocationGraph::with_counts(3, 2);
    graph.set_edges(&[
        Edge::allocation(0, 0, None),
        Edge::request(1, 1, None),
        Edge::allocation(1, 2, None),
        Edge::request(2, 1, None),
    ]);

    // P1 leads into the cycle but is not on it
    let cycle = graph.find_cycle().unwrap();
    assert_eq!(cycle_labels(&cycle), vec!["R1 -> P2", "P2 -> R1"]);
}

#[test]
fn test_self_loop_is_a_cycle() {
    let mut graph = AllocationGraph::new();
    graph.add_node(NodeId::process(0));
    graph.set_edges(&[Edge {
        from: NodeId::process(0),
        to: NodeId::process(0),
        kind: EdgeKind::Request,
        weight: None,
    }]);

    let cycle = graph.find_cycle().unwrap();
    assert_eq!(cycle.len(), 1);
    assert_eq!(cycle[0].from, NodeId::process(0));
    assert_eq!(cycle[0].to, NodeId::process(0));
}

#[test]
fn test_diamond_shares_node_without_cycle() {
    // Two paths converge on R1; revisiting an explored node is not a cycle
    let mut graph = AllocationGraph::with_counts(2, 2);
    graph.set_edges(&[
        Edge::request(0, 0, None),
        Edge::request(0, 1, None),
        Edge::allocation(0, 1, None),
        Edge::request(1, 1, None),
    ]);
    assert!(graph.find_cycle().is_none());
}
