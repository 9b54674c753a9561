// Tests for foundation types

use super::*;

// ============================================================================
// Node Identity
// ============================================================================

#[test]
fn test_node_display() {
    assert_eq!(NodeId::process(0).to_string(), "P0");
    assert_eq!(NodeId::process(12).to_string(), "P12");
    assert_eq!(NodeId::resource(3).to_string(), "R3");
}

#[test]
fn test_node_ordering_processes_before_resources() {
    let mut nodes = vec![
        NodeId::resource(0),
        NodeId::process(2),
        NodeId::resource(1),
        NodeId::process(0),
    ];
    nodes.sort();
    assert_eq!(
        nodes,
        vec![
            NodeId::process(0),
            NodeId::process(2),
            NodeId::resource(0),
            NodeId::resource(1),
        ]
    );
}

#[test]
fn test_node_serializes_as_label() {
    let json = serde_json::to_string(&NodeId::process(4)).unwrap();
    assert_eq!(json, "\"P4\"");
}

// ============================================================================
// Edges
// ============================================================================

#[test]
fn test_edge_constructors() {
    let alloc = Edge::allocation(1, 0, Some(2));
    assert_eq!(alloc.from, NodeId::resource(1));
    assert_eq!(alloc.to, NodeId::process(0));
    assert_eq!(alloc.kind, EdgeKind::Allocation);
    assert_eq!(alloc.weight, Some(2));

    let req = Edge::request(0, 1, None);
    assert_eq!(req.from, NodeId::process(0));
    assert_eq!(req.to, NodeId::resource(1));
    assert_eq!(req.kind, EdgeKind::Request);
    assert_eq!(req.weight, None);
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::allocation(0, 2, None).to_string(), "R0 -> P2");
    assert_eq!(Edge::request(2, 0, Some(1)).to_string(), "P2 -> R0");
}

// ============================================================================
// Input Errors
// ============================================================================

#[test]
fn test_input_error_messages_name_the_field() {
    let err = InputError::ShapeMismatch {
        field: "available",
        unit: "entries",
        expected: 3,
        found: 2,
    };
    assert_eq!(err.to_string(), "available: expected 3 entries, found 2");

    let err = InputError::NegativeValue {
        field: "allocation",
        row: 1,
        col: 2,
        value: -4,
    };
    assert_eq!(err.to_string(), "allocation[1][2]: negative value -4");

    let err = InputError::NeedUnderflow {
        row: 0,
        col: 1,
        max_need: 1,
        allocation: 3,
    };
    assert!(err.to_string().contains("need[0][1]"));
}

// ============================================================================
// Configuration Enums
// ============================================================================

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
}

#[test]
fn test_log_format_from_str_with_aliases() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
}
