//! Tests for the structural edits applied by the flow editor.
mod common;
use common::*;
use branchly::prelude::*;

#[test]
fn test_blank_flow_has_start_node() {
    let flow = Flow::blank("gifts", "Gift Policy", "When to register gifts");
    assert_eq!(flow.nodes.len(), 1);
    let start = flow.start_node().unwrap();
    assert_eq!(start.content.title, "Start");
    assert_eq!(start.node_type, NodeType::Information);
    assert_eq!(start.position, Position::new(500.0, 100.0));
    assert!(start.is_outcome());
}

#[test]
fn test_add_information_node_gets_continue_option() {
    let mut flow = create_linear_flow();
    let id = flow.add_node(NodeType::Information);
    let node = flow.node(&id).unwrap();

    assert_eq!(node.content.title, "New Info Node");
    assert_eq!(node.position, Position::new(100.0, 100.0));
    assert_eq!(node.options.len(), 1);
    assert_eq!(node.options[0].label, "Continue");
    assert_eq!(node.options[0].target_node_id, None);
    assert!(node.is_outcome());
}

#[test]
fn test_add_decision_node_has_no_options() {
    let mut flow = create_linear_flow();
    let id = flow.add_node(NodeType::Decision);
    let node = flow.node(&id).unwrap();
    assert_eq!(node.content.title, "New Decision Node");
    assert!(node.options.is_empty());
}

#[test]
fn test_added_node_ids_are_unique() {
    let mut flow = Flow::blank("f", "F", "");
    let first = flow.add_node(NodeType::Decision);
    flow.insert_node(
        FlowBuilder::new("x", "X")
            .information("node-3", "Taken", |n| n)
            .build()
            .nodes
            .remove(0),
    )
    .unwrap();
    let second = flow.add_node(NodeType::Decision);
    assert_ne!(first, second);
    assert_ne!(second, "node-3");
}

#[test]
fn test_insert_duplicate_node_fails() {
    let mut flow = create_linear_flow();
    let duplicate = flow.node("A").unwrap().clone();
    assert_eq!(
        flow.insert_node(duplicate),
        Err(EditError::DuplicateNodeId("A".to_string()))
    );
}

#[test]
fn test_delete_node_clears_incoming_targets() {
    let mut flow = create_cyclic_flow();
    let removed = flow.delete_node("C").unwrap();
    assert_eq!(removed.id, "C");

    let b = flow.node("B").unwrap();
    assert_eq!(b.options[1].target_node_id, None);
    assert_eq!(b.options[0].target_node_id.as_deref(), Some("A"));
    assert!(flow.dangling_targets().is_empty());
}

#[test]
fn test_delete_start_node_moves_start() {
    let mut flow = create_linear_flow();
    flow.delete_node("A").unwrap();
    assert_eq!(flow.start_node_id, "B");

    flow.delete_node("B").unwrap();
    flow.delete_node("C").unwrap();
    assert_eq!(flow.start_node_id, "");
    assert!(flow.nodes.is_empty());
}

#[test]
fn test_delete_missing_node() {
    let mut flow = create_linear_flow();
    assert_eq!(
        flow.delete_node("Z").unwrap_err(),
        EditError::NodeNotFound("Z".to_string())
    );
}

#[test]
fn test_set_start_node() {
    let mut flow = create_linear_flow();
    flow.set_start_node("B").unwrap();
    assert_eq!(flow.start_node_id, "B");
    assert!(flow.set_start_node("Z").is_err());
    assert_eq!(flow.start_node_id, "B");
}

#[test]
fn test_move_and_update_content() {
    let mut flow = create_linear_flow();
    flow.move_node("B", Position::new(12.0, 34.0)).unwrap();
    flow.update_content(
        "B",
        NodeContent {
            title: "Renamed".to_string(),
            body_text: "Body".to_string(),
            image_url: Some("https://example.com/img.png".to_string()),
        },
    )
    .unwrap();

    let b = flow.node("B").unwrap();
    assert_eq!(b.position, Position::new(12.0, 34.0));
    assert_eq!(b.content.title, "Renamed");
    assert!(flow.move_node("Z", Position::default()).is_err());
}

#[test]
fn test_option_lifecycle() {
    let mut flow = create_fork_flow();
    let option_id = flow.add_option("B").unwrap();
    assert!(flow.node("B").unwrap().is_outcome());

    flow.relabel_option("B", &option_id, "Try again").unwrap();
    flow.retarget_option("B", &option_id, Some("A")).unwrap();
    let option = flow.node("B").unwrap().option(&option_id).unwrap();
    assert_eq!(option.label, "Try again");
    assert_eq!(option.internal_target(), Some("A"));
    assert!(!flow.node("B").unwrap().is_outcome());

    flow.set_external_link("B", &option_id, Some("https://example.com"))
        .unwrap();
    assert!(flow.node("B").unwrap().is_outcome());
    flow.set_external_link("B", &option_id, None).unwrap();
    assert!(!flow.node("B").unwrap().is_outcome());

    let removed = flow.remove_option("B", &option_id).unwrap();
    assert_eq!(removed.id, option_id);
    assert!(flow.node("B").unwrap().options.is_empty());
}

#[test]
fn test_add_option_avoids_existing_ids() {
    let mut flow = create_cyclic_flow();
    flow.remove_option("B", "B-opt-1").unwrap();
    let added = flow.add_option("B").unwrap();
    assert_ne!(added, "B-opt-2");
    assert_eq!(flow.node("B").unwrap().options.len(), 2);
}

#[test]
fn test_retarget_rejects_self_and_unknown_nodes() {
    let mut flow = create_fork_flow();
    match flow.retarget_option("A", "A-opt-1", Some("A")) {
        Err(EditError::UnknownTarget { target_node_id, .. }) => assert_eq!(target_node_id, "A"),
        other => panic!("Expected UnknownTarget, got {:?}", other),
    }
    assert!(matches!(
        flow.retarget_option("A", "A-opt-1", Some("Z")),
        Err(EditError::UnknownTarget { .. })
    ));
    assert_eq!(
        flow.retarget_option("A", "missing", None),
        Err(EditError::OptionNotFound {
            node_id: "A".to_string(),
            option_id: "missing".to_string()
        })
    );

    flow.retarget_option("A", "A-opt-1", None).unwrap();
    assert_eq!(flow.node("A").unwrap().options[0].target_node_id, None);
}

#[test]
fn test_retarget_on_missing_node_reports_the_node() {
    let mut flow = create_fork_flow();
    assert_eq!(
        flow.retarget_option("Z", "Z-opt-1", Some("Z")),
        Err(EditError::NodeNotFound("Z".to_string()))
    );
    assert_eq!(
        flow.retarget_option("A", "missing", Some("A")),
        Err(EditError::OptionNotFound {
            node_id: "A".to_string(),
            option_id: "missing".to_string()
        })
    );
}

#[test]
fn test_edit_error_messages() {
    let err = EditError::OptionNotFound {
        node_id: "A".to_string(),
        option_id: "o1".to_string(),
    };
    assert!(err.to_string().contains("o1"));
    assert!(err.to_string().contains("'A'"));
}

#[test]
fn test_edits_then_layout_places_new_node_as_orphan() {
    let mut flow = create_linear_flow();
    let id = flow.add_node(NodeType::Decision);
    let layout = LayoutEngine::default().layout(&flow);
    assert_eq!(layout.level(&id), Some(branchly::layout::ORPHAN_LEVEL));

    let option_id = flow.add_option("C").unwrap();
    flow.retarget_option("C", &option_id, Some(id.as_str())).unwrap();
    let layout = LayoutEngine::default().layout(&flow);
    assert_eq!(layout.level(&id), Some(3));
}
