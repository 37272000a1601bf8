//! Tests for the hierarchical layout engine.
mod common;
use branchly::flow::samples;
use branchly::layout::ORPHAN_LEVEL;
use common::*;
use branchly::prelude::*;

fn pos(layout: &Layout, id: &str) -> (f64, f64) {
    let p = layout
        .position(id)
        .unwrap_or_else(|| panic!("no position for {}", id));
    (p.x, p.y)
}

#[test]
fn test_linear_flow_stacks_rows() {
    let layout = LayoutEngine::default().layout(&create_linear_flow());

    assert_eq!(layout.level("A"), Some(0));
    assert_eq!(layout.level("B"), Some(1));
    assert_eq!(layout.level("C"), Some(2));
    assert_eq!(pos(&layout, "A"), (600.0, 100.0));
    assert_eq!(pos(&layout, "B"), (600.0, 350.0));
    assert_eq!(pos(&layout, "C"), (600.0, 600.0));
}

#[test]
fn test_fork_centers_children() {
    let layout = LayoutEngine::default().layout(&create_fork_flow());

    assert_eq!(pos(&layout, "A"), (600.0, 100.0));
    assert_eq!(pos(&layout, "B"), (450.0, 350.0));
    assert_eq!(pos(&layout, "C"), (750.0, 350.0));
}

#[test]
fn test_orphan_gets_sentinel_row() {
    let layout = LayoutEngine::default().layout(&create_orphan_flow());

    assert_eq!(layout.len(), 3);
    assert_eq!(layout.level("D"), Some(ORPHAN_LEVEL));
    assert_eq!(pos(&layout, "D"), (600.0, 100.0 + 99.0 * 250.0));
    assert_eq!(layout.levels().orphans(), &["D".to_string()]);
    assert_eq!(layout.levels().orphan_level(), Some(ORPHAN_LEVEL));
}

#[test]
fn test_no_orphan_row_when_everything_is_reachable() {
    let layout = LayoutEngine::default().layout(&create_cyclic_flow());
    assert_eq!(layout.levels().orphan_level(), None);
    assert!(layout.levels().orphans().is_empty());
}

#[test]
fn test_cycle_keeps_first_discovery_level() {
    let layout = LayoutEngine::default().layout(&create_cyclic_flow());

    assert_eq!(layout.level("A"), Some(0));
    assert_eq!(layout.level("B"), Some(1));
    assert_eq!(layout.level("C"), Some(2));
}

#[test]
fn test_shortest_path_wins_over_longer_path() {
    // A -> B -> C and A -> C: C belongs on row 1.
    let flow = FlowBuilder::new("diamond", "Diamond")
        .decision("A", "Start", |n| n.option("Long", "B").option("Short", "C"))
        .decision("B", "Detour", |n| n.option("On", "C"))
        .information("C", "End", |n| n)
        .build();
    let layout = LayoutEngine::default().layout(&flow);

    assert_eq!(layout.level("C"), Some(1));
    assert_eq!(pos(&layout, "B"), (450.0, 350.0));
    assert_eq!(pos(&layout, "C"), (750.0, 350.0));
}

#[test]
fn test_missing_start_sends_everything_to_orphan_row() {
    let mut flow = create_fork_flow();
    flow.start_node_id = "ghost".to_string();
    let layout = LayoutEngine::default().layout(&flow);

    assert_eq!(layout.len(), 3);
    assert_eq!(layout.levels().orphans(), &["A", "B", "C"].map(String::from));
    assert_eq!(pos(&layout, "A"), (300.0, 24850.0));
    assert_eq!(pos(&layout, "B"), (600.0, 24850.0));
    assert_eq!(pos(&layout, "C"), (900.0, 24850.0));
}

#[test]
fn test_dangling_target_does_not_take_a_slot() {
    let flow = FlowBuilder::new("f", "F")
        .decision("A", "Start", |n| n.option("Gone", "ghost").option("Here", "B"))
        .information("B", "End", |n| n)
        .build();
    let layout = LayoutEngine::default().layout(&flow);

    assert_eq!(layout.len(), 2);
    assert_eq!(layout.position("ghost"), None);
    assert_eq!(pos(&layout, "B"), (600.0, 350.0));
}

#[test]
fn test_external_and_terminal_options_add_no_edges() {
    let layout = LayoutEngine::default().layout(&create_mixed_options_flow());
    assert_eq!(layout.level("B"), Some(1));
    assert_eq!(layout.levels().rows().count(), 2);
}

#[test]
fn test_empty_flow_yields_empty_layout() {
    let flow = Flow {
        id: "empty".to_string(),
        title: "Empty".to_string(),
        description: String::new(),
        start_node_id: String::new(),
        nodes: vec![],
    };
    let layout = LayoutEngine::default().layout(&flow);
    assert!(layout.is_empty());
    assert_eq!(layout.levels().rows().count(), 0);
}

#[test]
fn test_orphan_row_moves_below_very_deep_flows() {
    let engine = LayoutEngine::builder().orphan_level(2).build();
    let layout = engine.layout(&FlowBuilder::new("deep", "Deep")
        .decision("A", "0", |n| n.option("Next", "B"))
        .decision("B", "1", |n| n.option("Next", "C"))
        .information("C", "2", |n| n)
        .information("D", "Orphan", |n| n)
        .build());

    assert_eq!(layout.level("C"), Some(2));
    assert_eq!(layout.level("D"), Some(3));
}

#[test]
fn test_custom_spacing() {
    let engine = LayoutEngine::builder()
        .horizontal_spacing(100.0)
        .vertical_spacing(50.0)
        .center_x(0.0)
        .base_offset(0.0)
        .build();
    let layout = engine.layout(&create_fork_flow());

    assert_eq!(pos(&layout, "A"), (0.0, 0.0));
    assert_eq!(pos(&layout, "B"), (-50.0, 50.0));
    assert_eq!(pos(&layout, "C"), (50.0, 50.0));
}

#[test]
fn test_apply_only_changes_positions() {
    let flow = create_fork_flow();
    let layout = LayoutEngine::default().layout(&flow);
    let laid_out = layout.apply(&flow);

    assert_eq!(laid_out.nodes.len(), flow.nodes.len());
    for (before, after) in flow.nodes.iter().zip(&laid_out.nodes) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.content, after.content);
        assert_eq!(before.options, after.options);
        assert_eq!(Some(after.position), layout.position(&after.id));
    }
    // The input is untouched.
    assert_eq!(flow.nodes[1].position, Position::default());
}

#[test]
fn test_layout_is_idempotent() {
    let flow = samples::salmon_act();
    let engine = LayoutEngine::default();
    let first = engine.layout(&flow);
    let second = engine.layout(&first.apply(&flow));
    assert_eq!(first, second);
}

#[test]
fn test_salmon_act_rows() {
    let layout = LayoutEngine::default().layout(&samples::salmon_act());
    let rows: Vec<(usize, Vec<&str>)> = layout
        .levels()
        .rows()
        .map(|(level, ids)| (level, ids.iter().map(String::as_str).collect()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (0, vec!["node-1"]),
            (1, vec!["node-2", "node-no-salmon"]),
            (2, vec!["node-safe", "node-catch", "node-risk"]),
            (3, vec!["node-help-links", "node-illegal", "node-doubt"]),
        ]
    );
    assert_eq!(pos(&layout, "node-no-salmon"), (750.0, 350.0));
    assert_eq!(pos(&layout, "node-risk"), (900.0, 600.0));
}

#[test]
fn test_auto_layout_in_place() {
    let mut flow = create_linear_flow();
    flow.auto_layout(&LayoutEngine::default());
    assert_eq!(flow.node("C").unwrap().position, Position::new(600.0, 600.0));
}
