//! Common test utilities for building flows.
use branchly::prelude::*;

/// `A -> B -> C`
#[allow(dead_code)]
pub fn create_linear_flow() -> Flow {
    FlowBuilder::new("linear", "Linear")
        .decision("A", "First", |n| n.option("Next", "B"))
        .decision("B", "Second", |n| n.option("Next", "C"))
        .information("C", "Done", |n| n)
        .build()
}

/// `A -> {B, C}`
#[allow(dead_code)]
pub fn create_fork_flow() -> Flow {
    FlowBuilder::new("fork", "Fork")
        .decision("A", "Pick one", |n| n.option("Left", "B").option("Right", "C"))
        .information("B", "Left outcome", |n| n)
        .information("C", "Right outcome", |n| n)
        .build()
}

/// `A -> B`, plus `D -> A` which nothing reaches.
#[allow(dead_code)]
pub fn create_orphan_flow() -> Flow {
    FlowBuilder::new("orphan", "Orphan")
        .decision("A", "Start", |n| n.option("Go", "B"))
        .information("B", "End", |n| n)
        .decision("D", "Detached", |n| n.option("Jump in", "A"))
        .build()
}

/// `A <-> B`, with `B -> C` as the way out.
///
/// Option ids: `A-opt-1` (to B), `B-opt-1` (to A), `B-opt-2` (to C).
#[allow(dead_code)]
pub fn create_cyclic_flow() -> Flow {
    FlowBuilder::new("cyclic", "Cyclic")
        .decision("A", "Start", |n| n.option("Forward", "B"))
        .decision("B", "Middle", |n| n.option("Back to start", "A").option("Finish", "C"))
        .information("C", "End", |n| n)
        .build()
}

/// A node mixing every kind of option.
///
/// Option ids: `A-opt-1` (to B), `A-opt-2` (external with URL), `A-opt-3` (terminal),
/// `A-opt-4` (external without URL).
#[allow(dead_code)]
pub fn create_mixed_options_flow() -> Flow {
    FlowBuilder::new("mixed", "Mixed")
        .decision("A", "Options", |n| {
            n.option("Internal", "B")
                .external("Website", "https://example.com")
                .terminal("Nowhere")
                .with_option(FlowOption {
                    id: "A-opt-4".to_string(),
                    label: "Broken link".to_string(),
                    target_node_id: None,
                    is_external_link: true,
                    external_url: None,
                })
        })
        .information("B", "Reached", |n| n)
        .build()
}

#[allow(dead_code)]
pub fn shared(flow: Flow) -> Arc<Flow> {
    Arc::new(flow)
}
