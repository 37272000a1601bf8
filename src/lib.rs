//! # Branchly - Guidance Flow Engine
//!
//! **Branchly** models branching guidance flows: question and information nodes
//! connected by labeled options, with external links as exits. It provides the
//! algorithmic core behind a flow editor and a flow player:
//!
//! - a canonical, serializable **flow graph model** (`flow`),
//! - an automatic **hierarchical layout** that places every node on the row of its
//!   breadth-first depth from the start node (`layout`),
//! - a **playback session** with a history stack for back and restart (`navigation`),
//! - the **structural edits** an editor applies to a flow (`editor`).
//!
//! All of it is fail-soft: dangling references and unreachable nodes are tolerated by
//! layout and playback instead of being reported as errors.
//!
//! ## Core Workflow
//!
//! 1.  **Load or build a flow**: parse a JSON `FlowDocument`, use the `FlowBuilder`, or
//!     implement `IntoFlow` for your own format.
//! 2.  **Lay it out**: `LayoutEngine::layout` returns a position for every node;
//!     `Layout::apply` merges them into a copy of the flow.
//! 3.  **Play it**: create one `Session` per viewer and drive it with `choose`, `back`
//!     and `restart`.
//!
//! ## Quick Start
//!
//! ```rust
//! use branchly::prelude::*;
//!
//! let flow = FlowBuilder::new("returns", "Returns policy")
//!     .decision("ask", "Is the item damaged?", |n| {
//!         n.option("Yes", "refund").option("No", "keep")
//!     })
//!     .information("refund", "You are entitled to a refund", |n| n)
//!     .information("keep", "Standard returns apply", |n| {
//!         n.external("Read the policy", "https://example.com/returns")
//!     })
//!     .build();
//!
//! // Layout: the start row holds one node, the next row holds two.
//! let layout = LayoutEngine::default().layout(&flow);
//! assert_eq!(layout.level("refund"), Some(1));
//! assert_eq!(layout.position("ask").unwrap().x, 600.0);
//!
//! // Playback
//! let mut session = Session::new(Arc::new(flow));
//! assert_eq!(session.choose("ask-opt-2"), Choice::Advanced { node_id: "keep".to_string() });
//! assert!(session.is_at_outcome());
//! assert!(matches!(session.choose("keep-opt-1"), Choice::External { .. }));
//! session.back();
//! assert_eq!(session.current_id(), "ask");
//! ```

pub mod editor;
pub mod error;
pub mod flow;
pub mod layout;
pub mod navigation;
pub mod prelude;
