//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the branchly
//! crate. Import it to get the model, the layout engine and the playback session
//! without importing each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use branchly::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = FlowDocument::from_file("path/to/flows.json")?;
//! let flow = document.find(None)?;
//!
//! let layout = LayoutEngine::default().layout(flow);
//! let mut session = Session::new(Arc::new(layout.apply(flow)));
//! if let Some(option) = session.available_options().first().cloned() {
//!     session.choose(&option.id);
//! }
//! println!("{}", session.transcript());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::flow::{
    Flow, FlowBuilder, FlowDocument, FlowNode, FlowOption, IntoFlow, NodeBuilder, NodeContent,
    NodeType, Position,
};

// Layout and playback
pub use crate::layout::{Layout, LayoutConfig, LayoutEngine};
pub use crate::navigation::{Choice, History, Session, Transcript};

// Error types
pub use crate::error::{DocumentError, EditError, FlowConversionError};

// Standard library re-exports commonly used with this crate
pub use std::sync::Arc;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
