//! Playback of a flow: one `Session` per viewer, driven by option choices.

use crate::flow::{Flow, FlowNode, FlowOption};
use std::sync::Arc;
use tracing::{debug, warn};

mod history;
mod transcript;

pub use history::{History, Step};
pub use transcript::Transcript;

/// What a call to `Session::choose` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The chosen option's target was pushed onto the history.
    ///
    /// An external option without a URL that still stores a target also advances.
    /// Layout and `FlowNode::is_outcome` do not count such an option as an edge, so
    /// its node can report as an outcome and its target can sit on the orphan row.
    Advanced { node_id: String },
    /// The option leaves the flow. The caller is expected to open `url`;
    /// the history is unchanged.
    External { url: String },
    /// Terminal option, external link without a URL, or an option id the
    /// displayed node does not have. Nothing changed.
    Ignored,
}

/// A playback session over one flow.
///
/// The session owns its history exclusively. The flow is shared as an `Arc` snapshot
/// and may be swapped for a newer one with `replace_flow`; ids in the history that no
/// longer resolve fall back to the flow's first node.
#[derive(Debug, Clone)]
pub struct Session {
    flow: Arc<Flow>,
    history: History,
}

impl Session {
    pub fn new(flow: Arc<Flow>) -> Self {
        let history = History::new(&flow.start_node_id);
        debug!(flow = %flow.id, start = %flow.start_node_id, "Started playback session");
        let session = Self { flow, history };
        session.warn_if_unresolved();
        session
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    /// Hands the session a newer snapshot of the same flow, keeping the history.
    pub fn replace_flow(&mut self, flow: Arc<Flow>) {
        self.flow = flow;
        self.warn_if_unresolved();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The id on top of the history stack. It may not resolve to a node.
    pub fn current_id(&self) -> &str {
        self.history.current()
    }

    /// The node to display.
    ///
    /// Falls back to the flow's first node when the current id does not resolve.
    /// Returns `None` only when the flow has no nodes at all.
    pub fn current_node(&self) -> Option<&FlowNode> {
        self.flow
            .node(self.history.current())
            .or_else(|| self.flow.nodes.first())
    }

    /// Logs the first-node fallback. Called on history and flow transitions only.
    fn warn_if_unresolved(&self) {
        let id = self.history.current();
        if self.flow.contains(id) {
            return;
        }
        if let Some(node) = self.flow.nodes.first() {
            warn!(flow = %self.flow.id, missing = %id, fallback = %node.id, "Current node not found, displaying first node");
        }
    }

    /// Options offered on the displayed node, in display order.
    pub fn available_options(&self) -> &[FlowOption] {
        self.current_node()
            .map(|node| node.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// True when the displayed node offers no way further into the flow.
    pub fn is_at_outcome(&self) -> bool {
        self.current_node().is_none_or(FlowNode::is_outcome)
    }

    /// Acts on the option `option_id` of the displayed node.
    pub fn choose(&mut self, option_id: &str) -> Choice {
        let Some(option) = self
            .current_node()
            .and_then(|node| node.option(option_id))
        else {
            debug!(option = %option_id, "Ignoring unknown option");
            return Choice::Ignored;
        };

        if let Some(url) = option.external_destination() {
            debug!(option = %option_id, %url, "External destination requested");
            return Choice::External {
                url: url.to_string(),
            };
        }

        // An external option missing its URL still follows a stored target.
        match option.target_node_id.as_deref().filter(|id| !id.is_empty()) {
            Some(target) => {
                let target = target.to_string();
                let label = option.label.clone();
                self.history.push(&target, &label);
                debug!(option = %option_id, to = %target, depth = self.history.len(), "Advanced");
                self.warn_if_unresolved();
                Choice::Advanced { node_id: target }
            }
            None => Choice::Ignored,
        }
    }

    /// Returns to the previous node. Does nothing at the start of the session.
    pub fn back(&mut self) -> bool {
        let moved = self.history.pop();
        if moved {
            debug!(to = %self.history.current(), "Went back");
            self.warn_if_unresolved();
        }
        moved
    }

    /// Discards the whole path and returns to the start node.
    pub fn restart(&mut self) {
        self.history.reset(&self.flow.start_node_id);
        debug!(flow = %self.flow.id, "Restarted session");
        self.warn_if_unresolved();
    }

    pub fn transcript(&self) -> Transcript<'_> {
        Transcript::new(&self.flow, &self.history)
    }
}
