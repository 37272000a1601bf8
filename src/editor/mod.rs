//! Structural edits the flow editor performs.
//!
//! These are the only operations that mutate a `Flow`. None of them validate the
//! resulting graph shape: orphans, cycles and terminal options are all allowed.

use crate::error::EditError;
use crate::flow::{Flow, FlowNode, FlowOption, NodeContent, NodeType, Position};
use crate::layout::LayoutEngine;
use tracing::debug;

const NEW_NODE_POSITION: Position = Position { x: 100.0, y: 100.0 };
const BLANK_START_POSITION: Position = Position { x: 500.0, y: 100.0 };

impl Flow {
    /// A new flow holding a single information node as its start.
    pub fn blank(id: &str, title: &str, description: &str) -> Self {
        let start_id = format!("{}-start", id);
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            start_node_id: start_id.clone(),
            nodes: vec![FlowNode {
                id: start_id,
                node_type: NodeType::Information,
                position: BLANK_START_POSITION,
                content: NodeContent {
                    title: "Start".to_string(),
                    body_text: "Add your first question or guidance step.".to_string(),
                    image_url: None,
                },
                options: Vec::new(),
            }],
        }
    }

    /// Appends a placeholder node of `node_type` and returns its id.
    ///
    /// Information nodes start with a single targetless "Continue" option.
    pub fn add_node(&mut self, node_type: NodeType) -> String {
        let id = self.fresh_node_id();
        let (title, options) = match node_type {
            NodeType::Decision => ("New Decision Node", Vec::new()),
            NodeType::Information => (
                "New Info Node",
                vec![FlowOption::internal(format!("{}-opt-1", id), "Continue", None)],
            ),
        };
        self.nodes.push(FlowNode {
            id: id.clone(),
            node_type,
            position: NEW_NODE_POSITION,
            content: NodeContent {
                title: title.to_string(),
                body_text: "Enter your logic or information here.".to_string(),
                image_url: None,
            },
            options,
        });
        debug!(flow = %self.id, node = %id, "Added node");
        id
    }

    pub fn insert_node(&mut self, node: FlowNode) -> Result<(), EditError> {
        if self.contains(&node.id) {
            return Err(EditError::DuplicateNodeId(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node and every reference to it.
    ///
    /// Options that targeted it become terminal. If it was the start node, the start
    /// moves to the first remaining node, or to an empty id when none remain.
    pub fn delete_node(&mut self, node_id: &str) -> Result<FlowNode, EditError> {
        let idx = self
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| EditError::NodeNotFound(node_id.to_string()))?;
        let removed = self.nodes.remove(idx);

        for opt in self.nodes.iter_mut().flat_map(|n| n.options.iter_mut()) {
            if opt.target_node_id.as_deref() == Some(node_id) {
                opt.target_node_id = None;
            }
        }

        if self.start_node_id == node_id {
            self.start_node_id = self
                .nodes
                .first()
                .map(|n| n.id.clone())
                .unwrap_or_default();
        }
        debug!(flow = %self.id, node = %node_id, start = %self.start_node_id, "Deleted node");
        Ok(removed)
    }

    pub fn set_start_node(&mut self, node_id: &str) -> Result<(), EditError> {
        if !self.contains(node_id) {
            return Err(EditError::NodeNotFound(node_id.to_string()));
        }
        self.start_node_id = node_id.to_string();
        Ok(())
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), EditError> {
        self.require_node_mut(node_id)?.position = position;
        Ok(())
    }

    pub fn update_content(&mut self, node_id: &str, content: NodeContent) -> Result<(), EditError> {
        self.require_node_mut(node_id)?.content = content;
        Ok(())
    }

    /// Appends a targetless "New Option" to a node and returns the option id.
    pub fn add_option(&mut self, node_id: &str) -> Result<String, EditError> {
        let node = self.require_node_mut(node_id)?;
        let mut n = node.options.len() + 1;
        let option_id = loop {
            let candidate = format!("{}-opt-{}", node.id, n);
            if node.option(&candidate).is_none() {
                break candidate;
            }
            n += 1;
        };
        node.options
            .push(FlowOption::internal(option_id.clone(), "New Option", None));
        Ok(option_id)
    }

    pub fn relabel_option(
        &mut self,
        node_id: &str,
        option_id: &str,
        label: &str,
    ) -> Result<(), EditError> {
        self.require_option_mut(node_id, option_id)?.label = label.to_string();
        Ok(())
    }

    /// Points an option at another node, or clears its target with `None`.
    ///
    /// The target must exist and may not be the option's own node.
    pub fn retarget_option(
        &mut self,
        node_id: &str,
        option_id: &str,
        target: Option<&str>,
    ) -> Result<(), EditError> {
        self.require_option_mut(node_id, option_id)?;
        if let Some(target) = target {
            let message = if target == node_id {
                Some("an option cannot target its own node")
            } else if !self.contains(target) {
                Some("no such node")
            } else {
                None
            };
            if let Some(message) = message {
                return Err(EditError::UnknownTarget {
                    option_id: option_id.to_string(),
                    target_node_id: target.to_string(),
                    message: message.to_string(),
                });
            }
        }
        self.require_option_mut(node_id, option_id)?.target_node_id = target.map(str::to_string);
        Ok(())
    }

    /// `Some(url)` turns the option into an external link; `None` makes it internal again.
    pub fn set_external_link(
        &mut self,
        node_id: &str,
        option_id: &str,
        url: Option<&str>,
    ) -> Result<(), EditError> {
        let option = self.require_option_mut(node_id, option_id)?;
        option.is_external_link = url.is_some();
        option.external_url = url.map(str::to_string);
        Ok(())
    }

    pub fn remove_option(&mut self, node_id: &str, option_id: &str) -> Result<FlowOption, EditError> {
        let node = self.require_node_mut(node_id)?;
        let idx = node
            .options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| EditError::OptionNotFound {
                node_id: node_id.to_string(),
                option_id: option_id.to_string(),
            })?;
        Ok(node.options.remove(idx))
    }

    /// Re-derives every node position with `engine`.
    pub fn auto_layout(&mut self, engine: &LayoutEngine) {
        let layout = engine.layout(self);
        layout.apply_to(self);
    }

    fn fresh_node_id(&self) -> String {
        let mut n = self.nodes.len() + 1;
        loop {
            let candidate = format!("node-{}", n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn require_node_mut(&mut self, node_id: &str) -> Result<&mut FlowNode, EditError> {
        self.node_mut(node_id)
            .ok_or_else(|| EditError::NodeNotFound(node_id.to_string()))
    }

    fn require_option_mut(
        &mut self,
        node_id: &str,
        option_id: &str,
    ) -> Result<&mut FlowOption, EditError> {
        self.require_node_mut(node_id)?
            .options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or_else(|| EditError::OptionNotFound {
                node_id: node_id.to_string(),
                option_id: option_id.to_string(),
            })
    }
}
