use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The two kinds of step a flow can contain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Branches on the user's choice.
    Decision,
    /// Presents content, usually with a single "continue" option or none.
    Information,
}

/// A point on the editing canvas.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display payload of a node. Opaque to layout and navigation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeContent {
    pub title: String,
    pub body_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A labeled choice leaving a node: either an edge to another node or an external link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub target_node_id: Option<String>,
    #[serde(default)]
    pub is_external_link: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl FlowOption {
    /// An internal option pointing at `target`, or a terminal one when `target` is `None`.
    pub fn internal(id: impl Into<String>, label: impl Into<String>, target: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target_node_id: target.map(str::to_string),
            is_external_link: false,
            external_url: None,
        }
    }

    /// An option that leaves the flow for `url`.
    pub fn external(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target_node_id: None,
            is_external_link: true,
            external_url: Some(url.into()),
        }
    }

    /// The target node id when this option is a graph edge.
    ///
    /// External links and options without a target are not edges, even if a stale
    /// `target_node_id` is still stored on an external option. An empty id counts as
    /// no target.
    pub fn internal_target(&self) -> Option<&str> {
        if self.is_external_link {
            None
        } else {
            self.target_node_id.as_deref().filter(|id| !id.is_empty())
        }
    }

    /// The destination of an external link, if this option is one and carries a URL.
    pub fn external_destination(&self) -> Option<&str> {
        if self.is_external_link {
            self.external_url.as_deref().filter(|url| !url.is_empty())
        } else {
            None
        }
    }
}

/// One step of a flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub position: Position,
    pub content: NodeContent,
    #[serde(default)]
    pub options: Vec<FlowOption>,
}

impl FlowNode {
    /// True when no option leads anywhere inside the flow.
    ///
    /// A node with no options, or whose options are all external links or have no
    /// target, is terminal. A single internal edge is enough to make it non-terminal.
    ///
    /// An external option without a URL is not an edge here even when it stores a
    /// target, although playback still follows that target when chosen.
    pub fn is_outcome(&self) -> bool {
        self.options.iter().all(|opt| opt.internal_target().is_none())
    }

    pub fn option(&self, option_id: &str) -> Option<&FlowOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

/// A complete decision flow: metadata plus an ordered arena of nodes.
///
/// Nodes refer to each other only by id, so cycles and dangling references are
/// representable without any ownership between nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_node_id: String,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
}

impl Flow {
    pub fn node(&self, node_id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub(crate) fn node_mut(&mut self, node_id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn start_node(&self) -> Option<&FlowNode> {
        self.node(&self.start_node_id)
    }

    pub fn is_start(&self, node: &FlowNode) -> bool {
        node.id == self.start_node_id
    }

    /// Builds a lookup from node id to its index in `nodes`.
    ///
    /// If ids are duplicated the first occurrence wins, matching `node()`.
    pub fn index(&self) -> AHashMap<&str, usize> {
        let mut index = AHashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            index.entry(node.id.as_str()).or_insert(i);
        }
        index
    }

    /// Every internal edge as `(source, option, target_id)`, in node then option order.
    ///
    /// The target id is reported even when it does not resolve to a node.
    pub fn edges(&self) -> impl Iterator<Item = (&FlowNode, &FlowOption, &str)> {
        self.nodes.iter().flat_map(|node| {
            node.options
                .iter()
                .filter_map(move |opt| opt.internal_target().map(|target| (node, opt, target)))
        })
    }

    pub fn outcome_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|n| n.is_outcome())
    }

    /// Ids of options whose internal target names a node that is not in the flow.
    pub fn dangling_targets(&self) -> Vec<(&str, &str)> {
        let index = self.index();
        self.edges()
            .filter(|(_, _, target)| !index.contains_key(target))
            .map(|(_, opt, target)| (opt.id.as_str(), target))
            .collect()
    }
}
