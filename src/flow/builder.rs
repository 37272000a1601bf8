use super::model::{Flow, FlowNode, FlowOption, NodeContent, NodeType, Position};

/// Fluent construction of a `Flow`, mostly for tests, demos and `IntoFlow` adapters.
///
/// Option ids are generated as `<node id>-opt-<n>` unless a full `FlowOption` is
/// pushed. When no start node is named, the first node added becomes the start.
pub struct FlowBuilder {
    id: String,
    title: String,
    description: String,
    start_node_id: Option<String>,
    nodes: Vec<FlowNode>,
}

impl FlowBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            start_node_id: None,
            nodes: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Names the start node. The id does not have to exist.
    pub fn start(mut self, node_id: &str) -> Self {
        self.start_node_id = Some(node_id.to_string());
        self
    }

    pub fn decision(
        self,
        id: &str,
        title: &str,
        configure: impl FnOnce(NodeBuilder) -> NodeBuilder,
    ) -> Self {
        self.with_node(NodeType::Decision, id, title, configure)
    }

    pub fn information(
        self,
        id: &str,
        title: &str,
        configure: impl FnOnce(NodeBuilder) -> NodeBuilder,
    ) -> Self {
        self.with_node(NodeType::Information, id, title, configure)
    }

    pub fn node(mut self, node: FlowNode) -> Self {
        self.nodes.push(node);
        self
    }

    fn with_node(
        self,
        node_type: NodeType,
        id: &str,
        title: &str,
        configure: impl FnOnce(NodeBuilder) -> NodeBuilder,
    ) -> Self {
        let node = configure(NodeBuilder::new(node_type, id, title)).build();
        self.node(node)
    }

    pub fn build(self) -> Flow {
        let start_node_id = self
            .start_node_id
            .or_else(|| self.nodes.first().map(|n| n.id.clone()))
            .unwrap_or_default();
        Flow {
            id: self.id,
            title: self.title,
            description: self.description,
            start_node_id,
            nodes: self.nodes,
        }
    }
}

/// Builds a single `FlowNode` inside a `FlowBuilder`.
pub struct NodeBuilder {
    node: FlowNode,
}

impl NodeBuilder {
    pub fn new(node_type: NodeType, id: &str, title: &str) -> Self {
        Self {
            node: FlowNode {
                id: id.to_string(),
                node_type,
                position: Position::default(),
                content: NodeContent {
                    title: title.to_string(),
                    body_text: String::new(),
                    image_url: None,
                },
                options: Vec::new(),
            },
        }
    }

    pub fn body(mut self, body_text: &str) -> Self {
        self.node.content.body_text = body_text.to_string();
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.node.content.image_url = Some(url.to_string());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.node.position = Position::new(x, y);
        self
    }

    /// Adds an option leading to `target`.
    pub fn option(mut self, label: &str, target: &str) -> Self {
        let id = self.next_option_id();
        self.node
            .options
            .push(FlowOption::internal(id, label, Some(target)));
        self
    }

    /// Adds an internal option with no destination.
    pub fn terminal(mut self, label: &str) -> Self {
        let id = self.next_option_id();
        self.node.options.push(FlowOption::internal(id, label, None));
        self
    }

    pub fn external(mut self, label: &str, url: &str) -> Self {
        let id = self.next_option_id();
        self.node.options.push(FlowOption::external(id, label, url));
        self
    }

    pub fn with_option(mut self, option: FlowOption) -> Self {
        self.node.options.push(option);
        self
    }

    fn next_option_id(&self) -> String {
        format!("{}-opt-{}", self.node.id, self.node.options.len() + 1)
    }

    pub fn build(self) -> FlowNode {
        self.node
    }
}
