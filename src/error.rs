use thiserror::Error;

/// Errors that can occur while reading a flow document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not read flow document '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flow JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Flow '{0}' not found in the document")]
    FlowNotFound(String),
}

/// Errors that can occur when applying a structural edit to a flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Node '{0}' not found in the flow")]
    NodeNotFound(String),

    #[error("Option '{option_id}' not found on node '{node_id}'")]
    OptionNotFound { node_id: String, option_id: String },

    #[error("A node with id '{0}' already exists")]
    DuplicateNodeId(String),

    #[error("Option '{option_id}' cannot target '{target_node_id}': {message}")]
    UnknownTarget {
        option_id: String,
        target_node_id: String,
        message: String,
    },
}

/// Errors that can occur when converting a custom user format into a Branchly `Flow`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
