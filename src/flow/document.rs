use super::model::Flow;
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The on-disk JSON shape of flows: one flow object, or an array of them.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum FlowDocument {
    Collection(Vec<Flow>),
    Single(Flow),
}

impl FlowDocument {
    /// Load flows from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// All flows in document order.
    pub fn flows(&self) -> &[Flow] {
        match self {
            FlowDocument::Single(flow) => std::slice::from_ref(flow),
            FlowDocument::Collection(flows) => flows,
        }
    }

    pub fn into_flows(self) -> Vec<Flow> {
        match self {
            FlowDocument::Single(flow) => vec![flow],
            FlowDocument::Collection(flows) => flows,
        }
    }

    /// Picks a flow by id, or the first flow when `id` is `None`.
    pub fn find(&self, id: Option<&str>) -> Result<&Flow, DocumentError> {
        match id {
            Some(id) => self
                .flows()
                .iter()
                .find(|f| f.id == id)
                .ok_or_else(|| DocumentError::FlowNotFound(id.to_string())),
            None => self
                .flows()
                .first()
                .ok_or_else(|| DocumentError::FlowNotFound("<first>".to_string())),
        }
    }
}

/// Serializes flows as a pretty-printed JSON array.
pub fn to_json_pretty(flows: &[Flow]) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(flows)?)
}
