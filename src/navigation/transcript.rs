use super::history::History;
use crate::flow::Flow;
use itertools::Itertools;
use std::fmt;

/// Human-readable account of the path walked in a session.
///
/// ```text
/// 1. Are you handling a salmon right now?
/// 2. Where did the salmon come from?  (via "Yes - I have or am handling a salmon")
/// ```
pub struct Transcript<'a> {
    flow: &'a Flow,
    history: &'a History,
}

impl<'a> Transcript<'a> {
    pub fn new(flow: &'a Flow, history: &'a History) -> Self {
        Self { flow, history }
    }

    /// One formatted line per history step.
    pub fn lines(&self) -> Vec<String> {
        self.history
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let title = self
                    .flow
                    .node(&step.node_id)
                    .map(|node| node.content.title.clone())
                    .unwrap_or_else(|| format!("<missing: {}>", step.node_id));
                match &step.via {
                    Some(label) => format!("{}. {}  (via \"{}\")", i + 1, title, label),
                    None => format!("{}. {}", i + 1, title),
                }
            })
            .collect()
    }
}

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().iter().join("\n"))
    }
}
