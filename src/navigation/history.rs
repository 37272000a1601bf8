/// One entry of the history stack: the node shown and the option label that led there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub node_id: String,
    /// `None` for the seed entry.
    pub via: Option<String>,
}

/// A non-empty stack of visited node ids.
///
/// The seed entry can never be popped, so there is always a current entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub fn new(seed: &str) -> Self {
        Self {
            steps: vec![Step {
                node_id: seed.to_string(),
                via: None,
            }],
        }
    }

    pub fn current(&self) -> &str {
        // `steps` is never empty: `pop` keeps the seed and `reset` re-creates it.
        &self.steps[self.steps.len() - 1].node_id
    }

    pub fn push(&mut self, node_id: &str, via: &str) {
        self.steps.push(Step {
            node_id: node_id.to_string(),
            via: Some(via.to_string()),
        });
    }

    /// Pops the current entry unless it is the seed. Returns whether anything was popped.
    pub fn pop(&mut self) -> bool {
        if self.steps.len() > 1 {
            self.steps.pop();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, seed: &str) {
        *self = Self::new(seed);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true, since the seed entry cannot be popped. Exists to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.node_id.as_str()).collect()
    }
}
