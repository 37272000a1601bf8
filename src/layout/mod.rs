//! Hierarchical auto-layout for the flow editor.
//!
//! Every node reachable from the start is placed on the row of its breadth-first
//! depth; each row is centered about a fixed canvas coordinate. Unreachable nodes
//! share one row far below everything else.

use crate::flow::{Flow, Position};
use ahash::AHashMap;
use tracing::debug;

mod leveling;

pub use leveling::Levels;

/// Row index given to nodes that cannot be reached from the start node.
pub const ORPHAN_LEVEL: usize = 99;

/// Spacing and anchoring constants of the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    /// X coordinate every row is centered about.
    pub center_x: f64,
    /// Y coordinate of the start row.
    pub base_offset: f64,
    pub orphan_level: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 300.0,
            vertical_spacing: 250.0,
            center_x: 600.0,
            base_offset: 100.0,
            orphan_level: ORPHAN_LEVEL,
        }
    }
}

/// Computed positions for one flow snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: AHashMap<String, Position>,
    levels: Levels,
}

impl Layout {
    pub fn position(&self, node_id: &str) -> Option<Position> {
        self.positions.get(node_id).copied()
    }

    pub fn level(&self, node_id: &str) -> Option<usize> {
        self.levels.level(node_id)
    }

    pub fn positions(&self) -> &AHashMap<String, Position> {
        &self.positions
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a copy of `flow` with every laid-out node moved to its computed position.
    pub fn apply(&self, flow: &Flow) -> Flow {
        let mut updated = flow.clone();
        self.apply_to(&mut updated);
        updated
    }

    /// Writes positions into `flow` in place. Nodes this layout does not know keep theirs.
    pub fn apply_to(&self, flow: &mut Flow) {
        for node in &mut flow.nodes {
            if let Some(position) = self.positions.get(&node.id) {
                node.position = *position;
            }
        }
    }
}

impl Flow {
    /// Ids of nodes that cannot be reached from the start node, in flow order.
    pub fn orphan_ids(&self) -> Vec<String> {
        Levels::compute(self, ORPHAN_LEVEL).orphans().to_vec()
    }
}

/// The layout engine. Holds configuration only; `layout` is pure.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

pub struct LayoutEngineBuilder {
    config: LayoutConfig,
}

impl LayoutEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
    pub fn horizontal_spacing(mut self, spacing: f64) -> Self {
        self.config.horizontal_spacing = spacing;
        self
    }
    pub fn vertical_spacing(mut self, spacing: f64) -> Self {
        self.config.vertical_spacing = spacing;
        self
    }
    pub fn center_x(mut self, center_x: f64) -> Self {
        self.config.center_x = center_x;
        self
    }
    pub fn base_offset(mut self, offset: f64) -> Self {
        self.config.base_offset = offset;
        self
    }
    pub fn orphan_level(mut self, level: usize) -> Self {
        self.config.orphan_level = level;
        self
    }
    pub fn build(self) -> LayoutEngine {
        LayoutEngine {
            config: self.config,
        }
    }
}

impl Default for LayoutEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> LayoutEngineBuilder {
        LayoutEngineBuilder::new()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes a position for every node of `flow`.
    ///
    /// Never fails: a missing start node or dangling targets only send more nodes to
    /// the orphan row. An empty flow yields an empty layout.
    pub fn layout(&self, flow: &Flow) -> Layout {
        let levels = Levels::compute(flow, self.config.orphan_level);
        let mut positions = AHashMap::with_capacity(flow.nodes.len());

        for (level, members) in levels.rows() {
            let y = self.config.base_offset + level as f64 * self.config.vertical_spacing;
            let row_width = (members.len() as f64 - 1.0) * self.config.horizontal_spacing;
            let start_x = self.config.center_x - row_width / 2.0;
            for (i, node_id) in members.iter().enumerate() {
                let x = start_x + i as f64 * self.config.horizontal_spacing;
                positions.insert(node_id.clone(), Position::new(x, y));
            }
        }

        debug!(
            flow = %flow.id,
            nodes = positions.len(),
            rows = levels.rows.len(),
            orphans = levels.orphans().len(),
            "Computed hierarchical layout"
        );

        Layout { positions, levels }
    }
}
