use crate::flow::Flow;
use ahash::{AHashMap, AHashSet};
use std::collections::{BTreeMap, VecDeque};

/// Breadth-first depth of every node, with nodes grouped into ordered rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Levels {
    pub(super) by_node: AHashMap<String, usize>,
    /// Row members in discovery order (orphans in flow order).
    pub(super) rows: BTreeMap<usize, Vec<String>>,
    pub(super) orphan_level: Option<usize>,
}

impl Levels {
    /// Levels every node of `flow` from its start node.
    ///
    /// Nodes are leveled at the depth of their first discovery, so cycles and
    /// re-converging paths never move a node deeper. Targets that name no node are
    /// walked past without being recorded, so they never take a slot in a row and
    /// rows hold only real nodes. Anything left unvisited is placed on the
    /// orphan row: `orphan_level`, or one row below the deepest reached level if the
    /// flow is deep enough to reach it.
    pub fn compute(flow: &Flow, orphan_level: usize) -> Self {
        let index = flow.index();
        let mut by_node: AHashMap<String, usize> = AHashMap::with_capacity(flow.nodes.len());
        let mut rows: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        queue.push_back((flow.start_node_id.as_str(), 0));

        while let Some((id, level)) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            let Some(&node_idx) = index.get(id) else {
                continue;
            };
            by_node.insert(id.to_string(), level);
            rows.entry(level).or_default().push(id.to_string());

            for target in flow.nodes[node_idx]
                .options
                .iter()
                .filter_map(|opt| opt.internal_target())
            {
                if !visited.contains(target) {
                    queue.push_back((target, level + 1));
                }
            }
        }

        let deepest = rows.keys().next_back().copied();
        let sentinel = match deepest {
            Some(deepest) if deepest >= orphan_level => deepest + 1,
            _ => orphan_level,
        };

        let mut orphan_row = Vec::new();
        for node in &flow.nodes {
            if !by_node.contains_key(&node.id) {
                by_node.insert(node.id.clone(), sentinel);
                orphan_row.push(node.id.clone());
            }
        }
        let orphan_level = if orphan_row.is_empty() {
            None
        } else {
            rows.insert(sentinel, orphan_row);
            Some(sentinel)
        };

        Self {
            by_node,
            rows,
            orphan_level,
        }
    }

    pub fn level(&self, node_id: &str) -> Option<usize> {
        self.by_node.get(node_id).copied()
    }

    /// Rows ordered by level, each in placement order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows.iter().map(|(level, ids)| (*level, ids.as_slice()))
    }

    /// The row used for unreachable nodes, if any node needed it.
    pub fn orphan_level(&self) -> Option<usize> {
        self.orphan_level
    }

    pub fn orphans(&self) -> &[String] {
        self.orphan_level
            .and_then(|level| self.rows.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
