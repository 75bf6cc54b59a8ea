//! Pre-order traversal and query operations
//!
//! Every operation is a pure read over `&Node`: deterministic pre-order
//! DFS, node before children, children left to right. Nothing here
//! mutates the tree or knows about rendering.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use tracing::instrument;

use crate::domain::error::{DomainResult, StructureError};
use crate::domain::node::{Node, NodeId};

/// Depth-first pre-order iterator yielding `(depth, node)` pairs.
///
/// The root has depth 0.
pub struct PreOrderIter<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> PreOrderIter<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

impl Node {
    /// Iterate the subtree rooted here in pre-order.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Case-insensitive substring search over name, description, and category.
///
/// Results come back in pre-order, each node at most once. An empty or
/// whitespace-only query matches nothing.
#[instrument(level = "debug", skip(root))]
pub fn search<'a>(root: &'a Node, query: &str) -> Vec<&'a Node> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    root.iter()
        .map(|(_, node)| node)
        .filter(|node| matches_query(node, &needle))
        .collect()
}

fn matches_query(node: &Node, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node.description.to_lowercase().contains(needle)
        || node.category.to_lowercase().contains(needle)
}

/// Find a node by id. `None` when the id is not in the tree.
pub fn find_by_id(root: &Node, id: NodeId) -> Option<&Node> {
    root.iter().map(|(_, node)| node).find(|node| node.id == id)
}

/// All nodes whose name matches exactly, in pre-order.
pub fn find_by_name<'a>(root: &'a Node, name: &str) -> Vec<&'a Node> {
    root.iter()
        .map(|(_, node)| node)
        .filter(|node| node.name == name)
        .collect()
}

/// Total number of nodes in the subtree, root included. Always >= 1.
pub fn count_nodes(root: &Node) -> usize {
    root.iter().count()
}

/// Walk the visible part of the tree in pre-order.
///
/// The root is always visible; a node's children are descended into only
/// while the node's id is in `expanded`. A collapsed ancestor therefore
/// hides its whole subtree, regardless of descendant flags.
#[instrument(level = "trace", skip(root, expanded))]
pub fn visible_walk<'a>(root: &'a Node, expanded: &BTreeSet<NodeId>) -> Vec<(usize, &'a Node)> {
    let mut out = Vec::new();
    let mut stack = vec![(0, root)];
    while let Some((depth, node)) = stack.pop() {
        out.push((depth, node));
        if expanded.contains(&node.id) {
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
    }
    out
}

/// Visible nodes in pre-order (see [`visible_walk`]).
pub fn visible_nodes<'a>(root: &'a Node, expanded: &BTreeSet<NodeId>) -> Vec<&'a Node> {
    visible_walk(root, expanded)
        .into_iter()
        .map(|(_, node)| node)
        .collect()
}

/// Longest root-to-leaf path, counted in nodes. A lone root has depth 1.
#[instrument(level = "trace", skip(root))]
pub fn depth(root: &Node) -> usize {
    1 + root.children.iter().map(depth).max().unwrap_or(0)
}

/// Number of nodes without children.
pub fn leaf_count(root: &Node) -> usize {
    root.iter().filter(|(_, node)| !node.has_children()).count()
}

/// Node tallies per category, keyed and ordered by category name.
pub fn category_counts(root: &Node) -> BTreeMap<String, usize> {
    root.iter()
        .map(|(_, node)| node.category.clone())
        .counts()
        .into_iter()
        .collect()
}

/// Ids of all nodes with at least one child.
pub fn internal_node_ids(root: &Node) -> BTreeSet<NodeId> {
    root.iter()
        .filter(|(_, node)| node.has_children())
        .map(|(_, node)| node.id)
        .collect()
}

/// Root-to-node path for the given id, root first. `None` when absent.
pub fn path_to(root: &Node, id: NodeId) -> Option<Vec<&Node>> {
    if root.id == id {
        return Some(vec![root]);
    }
    for child in &root.children {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }
    None
}

/// Defensive structural check: every id in the tree must be unique.
///
/// Exclusive child ownership already rules out cycles and sharing, so a
/// duplicate id can only come from a construction bug upstream. Fatal,
/// no repair policy.
#[instrument(level = "debug", skip(root))]
pub fn validate(root: &Node) -> DomainResult<()> {
    let mut seen = BTreeSet::new();
    for (_, node) in root.iter() {
        if !seen.insert(node.id) {
            return Err(StructureError::DuplicateId { id: node.id });
        }
    }
    Ok(())
}
