//! View projection: renderer-facing shapes derived from tree + state
//!
//! Projections are recomputed in full on every call; nothing is cached
//! and nothing here touches a renderer. Search-hit membership is an
//! id-set check, never node identity.

use std::collections::BTreeSet;

use crate::domain::{find_by_id, search, visible_walk, ExplorerState, Node, NodeId, VALUE_COUNT};

/// One visible row of the explorer, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerRow<'a> {
    pub node: &'a Node,
    /// Distance from the root (root = 0).
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub is_search_hit: bool,
}

/// Attributes of the selected node, ready for the detail pane.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDetail {
    pub name: String,
    pub description: String,
    pub category: String,
    pub values: [f64; VALUE_COUNT],
}

/// One bar of the chart: `(label, value, highlighted)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub highlighted: bool,
}

/// Project the visible tree into explorer rows.
///
/// Rows come back in visible pre-order. `is_search_hit` marks membership
/// in the result set of `query`, recomputed fresh here; an empty query
/// marks nothing.
pub fn explorer_rows<'a>(
    root: &'a Node,
    state: &ExplorerState,
    query: &str,
) -> Vec<ExplorerRow<'a>> {
    let hits: BTreeSet<NodeId> = search(root, query).iter().map(|node| node.id).collect();
    visible_walk(root, &state.expanded)
        .into_iter()
        .map(|(depth, node)| ExplorerRow {
            node,
            depth,
            has_children: node.has_children(),
            is_expanded: state.is_expanded(node.id),
            is_selected: state.is_selected(node.id),
            is_search_hit: hits.contains(&node.id),
        })
        .collect()
}

/// Resolve the selection into its detail view.
///
/// `None` means "nothing selected", which covers both an empty selection
/// and a stale id that no longer resolves in the tree.
pub fn detail(root: &Node, state: &ExplorerState) -> Option<NodeDetail> {
    let node = find_by_id(root, state.selected?)?;
    Some(NodeDetail {
        name: node.name.clone(),
        description: node.description.clone(),
        category: node.category.clone(),
        values: node.values,
    })
}

/// Project the visible tree into chart points.
///
/// One point per visible node, in visible order (never sorted by value):
/// label is the name, value is the node's first numeric value, and the
/// selected node is highlighted.
pub fn chart_series(root: &Node, state: &ExplorerState) -> Vec<ChartPoint> {
    visible_walk(root, &state.expanded)
        .into_iter()
        .map(|(_, node)| ChartPoint {
            label: node.name.clone(),
            value: node.values[0],
            highlighted: state.is_selected(node.id),
        })
        .collect()
}
