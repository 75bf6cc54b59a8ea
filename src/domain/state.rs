//! Selection and expansion state, external to the tree
//!
//! The tree itself never changes during a session; which subtrees are
//! open and which node is selected is per-session state keyed by node
//! id. All operations are pure: they take `&self` and return the
//! successor state, so a host can keep, compare, or persist states
//! freely.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::node::{Node, NodeId};
use crate::domain::traversal::internal_node_ids;

/// Explorer session state: expanded subtrees and the selection.
///
/// Both fields reference nodes by id only. An id that no longer resolves
/// in the current tree behaves as not-found downstream; it is never an
/// error here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerState {
    /// Ids whose children are shown. Absent means collapsed.
    pub expanded: BTreeSet<NodeId>,
    /// At most one selected node.
    pub selected: Option<NodeId>,
}

impl ExplorerState {
    /// Fresh state: everything collapsed, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected == Some(id)
    }

    /// Flip the expansion flag for one id. Applying twice restores the
    /// original state. No structural validation happens here.
    pub fn toggle_expanded(&self, id: NodeId) -> Self {
        let mut next = self.clone();
        if !next.expanded.remove(&id) {
            next.expanded.insert(id);
        }
        next
    }

    /// Expand one id regardless of its current flag. Idempotent.
    pub fn expand(&self, id: NodeId) -> Self {
        let mut next = self.clone();
        next.expanded.insert(id);
        next
    }

    /// Expand every internal node of `root`. Leaves are never flagged.
    /// Idempotent for a given tree.
    pub fn expand_all(&self, root: &Node) -> Self {
        Self {
            expanded: internal_node_ids(root),
            selected: self.selected,
        }
    }

    /// Collapse everything. Idempotent. Selection is untouched.
    pub fn collapse_all(&self) -> Self {
        Self {
            expanded: BTreeSet::new(),
            selected: self.selected,
        }
    }

    /// Select a node. Expansion flags are untouched.
    pub fn select(&self, id: NodeId) -> Self {
        let mut next = self.clone();
        next.selected = Some(id);
        next
    }

    /// Drop the selection.
    pub fn clear_selection(&self) -> Self {
        let mut next = self.clone();
        next.selected = None;
        next
    }
}
