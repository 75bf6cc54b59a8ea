//! Domain entities: the record hierarchy

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of numeric values carried by every node.
pub const VALUE_COUNT: usize = 5;

/// Opaque node identifier, unique within a tree.
///
/// Ids are assigned at construction and never reused. They carry no
/// content: two builds of the same hierarchy produce equal structure
/// but distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single record in the hierarchy.
///
/// Children are owned exclusively by their parent, so the structure is a
/// tree by construction: no sharing, no cycles. Child order is traversal
/// and display order. Expansion and selection live outside the node
/// (see [`crate::domain::ExplorerState`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub values: [f64; VALUE_COUNT],
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        values: [f64; VALUE_COUNT],
    ) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            values,
            children: Vec::new(),
        }
    }

    /// Attach children, consuming and returning the node.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}
