//! Domain layer: the record hierarchy and its pure operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod sample;
pub mod state;
pub mod traversal;

pub use error::{DomainResult, StructureError};
pub use node::{Node, NodeId, VALUE_COUNT};
pub use sample::sample_tree;
pub use state::ExplorerState;
pub use traversal::{
    category_counts, count_nodes, depth, find_by_id, find_by_name, internal_node_ids, leaf_count,
    path_to, search, validate, visible_nodes, visible_walk, PreOrderIter,
};
