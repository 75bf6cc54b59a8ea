//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// Structural violations of the tree contract.
///
/// Exclusive child ownership makes cycles and sharing unrepresentable in
/// the type, so id uniqueness is the remaining checkable invariant.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("duplicate node id in hierarchy: {id}")]
    DuplicateId { id: NodeId },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, StructureError>;
