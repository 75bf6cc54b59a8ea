//! Dataset loading: build a tree from a JSON file
//!
//! A dataset file describes exactly one root record. Ids are not part
//! of the format; every load assigns fresh ones, so two loads of the
//! same file agree on structure and attributes but never on ids.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{validate, Node, VALUE_COUNT};

/// Serde mirror of one record in a dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSpec {
    pub name: String,
    pub description: String,
    pub category: String,
    pub values: [f64; VALUE_COUNT],
    #[serde(default)]
    pub children: Vec<RecordSpec>,
}

impl RecordSpec {
    fn into_node(self) -> Node {
        let children = self.children.into_iter().map(Self::into_node).collect();
        Node::new(self.name, self.description, self.category, self.values)
            .with_children(children)
    }
}

/// Load a tree from a JSON dataset file.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> ApplicationResult<Node> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ApplicationError::DatasetRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    let spec: RecordSpec =
        serde_json::from_str(&content).map_err(|e| ApplicationError::DatasetParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    let root = spec.into_node();
    validate(&root)?;
    debug!("loaded dataset from {}", path.display());
    Ok(root)
}
