//! Application layer: dataset loading and view projection
//!
//! This layer orchestrates pure domain operations into the shapes the
//! outer surface consumes. It owns the only file I/O besides config.

pub mod dataset;
pub mod error;
pub mod projection;

pub use dataset::{load_tree, RecordSpec};
pub use error::{ApplicationError, ApplicationResult};
pub use projection::{chart_series, detail, explorer_rows, ChartPoint, ExplorerRow, NodeDetail};
