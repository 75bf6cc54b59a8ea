//! treescope: explore hierarchical record sets
//!
//! The crate is layered: `domain` holds the tree model and its pure
//! operations (traversal, search, visibility, statistics, state),
//! `application` derives renderer-facing projections and loads datasets,
//! `cli` is the presentation surface. Layers only depend downwards.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
