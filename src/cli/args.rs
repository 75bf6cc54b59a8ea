//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Explore hierarchical record sets: tree display, search, selection, and statistics
#[derive(Parser, Debug)]
#[command(name = "treescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Dataset file with the record hierarchy (JSON, default: built-in sample)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the hierarchy as a tree
    Tree {
        /// Expand all nodes
        #[arg(short, long)]
        all: bool,

        /// Expand the given node and its ancestors (name or id)
        #[arg(short, long)]
        expand: Vec<String>,

        /// Select a node (name or id) and show its details below the tree
        #[arg(short, long)]
        select: Option<String>,

        /// Mark nodes matching a search query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Search nodes by name, description, or category
    Search {
        /// Case-insensitive substring query
        query: String,
    },

    /// Show the details of one node
    Show {
        /// Node name or id
        node: String,
    },

    /// Show hierarchy statistics
    Stats,

    /// Show node values as a bar chart
    Chart {
        /// Chart all nodes
        #[arg(short, long)]
        all: bool,

        /// Expand the given node and its ancestors (name or id)
        #[arg(short, long)]
        expand: Vec<String>,

        /// Highlight a node (name or id)
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Pick a node interactively (fzf-like) and show its details
    Select,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
