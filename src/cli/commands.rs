//! Command dispatch and handlers
//!
//! Each invocation builds one `(tree, state)` pair from flags and
//! settings, runs the pure operations, and prints the projection.

use std::io::Cursor;
use std::path::Path;

use clap::CommandFactory;
use itertools::Itertools;
use skim::prelude::*;
use tracing::{debug, instrument};

use crate::application::{chart_series, detail, explorer_rows, load_tree};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, render};
use crate::config::{global_config_dir, global_config_path, local_config_path, Settings};
use crate::domain::{
    category_counts, count_nodes, depth, find_by_id, find_by_name, leaf_count, path_to,
    sample_tree, search, ExplorerState, Node, NodeId,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree {
            all,
            expand,
            select,
            query,
        }) => {
            let (tree, settings) = load_context(cli)?;
            let state = build_state(&tree, *all, expand, select.as_deref())?;
            _tree(&tree, &state, query.as_deref().unwrap_or(""), &settings)
        }
        Some(Commands::Search { query }) => {
            let (tree, _) = load_context(cli)?;
            _search(&tree, query)
        }
        Some(Commands::Show { node }) => {
            let (tree, settings) = load_context(cli)?;
            _show(&tree, node, &settings)
        }
        Some(Commands::Stats) => {
            let (tree, _) = load_context(cli)?;
            _stats(&tree)
        }
        Some(Commands::Chart {
            all,
            expand,
            select,
        }) => {
            let (tree, settings) = load_context(cli)?;
            let state = build_state(&tree, *all, expand, select.as_deref())?;
            _chart(&tree, &state, &settings)
        }
        Some(Commands::Select) => {
            let (tree, settings) = load_context(cli)?;
            _select(&tree, &settings)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                let settings = Settings::load(Some(Path::new(".")))?;
                _config_show(&settings)
            }
            ConfigCommands::Init { global } => _config_init(*global),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Settings plus dataset for the data commands.
fn load_context(cli: &Cli) -> CliResult<(Node, Settings)> {
    let settings = Settings::load(Some(Path::new(".")))?;
    let tree = resolve_tree(cli, &settings)?;
    Ok((tree, settings))
}

/// Dataset precedence: --file flag, then configured data_file, then the
/// built-in sample tree.
fn resolve_tree(cli: &Cli, settings: &Settings) -> CliResult<Node> {
    let path = cli.file.as_ref().or(settings.data_file.as_ref());
    match path {
        Some(path) => Ok(load_tree(path)?),
        None => Ok(sample_tree()),
    }
}

/// Build the session state from command flags.
fn build_state(
    tree: &Node,
    all: bool,
    expand: &[String],
    select: Option<&str>,
) -> CliResult<ExplorerState> {
    let mut state = ExplorerState::new();
    if all {
        state = state.expand_all(tree);
    }
    for spec in expand {
        let node = resolve_node(tree, spec)?;
        // Expand the ancestor chain too, otherwise the target stays hidden
        if let Some(path) = path_to(tree, node.id) {
            for ancestor in path {
                state = state.expand(ancestor.id);
            }
        }
    }
    if let Some(spec) = select {
        let node = resolve_node(tree, spec)?;
        state = state.select(node.id);
    }
    Ok(state)
}

/// Resolve a node argument: exact name match first, then id.
fn resolve_node<'a>(tree: &'a Node, spec: &str) -> CliResult<&'a Node> {
    let matches = find_by_name(tree, spec);
    match matches.len() {
        1 => Ok(matches[0]),
        0 => NodeId::parse(spec)
            .ok()
            .and_then(|id| find_by_id(tree, id))
            .ok_or_else(|| CliError::NodeNotFound(spec.to_string())),
        n => Err(CliError::InvalidArgs(format!(
            "node name '{}' is ambiguous ({} matches), use an id",
            spec, n
        ))),
    }
}

#[instrument(skip(tree, state, settings))]
fn _tree(tree: &Node, state: &ExplorerState, query: &str, settings: &Settings) -> CliResult<()> {
    debug!("query: {:?}", query);
    let rows = explorer_rows(tree, state, query);
    if !query.trim().is_empty() && !rows.iter().any(|row| row.is_search_hit) {
        output::warning(&format!("no visible nodes match '{}'", query));
    }
    println!("{}", render::explorer_tree(&rows));
    if let Some(node_detail) = detail(tree, state) {
        println!();
        for line in render::detail_lines(&node_detail, settings.value_precision) {
            output::detail(&line);
        }
    }
    Ok(())
}

#[instrument(skip(tree))]
fn _search(tree: &Node, query: &str) -> CliResult<()> {
    let results = search(tree, query);
    output::info(&format!("Found {} results", results.len()));
    for node in results {
        output::detail(&format!("• {} ({})", node.name, node.category));
    }
    Ok(())
}

#[instrument(skip(tree, settings))]
fn _show(tree: &Node, spec: &str, settings: &Settings) -> CliResult<()> {
    let node = resolve_node(tree, spec)?;
    let state = ExplorerState::new().select(node.id);
    let node_detail =
        detail(tree, &state).ok_or_else(|| CliError::NodeNotFound(spec.to_string()))?;
    for line in render::detail_lines(&node_detail, settings.value_precision) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(tree))]
fn _stats(tree: &Node) -> CliResult<()> {
    output::header("Hierarchy");
    output::detail(&format!("Total nodes: {}", count_nodes(tree)));
    output::detail(&format!("Depth: {}", depth(tree)));
    output::detail(&format!("Leaves: {}", leaf_count(tree)));
    println!();
    output::header("Categories");
    for (category, count) in category_counts(tree) {
        output::detail(&format!("{}: {}", category, count));
    }
    Ok(())
}

#[instrument(skip(tree, state, settings))]
fn _chart(tree: &Node, state: &ExplorerState, settings: &Settings) -> CliResult<()> {
    let series = chart_series(tree, state);
    for line in render::chart_lines(&series, settings.chart_width, settings.value_precision) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(tree, settings))]
fn _select(tree: &Node, settings: &Settings) -> CliResult<()> {
    let input = tree.iter().map(|(_, node)| node.name.clone()).join("\n");

    let options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(false)
        .build()
        .unwrap();

    let item_reader = SkimItemReader::default();
    let items = item_reader.of_bufread(Cursor::new(input));

    let selected_items = Skim::run_with(&options, Some(items))
        .map(|out| out.selected_items)
        .unwrap_or_else(Vec::new);

    if let Some(item) = selected_items.first() {
        let node = resolve_node(tree, &item.output())?;
        let state = ExplorerState::new().select(node.id);
        if let Some(node_detail) = detail(tree, &state) {
            for line in render::detail_lines(&node_detail, settings.value_precision) {
                output::info(&line);
            }
        }
    }
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_init(global: bool) -> CliResult<()> {
    let path = if global {
        let dir = global_config_dir()
            .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
        std::fs::create_dir_all(&dir).map_err(|e| CliError::Io {
            context: format!("create {}", dir.display()),
            source: e,
        })?;
        dir.join("treescope.toml")
    } else {
        local_config_path(Path::new("."))
    };

    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    std::fs::write(&path, Settings::template()).map_err(|e| CliError::Io {
        context: format!("write {}", path.display()),
        source: e,
    })?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn _config_path() -> CliResult<()> {
    if let Some(global) = global_config_path() {
        let marker = if global.exists() { "(exists)" } else { "(not found)" };
        output::info(&format!("global: {} {}", global.display(), marker));
    }
    let local = local_config_path(Path::new("."));
    let marker = if local.exists() { "(exists)" } else { "(not found)" };
    output::info(&format!("local:  {} {}", local.display(), marker));
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
