//! Presentation formatting for projection output
//!
//! Consumes explorer rows, chart points, and node details as produced by
//! the application layer; never re-derives visibility or walks the tree
//! itself.

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;

use crate::application::{ChartPoint, ExplorerRow, NodeDetail};

/// Rebuild the visible hierarchy from flat explorer rows.
///
/// Rows arrive in visible pre-order with their depths; sibling and
/// parent boundaries are recovered from depth changes.
pub fn explorer_tree(rows: &[ExplorerRow]) -> Tree<String> {
    let mut stack: Vec<Tree<String>> = Vec::new();
    for row in rows {
        while stack.len() > row.depth && stack.len() > 1 {
            fold_top(&mut stack);
        }
        stack.push(Tree::new(row_label(row)));
    }
    while stack.len() > 1 {
        fold_top(&mut stack);
    }
    stack.pop().unwrap_or_else(|| Tree::new(String::new()))
}

fn fold_top(stack: &mut Vec<Tree<String>>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.push(done);
        }
    }
}

fn row_label(row: &ExplorerRow) -> String {
    let marker = if row.has_children {
        if row.is_expanded {
            "▼ "
        } else {
            "▶ "
        }
    } else {
        ""
    };
    let label = format!("{}{}", marker, row.node.name);
    if row.is_selected {
        label.green().bold().to_string()
    } else if row.is_search_hit {
        label.yellow().to_string()
    } else {
        label
    }
}

/// Render chart points as horizontal bars.
///
/// Bars scale linearly so the series maximum fills `width` characters;
/// non-positive values get a zero-width bar. The highlighted point is
/// colored, everything else stays plain.
pub fn chart_lines(points: &[ChartPoint], width: usize, precision: usize) -> Vec<String> {
    let max_value = points.iter().map(|point| point.value).fold(0.0_f64, f64::max);
    let label_width = points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);

    points
        .iter()
        .map(|point| {
            let bar_len = if max_value > 0.0 {
                ((point.value / max_value).max(0.0) * width as f64).round() as usize
            } else {
                0
            };
            let bar = "█".repeat(bar_len);
            let line = format!(
                "{:<label_width$}  {} {:.precision$}",
                point.label, bar, point.value,
            );
            if point.highlighted {
                line.green().bold().to_string()
            } else {
                line
            }
        })
        .collect()
}

/// Render a node detail view as labeled lines.
pub fn detail_lines(detail: &NodeDetail, precision: usize) -> Vec<String> {
    let values = detail
        .values
        .iter()
        .map(|value| format!("{:.precision$}", value))
        .join(", ");
    vec![
        format!("Name: {}", detail.name),
        format!("Description: {}", detail.description),
        format!("Category: {}", detail.category),
        format!("Values: {}", values),
    ]
}
