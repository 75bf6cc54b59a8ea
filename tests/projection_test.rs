//! Tests for the view projection layer

use treescope::application::{chart_series, detail, explorer_rows};
use treescope::domain::{sample_tree, ExplorerState, NodeId};
use treescope::util::testing::init_test_setup;

// ============================================================
// Explorer Row Tests
// ============================================================

#[test]
fn given_collapsed_state_when_projecting_rows_then_only_root_row() {
    init_test_setup();
    let tree = sample_tree();
    let state = ExplorerState::new();

    let rows = explorer_rows(&tree, &state, "");

    assert_eq!(rows.len(), 1);
    let root_row = &rows[0];
    assert_eq!(root_row.node.name, "Root");
    assert_eq!(root_row.depth, 0);
    assert!(root_row.has_children);
    assert!(!root_row.is_expanded);
    assert!(!root_row.is_selected);
    assert!(!root_row.is_search_hit);
}

#[test]
fn given_expand_all_when_projecting_rows_then_depths_and_flags_match() {
    let tree = sample_tree();
    let state = ExplorerState::new().expand_all(&tree);

    let rows = explorer_rows(&tree, &state, "");

    assert_eq!(rows.len(), 8);
    let depths: Vec<_> = rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 3, 3, 2, 1, 2]);

    for row in &rows {
        assert_eq!(row.has_children, row.node.has_children());
        // With expand-all, expanded == internal
        assert_eq!(row.is_expanded, row.node.has_children());
    }
}

#[test]
fn given_query_when_projecting_rows_then_hits_marked_by_id() {
    let tree = sample_tree();
    let state = ExplorerState::new().expand_all(&tree);

    let rows = explorer_rows(&tree, &state, "analytics");

    let hits: Vec<_> = rows
        .iter()
        .filter(|r| r.is_search_hit)
        .map(|r| r.node.name.as_str())
        .collect();
    assert_eq!(
        hits,
        vec!["Analytics", "Sales Analytics", "Marketing Analytics"]
    );
}

#[test]
fn given_empty_query_when_projecting_rows_then_no_hits() {
    let tree = sample_tree();
    let state = ExplorerState::new().expand_all(&tree);

    let rows = explorer_rows(&tree, &state, "");

    assert!(rows.iter().all(|r| !r.is_search_hit));
}

#[test]
fn given_hit_hidden_under_collapsed_ancestor_then_absent_from_rows() {
    // "Revenue Tracking" matches but its ancestors are collapsed
    let tree = sample_tree();
    let state = ExplorerState::new();

    let rows = explorer_rows(&tree, &state, "revenue");

    assert!(rows.iter().all(|r| r.node.name != "Revenue Tracking"));
}

#[test]
fn given_selection_when_projecting_rows_then_exactly_one_selected() {
    let tree = sample_tree();
    let analytics = &tree.children[0];
    let state = ExplorerState::new().expand_all(&tree).select(analytics.id);

    let rows = explorer_rows(&tree, &state, "");

    let selected: Vec<_> = rows.iter().filter(|r| r.is_selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].node.id, analytics.id);
}

// ============================================================
// Detail View Tests
// ============================================================

#[test]
fn given_no_selection_when_resolving_detail_then_none() {
    let tree = sample_tree();
    assert!(detail(&tree, &ExplorerState::new()).is_none());
}

#[test]
fn given_selection_when_resolving_detail_then_attributes_exposed() {
    let tree = sample_tree();
    let revenue = &tree.children[0].children[0].children[0];
    let state = ExplorerState::new().select(revenue.id);

    let view = detail(&tree, &state).expect("detail resolves");

    assert_eq!(view.name, "Revenue Tracking");
    assert_eq!(view.description, "Track sales revenue");
    assert_eq!(view.category, "Feature");
    assert_eq!(view.values, [7.6, 9.8, 2.1, 4.3, 6.5]);
}

#[test]
fn given_stale_selection_when_resolving_detail_then_degrades_to_none() {
    // Arrange: a selection pointing at an id from a different tree build
    let tree = sample_tree();
    let other = sample_tree();
    let state = ExplorerState::new().select(other.id);

    // Act / Assert: not an error, just nothing selected
    assert!(detail(&tree, &state).is_none());
}

// ============================================================
// Chart Series Tests
// ============================================================

#[test]
fn given_expand_all_when_projecting_chart_then_one_point_per_visible_node() {
    let tree = sample_tree();
    let state = ExplorerState::new().expand_all(&tree);

    let series = chart_series(&tree, &state);

    assert_eq!(series.len(), 8);
    // Visible order is preserved, never sorted by value
    let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Root",
            "Analytics",
            "Sales Analytics",
            "Revenue Tracking",
            "Customer Metrics",
            "Marketing Analytics",
            "Reporting",
            "Monthly Reports",
        ]
    );
    // Value is the node's first numeric value
    assert_eq!(series[0].value, 1.2);
    assert_eq!(series[3].value, 7.6);
}

#[test]
fn given_selection_when_projecting_chart_then_only_that_point_highlighted() {
    let tree = sample_tree();
    let reporting = &tree.children[1];
    let state = ExplorerState::new().expand_all(&tree).select(reporting.id);

    let series = chart_series(&tree, &state);

    let highlighted: Vec<_> = series
        .iter()
        .filter(|p| p.highlighted)
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(highlighted, vec!["Reporting"]);
}

#[test]
fn given_collapsed_state_when_projecting_chart_then_root_only() {
    let tree = sample_tree();
    let series = chart_series(&tree, &ExplorerState::new());

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "Root");
    assert!(!series[0].highlighted);
}

#[test]
fn given_stale_selection_when_projecting_then_nothing_highlighted_or_selected() {
    let tree = sample_tree();
    let state = ExplorerState::new()
        .expand_all(&tree)
        .select(NodeId::new());

    let rows = explorer_rows(&tree, &state, "");
    let series = chart_series(&tree, &state);

    assert!(rows.iter().all(|r| !r.is_selected));
    assert!(series.iter().all(|p| !p.highlighted));
}
