//! Tests for the pre-order traversal engine

use std::collections::BTreeSet;

use rstest::rstest;

use treescope::domain::{
    category_counts, count_nodes, depth, find_by_id, find_by_name, internal_node_ids, leaf_count,
    path_to, sample_tree, search, validate, visible_nodes, ExplorerState, Node, NodeId,
};
use treescope::util::testing::init_test_setup;

fn names(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.name.clone()).collect()
}

// ============================================================
// Pre-Order Iteration Tests
// ============================================================

#[test]
fn given_sample_tree_when_iterated_then_visits_in_preorder() {
    init_test_setup();
    let tree = sample_tree();

    let visited: Vec<_> = tree.iter().map(|(_, n)| n.name.as_str()).collect();

    assert_eq!(
        visited,
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
}

#[test]
fn given_sample_tree_when_iterated_then_depths_match_distance_from_root() {
    let tree = sample_tree();

    let depths: Vec<_> = tree.iter().map(|(d, _)| d).collect();

    assert_eq!(depths, vec![0, 1, 2, 3, 3, 2, 1, 2]);
}

// ============================================================
// Search Tests
// ============================================================

#[rstest]
#[case("analytics", vec!["Analytics", "Sales Analytics", "Marketing Analytics"])]
#[case("ANALYTICS", vec!["Analytics", "Sales Analytics", "Marketing Analytics"])]
#[case("revenue", vec!["Revenue Tracking"])]
#[case("no-such-text", vec![])]
fn given_query_when_searching_then_returns_expected_names(
    #[case] query: &str,
    #[case] expected: Vec<&str>,
) {
    let tree = sample_tree();

    let results = search(&tree, query);

    assert_eq!(names(&results), expected);
}

#[test]
fn given_query_matching_description_when_searching_then_node_is_found() {
    let tree = sample_tree();

    // "summaries" only appears in Monthly Reports' description
    let results = search(&tree, "summaries");

    assert_eq!(names(&results), vec!["Monthly Reports"]);
}

#[test]
fn given_query_matching_category_when_searching_then_all_members_found_once() {
    let tree = sample_tree();

    let results = search(&tree, "feature");

    // Matched via category; each node appears exactly once, in pre-order
    assert_eq!(names(&results), vec!["Revenue Tracking", "Customer Metrics"]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn given_blank_query_when_searching_then_matches_nothing(#[case] query: &str) {
    let tree = sample_tree();
    assert!(search(&tree, query).is_empty());
}

#[test]
fn given_any_query_when_searching_then_results_are_subset_of_tree() {
    let tree = sample_tree();
    let all_ids: BTreeSet<NodeId> = tree.iter().map(|(_, n)| n.id).collect();

    for query in ["a", "e", "module", "tracking"] {
        for node in search(&tree, query) {
            assert!(all_ids.contains(&node.id));
            let lowered = query.to_lowercase();
            assert!(
                node.name.to_lowercase().contains(&lowered)
                    || node.description.to_lowercase().contains(&lowered)
                    || node.category.to_lowercase().contains(&lowered),
                "'{}' does not match node '{}'",
                query,
                node.name
            );
        }
    }
}

// ============================================================
// Lookup Tests
// ============================================================

#[test]
fn given_existing_id_when_finding_then_returns_node_with_that_id() {
    let tree = sample_tree();
    let target = tree.children[0].children[1].id;

    let found = find_by_id(&tree, target).expect("node exists");

    assert_eq!(found.id, target);
    assert_eq!(found.name, "Marketing Analytics");
}

#[test]
fn given_unknown_id_when_finding_then_returns_none() {
    let tree = sample_tree();

    // A freshly generated id cannot be in the tree
    assert!(find_by_id(&tree, NodeId::new()).is_none());
}

#[test]
fn given_name_when_finding_by_name_then_exact_matches_only() {
    let tree = sample_tree();

    let matches = find_by_name(&tree, "Analytics");

    // "Sales Analytics" and "Marketing Analytics" are not exact matches
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Analytics");
    assert!(find_by_name(&tree, "analytics").is_empty());
}

// ============================================================
// Statistics Tests
// ============================================================

#[test]
fn given_single_node_when_counting_then_returns_one() {
    let node = Node::new("Only", "", "Leaf", [0.0; 5]);
    assert_eq!(count_nodes(&node), 1);
    assert_eq!(depth(&node), 1);
    assert_eq!(leaf_count(&node), 1);
}

#[test]
fn given_any_tree_when_counting_then_equals_one_plus_child_counts() {
    let tree = sample_tree();

    let child_sum: usize = tree.children.iter().map(count_nodes).sum();

    assert_eq!(count_nodes(&tree), 1 + child_sum);
}

#[test]
fn given_sample_tree_when_measuring_then_stats_match() {
    let tree = sample_tree();

    assert_eq!(count_nodes(&tree), 8);
    assert_eq!(depth(&tree), 4);
    assert_eq!(leaf_count(&tree), 4);
}

#[test]
fn given_sample_tree_when_tallying_categories_then_sorted_by_name() {
    let tree = sample_tree();

    let counts = category_counts(&tree);

    let entries: Vec<_> = counts
        .iter()
        .map(|(category, count)| (category.as_str(), *count))
        .collect();
    assert_eq!(
        entries,
        vec![("Component", 3), ("Feature", 2), ("Module", 2), ("System", 1)]
    );
}

#[test]
fn given_sample_tree_when_collecting_internal_ids_then_leaves_are_absent() {
    let tree = sample_tree();

    let internal = internal_node_ids(&tree);

    assert_eq!(internal.len(), 4);
    assert!(internal.contains(&tree.id));
    // Leaf check: Marketing Analytics has no children
    assert!(!internal.contains(&tree.children[0].children[1].id));
}

// ============================================================
// Visibility Tests
// ============================================================

#[test]
fn given_nothing_expanded_when_computing_visibility_then_only_root() {
    let tree = sample_tree();

    let visible = visible_nodes(&tree, &BTreeSet::new());

    assert_eq!(names(&visible), vec!["Root"]);
}

#[test]
fn given_partial_expansion_when_computing_visibility_then_collapsed_subtrees_hidden() {
    // Arrange: expand Root and Analytics only
    let tree = sample_tree();
    let expanded: BTreeSet<NodeId> = [tree.id, tree.children[0].id].into_iter().collect();

    // Act
    let visible = visible_nodes(&tree, &expanded);

    // Assert: Sales Analytics is visible but its children are not,
    // since its own id is not expanded
    assert_eq!(
        names(&visible),
        vec!["Root", "Analytics", "Sales Analytics", "Marketing Analytics"]
    );
}

#[test]
fn given_expanded_descendant_under_collapsed_ancestor_then_subtree_stays_hidden() {
    // Arrange: Sales Analytics expanded, but its parent Analytics is not
    let tree = sample_tree();
    let sales = &tree.children[0].children[0];
    let expanded: BTreeSet<NodeId> = [tree.id, sales.id].into_iter().collect();

    // Act
    let visible = visible_nodes(&tree, &expanded);

    // Assert: path-dependent visibility, descendant flags do not matter
    assert_eq!(names(&visible), vec!["Root", "Analytics", "Reporting"]);
}

#[test]
fn given_expand_all_when_computing_visibility_then_every_node_once_in_preorder() {
    let tree = sample_tree();
    let state = ExplorerState::new().expand_all(&tree);

    let visible = visible_nodes(&tree, &state.expanded);

    let preorder: Vec<_> = tree.iter().map(|(_, n)| n.id).collect();
    let visible_ids: Vec<_> = visible.iter().map(|n| n.id).collect();
    assert_eq!(visible_ids, preorder);
}

// ============================================================
// Structural Validation Tests
// ============================================================

#[test]
fn given_sample_tree_when_validating_then_passes() {
    let tree = sample_tree();
    assert!(validate(&tree).is_ok());
}

#[test]
fn given_duplicated_id_when_validating_then_fails() {
    // Arrange: force a child to share the root's id
    let mut tree = sample_tree();
    let mut rogue = Node::new("Rogue", "", "Leaf", [0.0; 5]);
    rogue.id = tree.id;
    tree.children.push(rogue);

    // Act / Assert
    assert!(validate(&tree).is_err());
}

// ============================================================
// Path Tests
// ============================================================

#[test]
fn given_leaf_id_when_resolving_path_then_runs_root_to_leaf() {
    let tree = sample_tree();
    let revenue = tree.children[0].children[0].children[0].id;

    let path = path_to(&tree, revenue).expect("path exists");

    let path_names: Vec<_> = path.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        path_names,
        vec!["Root", "Analytics", "Sales Analytics", "Revenue Tracking"]
    );
}

#[test]
fn given_root_id_when_resolving_path_then_single_element() {
    let tree = sample_tree();
    let path = path_to(&tree, tree.id).expect("path exists");
    assert_eq!(path.len(), 1);
}

#[test]
fn given_unknown_id_when_resolving_path_then_none() {
    let tree = sample_tree();
    assert!(path_to(&tree, NodeId::new()).is_none());
}
