//! Built-in demonstration hierarchy
//!
//! Used when no dataset file is configured, and by tests exercising the
//! traversal engine. Structure and attributes are identical on every
//! call; only the ids are fresh.

use crate::domain::node::Node;

/// Build the fixed 8-node demonstration tree.
///
/// Root → {Analytics → {Sales Analytics → {Revenue Tracking,
/// Customer Metrics}, Marketing Analytics}, Reporting → {Monthly Reports}}
pub fn sample_tree() -> Node {
    Node::new("Root", "Main root node", "System", [1.2, 3.4, 5.6, 7.8, 9.0]).with_children(vec![
        Node::new(
            "Analytics",
            "Data analysis module",
            "Module",
            [2.1, 4.3, 6.5, 8.7, 1.9],
        )
        .with_children(vec![
            Node::new(
                "Sales Analytics",
                "Sales data processing",
                "Component",
                [4.3, 6.5, 8.7, 1.9, 3.2],
            )
            .with_children(vec![
                Node::new(
                    "Revenue Tracking",
                    "Track sales revenue",
                    "Feature",
                    [7.6, 9.8, 2.1, 4.3, 6.5],
                ),
                Node::new(
                    "Customer Metrics",
                    "Customer analysis",
                    "Feature",
                    [8.7, 1.9, 3.2, 5.4, 7.6],
                ),
            ]),
            Node::new(
                "Marketing Analytics",
                "Marketing metrics",
                "Component",
                [5.4, 7.6, 9.8, 2.1, 4.3],
            ),
        ]),
        Node::new(
            "Reporting",
            "Report generation",
            "Module",
            [3.2, 5.4, 7.6, 9.8, 2.1],
        )
        .with_children(vec![Node::new(
            "Monthly Reports",
            "Monthly summaries",
            "Component",
            [6.5, 8.7, 1.9, 3.2, 5.4],
        )]),
    ])
}
