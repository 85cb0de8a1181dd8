//! Describing a route tree as named directions
//!
//! ```text
//! describe(node, base)
//!     base' = base + own path
//!     suffixes?  → one entry per suffix: the node again, path and suffixes
//!                  cleared, described at base' + suffix (children included)
//!     otherwise  → one entry per named child; anonymous children are
//!                  hoisted into this level
//!     path of this level = base'   (written last, always wins)
//! ```
//!
//! The index path of a level comes from the first child marked `index` that
//! has a path of its own, or the first suffix marked `index`. It is set once.

use tracing::debug;

use crate::direction::Direction;
use crate::node::RouteNode;

/// Describes `node` and its subtree under `base`
///
/// # Examples
///
/// ```
/// use rhtmx_chart::RouteNode;
///
/// let root = RouteNode::new().with_nested_routes(vec![
///     RouteNode::new().with_name("home").with_path("/home"),
/// ]);
///
/// let directions = rhtmx_chart::describe(&root, "");
/// assert_eq!(directions.path(), "");
/// assert_eq!(directions.path_of("home"), Some("/home"));
/// ```
pub fn describe(node: &RouteNode, base: &str) -> Direction {
    let direction = describe_node(node, base);
    debug!(base = %base, "described route tree");
    direction
}

fn describe_node(node: &RouteNode, base: &str) -> Direction {
    let base_path = format!("{base}{}", node.path().unwrap_or_default());

    if node.suffixes().is_empty() {
        return describe_children(node, base_path);
    }

    // Suffix fan-out replaces child fan-out for this level
    let mut direction = Direction::default();
    for suffix in node.suffixes() {
        let path = format!("{base_path}{}", suffix.path);
        if suffix.index {
            direction.claim_index(&path);
        }
        direction.insert(suffix.name.clone(), describe_children(node, path));
    }
    direction.set_path(base_path);
    direction
}

/// Level made of `node`'s children, resolved under `base_path`
fn describe_children(node: &RouteNode, base_path: String) -> Direction {
    let mut direction = Direction::default();

    for child in node.children() {
        let nested = describe_node(child, &base_path);

        // A pathless index child resolves to this level itself
        if child.is_index() && child.path().is_some_and(|path| !path.is_empty()) {
            direction.claim_index(nested.path());
        }

        match child.name() {
            Some(name) => direction.insert(name.to_string(), nested),
            None => direction.hoist(nested),
        }
    }

    direction.set_path(base_path);
    direction
}
