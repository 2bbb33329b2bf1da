//! Default-path expansion.
//!
//! A node that declares `default_path` gets an implicit index child so that
//! visiting the node's own pathname lands on the declared default. The
//! synthetic child is a plain redirect node: it never produces a menu entry
//! and its empty path resolves to the parent's pathname in the routing
//! table.

use crate::node::RouteNode;

/// Expands `default_path` declarations across a whole tree.
///
/// Order-independent: each node only reads its own `default_path` and
/// `children`, so top-down application is equivalent to bottom-up.
///
/// The target is *not* validated against the node's children: a
/// `default_path` naming a missing sibling degrades to a redirect the
/// router fails to match at runtime, per the configuration-anomaly policy.
///
/// # Examples
///
/// ```
/// use portico_routes::{expand_defaults, RouteNode};
///
/// let mut home = RouteNode::new("home")
///     .with_default_path("analysis")
///     .with_children(vec![
///         RouteNode::new("analysis"),
///         RouteNode::new("workbench"),
///     ]);
///
/// expand_defaults(&mut home);
///
/// assert_eq!(home.children.len(), 3);
/// assert_eq!(home.children[0].path, "");
/// assert_eq!(home.children[0].redirect.as_deref(), Some("analysis"));
/// ```
pub fn expand_defaults(node: &mut RouteNode) {
    if let Some(target) = node.default_path.clone() {
        node.children.insert(0, index_redirect(target));
    }
    for child in &mut node.children {
        expand_defaults(child);
    }
}

/// Expands every root of a forest in place.
pub fn expand_tree_defaults(roots: &mut [RouteNode]) {
    for root in roots {
        expand_defaults(root);
    }
}

/// The synthetic index child: empty path, redirect to the declared default.
fn index_redirect(target: String) -> RouteNode {
    RouteNode {
        path: String::new(),
        redirect: Some(target),
        ..RouteNode::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_prepends_exactly_one_child() {
        let mut node = RouteNode::new("home")
            .with_default_path("analysis")
            .with_children(vec![
                RouteNode::new("analysis"),
                RouteNode::new("workbench"),
            ]);

        expand_defaults(&mut node);

        assert_eq!(node.children.len(), 3);
        let index = &node.children[0];
        assert_eq!(index.path, "");
        assert_eq!(index.redirect.as_deref(), Some("analysis"));
        assert_eq!(node.children[1].path, "analysis");
    }

    #[test]
    fn test_expand_recurses_into_children() {
        let mut root = RouteNode::new("/").with_children(vec![RouteNode::new("home")
            .with_default_path("analysis")
            .with_children(vec![RouteNode::new("analysis")])]);

        expand_defaults(&mut root);

        assert!(root.children[0].children[0].is_redirect());
    }

    #[test]
    fn test_expand_without_default_is_noop() {
        let mut node = RouteNode::new("home").with_children(vec![RouteNode::new("analysis")]);
        let before = node.clone();

        expand_defaults(&mut node);

        assert_eq!(node, before);
    }

    #[test]
    fn test_expand_missing_target_not_validated() {
        // A dead target still yields the synthetic child; the router layer
        // surfaces the broken redirect at runtime.
        let mut node = RouteNode::new("home")
            .with_default_path("missing")
            .with_children(vec![RouteNode::new("analysis")]);

        expand_defaults(&mut node);

        assert_eq!(node.children[0].redirect.as_deref(), Some("missing"));
    }
}
