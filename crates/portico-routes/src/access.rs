//! Access filtering for the two trust models.
//!
//! Frontend mode filters a static tree against the caller's granted
//! permission codes. Backend mode trusts the server-filtered tree and only
//! resolves its string component keys against the registry, substituting
//! the forbidden component for unknown keys so the route still exists and
//! renders a 403 instead of failing route resolution.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::node::{PageComponent, RouteNode};

/// Which trust model selects and filters the route source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// The client filters a static route set by permission codes.
    Frontend,
    /// The server supplies the already-filtered route/menu set.
    Backend,
}

/// Lookup table for backend-supplied component keys.
///
/// Implemented by the component registry collaborator; the engine only ever
/// asks whether a key exists, never what it loads.
pub trait ComponentTable {
    fn has_page(&self, key: &str) -> bool;
    fn has_layout(&self, key: &str) -> bool;
}

/// Frontend-mode filter: keeps a node iff it requires no permissions or the
/// granted set covers all of them.
///
/// Dropping a node drops its entire subtree; permissions are checked per
/// node only and never inherited in either direction. A grouping node whose
/// children all get dropped is still kept in the route tree; whether an
/// empty group yields a visible menu entry is the projector's decision, not
/// this filter's.
///
/// # Examples
///
/// ```
/// use portico_routes::{filter_by_permission, RouteNode};
/// use std::collections::HashSet;
///
/// let roots = vec![
///     RouteNode::new("analysis").with_permission(["homeIndex"]),
///     RouteNode::new("workbench"),
/// ];
///
/// let granted = HashSet::new();
/// let kept = filter_by_permission(&roots, &granted);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].path, "workbench");
/// ```
pub fn filter_by_permission(roots: &[RouteNode], granted: &HashSet<String>) -> Vec<RouteNode> {
    roots
        .iter()
        .filter_map(|node| keep_node(node, granted))
        .collect()
}

fn keep_node(node: &RouteNode, granted: &HashSet<String>) -> Option<RouteNode> {
    if let Some(required) = &node.meta.permission {
        if !required.iter().all(|code| granted.contains(code)) {
            debug!(path = %node.path, "dropping route subtree: missing permission");
            return None;
        }
    }

    let mut kept = node.clone();
    kept.children = filter_by_permission(&node.children, granted);
    Some(kept)
}

/// Backend-mode resolution: swaps unknown component keys for
/// [`PageComponent::Forbidden`].
///
/// Never errors: an unresolvable key is a recoverable anomaly, not a
/// failure of route resolution.
pub fn resolve_components(roots: Vec<RouteNode>, table: &dyn ComponentTable) -> Vec<RouteNode> {
    roots
        .into_iter()
        .map(|node| resolve_node(node, table))
        .collect()
}

fn resolve_node(mut node: RouteNode, table: &dyn ComponentTable) -> RouteNode {
    let known = match &node.component {
        Some(PageComponent::Page(key)) => table.has_page(key),
        Some(PageComponent::Layout(key)) => table.has_layout(key),
        _ => true,
    };
    if !known {
        warn!(path = %node.path, component = ?node.component, "unknown component key, substituting forbidden page");
        node.component = Some(PageComponent::Forbidden);
    }

    node.children = resolve_components(std::mem::take(&mut node.children), table);
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RouteMeta;

    fn granted(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_permission_superset_kept() {
        let roots = vec![RouteNode::new("analysis").with_permission(["homeIndex"])];

        assert!(filter_by_permission(&roots, &granted(&[])).is_empty());
        assert_eq!(
            filter_by_permission(&roots, &granted(&["homeIndex"])).len(),
            1
        );
        assert_eq!(
            filter_by_permission(&roots, &granted(&["homeIndex", "extra"])).len(),
            1
        );
    }

    #[test]
    fn test_drop_prunes_subtree() {
        let roots = vec![RouteNode::new("admin")
            .with_permission(["admin"])
            .with_children(vec![RouteNode::new("users")])];

        assert!(filter_by_permission(&roots, &granted(&[])).is_empty());
    }

    #[test]
    fn test_children_checked_independently() {
        // A parent's visibility does not grant children visibility.
        let roots = vec![RouteNode::new("home").with_children(vec![
            RouteNode::new("analysis").with_permission(["homeIndex"]),
            RouteNode::new("workbench"),
        ])];

        let kept = filter_by_permission(&roots, &granted(&[]));
        assert_eq!(kept[0].children.len(), 1);
        assert_eq!(kept[0].children[0].path, "workbench");
    }

    #[test]
    fn test_empty_grouping_node_kept() {
        let roots = vec![RouteNode::new("admin").with_children(vec![
            RouteNode::new("users").with_permission(["admin"]),
        ])];

        let kept = filter_by_permission(&roots, &granted(&[]));
        assert_eq!(kept.len(), 1);
        assert!(kept[0].children.is_empty());
    }

    #[test]
    fn test_empty_permission_list_is_no_requirement() {
        let roots = vec![RouteNode::new("open").with_meta(RouteMeta {
            permission: Some(vec![]),
            ..RouteMeta::default()
        })];

        assert_eq!(filter_by_permission(&roots, &granted(&[])).len(), 1);
    }

    struct FixedTable;

    impl ComponentTable for FixedTable {
        fn has_page(&self, key: &str) -> bool {
            key == "dashboard"
        }
        fn has_layout(&self, key: &str) -> bool {
            key == "default"
        }
    }

    #[test]
    fn test_unknown_key_substituted() {
        let roots = vec![RouteNode::new("layout")
            .with_component(PageComponent::Layout("default".into()))
            .with_children(vec![
                RouteNode::new("dashboard").with_component(PageComponent::Page("dashboard".into())),
                RouteNode::new("reports").with_component(PageComponent::Page("reports".into())),
            ])];

        let resolved = resolve_components(roots, &FixedTable);
        let layout = &resolved[0];
        assert_eq!(
            layout.component,
            Some(PageComponent::Layout("default".into()))
        );
        assert_eq!(
            layout.children[0].component,
            Some(PageComponent::Page("dashboard".into()))
        );
        assert_eq!(layout.children[1].component, Some(PageComponent::Forbidden));
    }

    #[test]
    fn test_componentless_nodes_untouched() {
        let roots = vec![RouteNode::new("group").with_children(vec![RouteNode::new("leaf")])];
        let resolved = resolve_components(roots.clone(), &FixedTable);
        assert_eq!(resolved, roots);
    }
}
