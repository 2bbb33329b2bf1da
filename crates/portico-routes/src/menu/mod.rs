//! Menu projection.
//!
//! Walks the same configuration tree as the flattener and builds the menu
//! hierarchy the sidebar/tab widgets render. Menu nesting is allowed to
//! diverge from route nesting: a `flatten` node keeps its routing layer but
//! hoists its children's menu entries to the parent's menu level.

pub mod active;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::node::RouteNode;
use crate::path::ChainContext;

/// One rendered menu entry.
///
/// `key` and `path` both equal the source node's resolved pathname and are
/// unique across the menu set. `parents` is left empty at construction and
/// populated by the active-chain resolver on lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub key: String,
    pub path: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub badge_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
}

/// Everything the projector produces in one walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSet {
    /// The visible menu tree, in render order.
    pub items: Vec<MenuRecord>,
    /// Flat map of every visible record by key.
    pub visible: HashMap<String, MenuRecord>,
    /// Flat map of every routable record by key, hidden entries included.
    /// For hoisted keys this resolves to the structural flatten ancestor.
    pub all: HashMap<String, MenuRecord>,
}

/// Projects a configuration forest into its [`MenuSet`].
///
/// Depth-first, pre-order. Redirect nodes contribute nothing. Hidden nodes
/// land in `all` only, though their subtrees are still walked since
/// children may be independently visible. Within every post-hoist sibling
/// list, entries sort ascending by `meta.order`; entries without an order
/// sort after all ordered ones, ties keeping declaration order. Insertion
/// order is preserved verbatim everywhere else.
///
/// # Examples
///
/// ```
/// use portico_routes::{project, RouteNode};
///
/// let roots = vec![RouteNode::new("/").with_flatten(true).with_children(vec![
///     RouteNode::new("home")
///         .with_children(vec![RouteNode::new("analysis").with_title("Analysis")]),
/// ])];
///
/// let menu = project(&roots);
/// assert_eq!(menu.items.len(), 1);
/// assert_eq!(menu.items[0].key, "/home");
/// assert_eq!(menu.items[0].children[0].name.as_deref(), Some("Analysis"));
/// ```
pub fn project(roots: &[RouteNode]) -> MenuSet {
    let mut set = MenuSet::default();
    let items = project_level(roots, &ChainContext::root(), &mut set);
    set.items = items.into_iter().map(|(_, record)| record).collect();
    set
}

/// Projects one sibling list, returning `(order, record)` pairs so hoisted
/// entries can compete in their new sibling list by their own order.
fn project_level(
    nodes: &[RouteNode],
    parent_ctx: &ChainContext,
    set: &mut MenuSet,
) -> Vec<(Option<i32>, MenuRecord)> {
    let mut level: Vec<(Option<i32>, MenuRecord)> = Vec::new();

    for node in nodes {
        // Redirect nodes never produce a menu record.
        if node.is_redirect() {
            continue;
        }

        let ctx = parent_ctx.child(&node.path);
        let children = project_level(&node.children, &ctx, set);

        if node.flatten {
            // Hoist: the node contributes no entry of its own; its
            // children splice into the current level. The node's record
            // still anchors every hoisted key in `all` so routing lookups
            // can find the structural ancestor.
            let anchor = record_for(node, &ctx, Vec::new());
            set.all.insert(anchor.key.clone(), anchor.clone());
            for (_, child) in &children {
                trace!(key = %child.key, anchor = %anchor.key, "hoisted menu entry");
                set.all.insert(child.key.clone(), anchor.clone());
            }
            level.extend(children);
            continue;
        }

        let record = record_for(node, &ctx, children.into_iter().map(|(_, r)| r).collect());
        set.all.insert(record.key.clone(), record.clone());

        if node.meta.hide_in_menu {
            continue;
        }

        set.visible.insert(record.key.clone(), record.clone());
        level.push((node.meta.order, record));
    }

    // Stable: unordered entries keep declaration order after all ordered ones.
    level.sort_by_key(|(order, _)| (order.is_none(), *order));
    level
}

fn record_for(node: &RouteNode, ctx: &ChainContext, children: Vec<MenuRecord>) -> MenuRecord {
    MenuRecord {
        key: ctx.pathname.clone(),
        path: ctx.pathname.clone(),
        name: node.meta.title.clone(),
        icon: node.meta.icon.clone(),
        badge: node.meta.badge.clone(),
        badge_variant: node.meta.badge_variant.clone(),
        children,
        parents: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RouteNode;

    #[test]
    fn test_redirect_nodes_skipped() {
        let roots = vec![
            RouteNode::new("old").with_redirect("/new"),
            RouteNode::new("new").with_title("New"),
        ];

        let menu = project(&roots);
        assert_eq!(menu.items.len(), 1);
        assert!(!menu.all.contains_key("/old"));
    }

    #[test]
    fn test_flatten_hoists_children() {
        let roots = vec![RouteNode::new("group").with_flatten(true).with_children(vec![
            RouteNode::new("a").with_title("A"),
            RouteNode::new("b").with_title("B"),
        ])];

        let menu = project(&roots);
        let keys: Vec<&str> = menu.items.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["/group/a", "/group/b"]);
        // Hoisted keys resolve to the structural ancestor in `all`.
        assert_eq!(menu.all.get("/group/a").unwrap().key, "/group");
        // The children's own records stay reachable through `visible`.
        assert_eq!(menu.visible.get("/group/a").unwrap().key, "/group/a");
    }

    #[test]
    fn test_hidden_in_all_not_visible() {
        let roots = vec![
            RouteNode::new("users").with_children(vec![
                RouteNode::new(":id").with_hidden(true).with_title("Detail"),
            ]),
        ];

        let menu = project(&roots);
        assert!(menu.all.contains_key("/users/:id"));
        assert!(!menu.visible.contains_key("/users/:id"));
        assert!(menu.items[0].children.is_empty());
    }

    #[test]
    fn test_hidden_subtree_still_walked() {
        let roots = vec![RouteNode::new("hidden").with_hidden(true).with_children(vec![
            RouteNode::new("child").with_title("Child"),
        ])];

        let menu = project(&roots);
        assert!(menu.items.is_empty());
        assert!(menu.all.contains_key("/hidden/child"));
        assert!(menu.visible.contains_key("/hidden/child"));
    }

    #[test]
    fn test_order_sorting_stable() {
        let roots = vec![RouteNode::new("/").with_children(vec![
            RouteNode::new("c"),
            RouteNode::new("b").with_order(2),
            RouteNode::new("a").with_order(1),
            RouteNode::new("d"),
        ])];

        let menu = project(&roots);
        let keys: Vec<&str> = menu.items[0]
            .children
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(keys, vec!["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_hoisted_entries_sorted_into_new_siblings() {
        let roots = vec![RouteNode::new("/").with_children(vec![
            RouteNode::new("group").with_flatten(true).with_children(vec![
                RouteNode::new("x").with_order(3),
            ]),
            RouteNode::new("y").with_order(1),
        ])];

        let menu = project(&roots);
        let keys: Vec<&str> = menu.items[0]
            .children
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(keys, vec!["/y", "/group/x"]);
    }
}
