//! Route-tree flattening.
//!
//! One depth-first, pre-order walk turns the configuration tree into a
//! pathname-addressable [`RouteTable`]. Nodes live in a flat vector and all
//! links between them are indices, so parent back-references are non-owning
//! and the table is free of reference cycles.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::node::{PageComponent, RouteMeta, RouteNode};
use crate::path::ChainContext;

/// A route node enriched with its resolved position in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    /// Raw path segment as authored.
    pub path: String,
    /// Absolute pathname; unique key into the table (last writer wins).
    pub pathname: String,
    /// Raw path segments from the root to this node, inclusive.
    pub path_chain: Vec<String>,
    /// Cumulative absolute pathnames from the root to this node, inclusive.
    /// Breadcrumb trails read this chain.
    pub pathname_chain: Vec<String>,
    /// Index of the parent in the owning table, if any.
    pub parent: Option<usize>,
    /// Indices of the children in the owning table.
    pub children: Vec<usize>,
    pub component: Option<PageComponent>,
    pub redirect: Option<String>,
    pub meta: RouteMeta,
}

/// Flattened, pathname-addressable routing table.
///
/// Node ordering is the pre-order visit sequence of the input forest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    nodes: Vec<ResolvedRoute>,
    by_pathname: HashMap<String, usize>,
    roots: Vec<usize>,
}

impl RouteTable {
    /// Looks a route up by its absolute pathname.
    pub fn get(&self, pathname: &str) -> Option<&ResolvedRoute> {
        self.by_pathname
            .get(pathname)
            .and_then(|&idx| self.nodes.get(idx))
    }

    /// Whether a pathname is registered.
    pub fn contains(&self, pathname: &str) -> bool {
        self.by_pathname.contains_key(pathname)
    }

    /// Resolves a route's parent back-reference.
    pub fn parent_of(&self, route: &ResolvedRoute) -> Option<&ResolvedRoute> {
        route.parent.and_then(|idx| self.nodes.get(idx))
    }

    /// All nodes in pre-order visit sequence.
    pub fn nodes(&self) -> &[ResolvedRoute] {
        &self.nodes
    }

    /// The top-level routes of the forest.
    pub fn roots(&self) -> impl Iterator<Item = &ResolvedRoute> {
        self.roots.iter().filter_map(|&idx| self.nodes.get(idx))
    }

    /// Number of visited nodes (not distinct pathnames).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct registered pathnames.
    pub fn pathname_count(&self) -> usize {
        self.by_pathname.len()
    }
}

/// Flattens a configuration forest into a [`RouteTable`].
///
/// Children are registered before their parent, so an entry registered at a
/// pathname is visible to lookups performed while later siblings and
/// ancestors register. Duplicate pathnames shallow-merge (see
/// [`RouteTable`] docs on last-writer-wins); recursion depth is bounded
/// only by the host call stack, a self-referential config is a caller
/// error.
///
/// The input is never mutated; the table allocates its own nodes.
///
/// # Examples
///
/// ```
/// use portico_routes::{flatten, RouteNode};
///
/// let roots = vec![RouteNode::new("/").with_children(vec![
///     RouteNode::new("home").with_children(vec![RouteNode::new("analysis")]),
/// ])];
///
/// let table = flatten(&roots);
/// let analysis = table.get("/home/analysis").unwrap();
/// assert_eq!(analysis.pathname_chain, vec!["/", "/home", "/home/analysis"]);
/// assert_eq!(table.parent_of(analysis).unwrap().pathname, "/home");
/// ```
pub fn flatten(roots: &[RouteNode]) -> RouteTable {
    let mut table = RouteTable::default();
    let root_ctx = ChainContext::root();
    for node in roots {
        let idx = visit(node, &root_ctx, None, &mut table);
        table.roots.push(idx);
    }
    table
}

fn visit(
    node: &RouteNode,
    parent_ctx: &ChainContext,
    parent: Option<usize>,
    table: &mut RouteTable,
) -> usize {
    let ctx = parent_ctx.child(&node.path);

    let idx = table.nodes.len();
    table.nodes.push(ResolvedRoute {
        path: node.path.clone(),
        pathname: ctx.pathname.clone(),
        path_chain: ctx.path_chain.clone(),
        pathname_chain: ctx.pathname_chain.clone(),
        parent,
        children: Vec::new(),
        component: node.component.clone(),
        redirect: node.redirect.clone(),
        meta: node.meta.clone(),
    });

    let children: Vec<usize> = node
        .children
        .iter()
        .map(|child| visit(child, &ctx, Some(idx), table))
        .collect();
    table.nodes[idx].children = children;

    register(table, idx);
    idx
}

/// Registers a node's pathname, shallow-merging with any existing entry.
///
/// Last writer's fields win; fields the new node leaves unset are pulled
/// from the previous entry. Children are never merged; the new node's
/// structure replaces the old one's wholesale.
fn register(table: &mut RouteTable, idx: usize) {
    let pathname = table.nodes[idx].pathname.clone();

    if let Some(&old_idx) = table.by_pathname.get(&pathname) {
        let old = table.nodes[old_idx].clone();

        // Synthetic index children (empty path, redirect) share the parent
        // pathname on purpose; anything else is an authoring anomaly.
        if old.path.is_empty() && old.redirect.is_some() {
            trace!(%pathname, "index redirect folded into parent entry");
        } else {
            warn!(%pathname, "duplicate pathname, keeping last registration");
        }

        let node = &mut table.nodes[idx];
        node.component = node.component.take().or(old.component);
        node.redirect = node.redirect.take().or(old.redirect);
        node.meta.title = node.meta.title.take().or(old.meta.title);
        node.meta.icon = node.meta.icon.take().or(old.meta.icon);
        node.meta.order = node.meta.order.take().or(old.meta.order);
        node.meta.badge = node.meta.badge.take().or(old.meta.badge);
        node.meta.badge_variant = node.meta.badge_variant.take().or(old.meta.badge_variant);
        node.meta.permission = node.meta.permission.take().or(old.meta.permission);
    }

    table.by_pathname.insert(pathname, idx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RouteNode;

    #[test]
    fn test_parent_back_reference() {
        let roots = vec![RouteNode::new("/")
            .with_children(vec![RouteNode::new("users").with_children(vec![
                RouteNode::new(":id").with_hidden(true),
            ])])];

        let table = flatten(&roots);
        let detail = table.get("/users/:id").unwrap();
        let parent = table.parent_of(detail).unwrap();
        assert_eq!(parent.pathname, "/users");
        assert_eq!(table.parent_of(table.get("/").unwrap()), None);
    }

    #[test]
    fn test_prefix_invariant() {
        let roots = vec![RouteNode::new("/").with_children(vec![RouteNode::new("home")
            .with_children(vec![
                RouteNode::new("analysis"),
                RouteNode::new("workbench"),
            ])])];

        let table = flatten(&roots);
        for route in table.nodes() {
            if let Some(parent) = table.parent_of(route) {
                if parent.pathname != "/" {
                    assert!(route.pathname.starts_with(&parent.pathname));
                }
            }
        }
    }

    #[test]
    fn test_duplicate_pathname_last_writer_wins() {
        let roots = vec![
            RouteNode::new("settings").with_title("First"),
            RouteNode::new("settings").with_redirect("/home"),
        ];

        let table = flatten(&roots);
        let entry = table.get("/settings").unwrap();
        // Second registration wins, but its unset title is pulled from the
        // first: a shallow merge, not a replacement.
        assert_eq!(entry.redirect.as_deref(), Some("/home"));
        assert_eq!(entry.meta.title.as_deref(), Some("First"));
        assert_eq!(table.pathname_count(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_index_redirect_folds_into_parent() {
        // After default-path expansion the synthetic child shares the
        // parent pathname; the parent entry ends up carrying the redirect.
        let mut home = RouteNode::new("home")
            .with_default_path("analysis")
            .with_children(vec![RouteNode::new("analysis")]);
        crate::expand::expand_defaults(&mut home);

        let table = flatten(&[home]);
        assert_eq!(
            table.get("/home").unwrap().redirect.as_deref(),
            Some("analysis")
        );
    }

    #[test]
    fn test_children_not_merged() {
        let roots = vec![
            RouteNode::new("docs").with_children(vec![RouteNode::new("intro")]),
            RouteNode::new("docs").with_children(vec![RouteNode::new("guide")]),
        ];

        let table = flatten(&roots);
        let entry = table.get("/docs").unwrap();
        assert_eq!(entry.children.len(), 1);
        assert_eq!(table.nodes()[entry.children[0]].pathname, "/docs/guide");
    }
}
