//! Access-route assembly.
//!
//! The top-level orchestrator: merge constant routes, select the frontend
//! or backend source, expand default paths, filter/resolve access, then run
//! the flattener and the projector. Each call returns a fresh
//! [`RouteRegistry`], so re-assembly on a permission change or a mode
//! switch is an explicit operation, never a mutation of process-wide state.

use std::collections::HashSet;
use std::future::Future;

use anyhow::{Context, Result};
use tracing::debug;

use crate::access::{filter_by_permission, resolve_components, ComponentTable};
use crate::expand::expand_tree_defaults;
use crate::flatten::{flatten, RouteTable};
use crate::menu::{project, MenuSet};
use crate::node::RouteNode;

/// Everything one assembly produces.
///
/// Owned by the caller and passed explicitly to consumers (router
/// integration, menu widgets); superseding it is the caller's last-write
/// concern.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    /// The accessible route forest, constants merged and defaults expanded.
    pub routes: Vec<RouteNode>,
    /// Flattened, pathname-addressable routing table.
    pub table: RouteTable,
    /// Projected menu tree and lookup maps.
    pub menu: MenuSet,
}

/// Assembles in frontend access mode: the static tree is filtered by the
/// caller's granted permission codes.
///
/// Synchronous and total: configuration anomalies degrade per the
/// flattener/projector rules instead of erroring.
///
/// # Examples
///
/// ```
/// use portico_routes::{assemble_frontend, RouteNode};
/// use std::collections::HashSet;
///
/// let roots = vec![RouteNode::new("/").with_flatten(true).with_children(vec![
///     RouteNode::new("home")
///         .with_default_path("analysis")
///         .with_children(vec![
///             RouteNode::new("analysis").with_title("Analysis"),
///             RouteNode::new("workbench").with_title("Workbench"),
///         ]),
/// ])];
///
/// let registry = assemble_frontend(&roots, &[], &HashSet::new());
/// assert!(registry.table.contains("/home/analysis"));
/// assert_eq!(registry.menu.items[0].key, "/home");
/// ```
pub fn assemble_frontend(
    main_routes: &[RouteNode],
    constant_routes: &[RouteNode],
    granted: &HashSet<String>,
) -> RouteRegistry {
    let mut merged = merge(constant_routes, main_routes.to_vec());
    expand_tree_defaults(&mut merged);
    let accessible = filter_by_permission(&merged, granted);
    debug!(
        total = merged.len(),
        accessible = accessible.len(),
        "assembled frontend routes"
    );
    finish(accessible)
}

/// Assembles in backend access mode: the server-filtered descriptor list is
/// fetched once, its component keys resolved against the registry, then the
/// synchronous pipeline runs.
///
/// The fetch is the only error that propagates; no retry, no deduplication
/// of concurrent assemblies. A stale result is the caller's to discard.
pub async fn assemble_backend<F, Fut>(
    fetch: F,
    constant_routes: &[RouteNode],
    table: &dyn ComponentTable,
) -> Result<RouteRegistry>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<RouteNode>>>,
{
    let fetched = fetch().await.context("backend menu fetch failed")?;

    let mut merged = merge(constant_routes, fetched);
    expand_tree_defaults(&mut merged);
    let resolved = resolve_components(merged, table);
    debug!(routes = resolved.len(), "assembled backend routes");
    Ok(finish(resolved))
}

/// Constant routes are merged in before the main tree, verbatim.
fn merge(constant_routes: &[RouteNode], main_routes: Vec<RouteNode>) -> Vec<RouteNode> {
    let mut merged = constant_routes.to_vec();
    merged.extend(main_routes);
    merged
}

fn finish(routes: Vec<RouteNode>) -> RouteRegistry {
    let table = flatten(&routes);
    let menu = project(&routes);
    RouteRegistry {
        routes,
        table,
        menu,
    }
}
