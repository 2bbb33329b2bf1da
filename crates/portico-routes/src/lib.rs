//! # Portico Routes
//!
//! Route-tree resolution and access-controlled menu generation for the
//! Portico admin shell. A declaratively nested [`RouteNode`] configuration
//! is turned into:
//!
//! - a flattened, pathname-addressable [`RouteTable`] for the SPA router,
//! - a permission-filtered [`MenuSet`] for sidebar/tab navigation,
//! - ancestor-chain data for breadcrumbs and top-level tab highlighting,
//! - synthetic redirect nodes for pages that declare a default child.
//!
//! The whole transformation is pure, synchronous and idempotent: it never
//! mutates its input, allocates fresh maps per call, and is safe to rerun
//! wholesale whenever the access mode or the granted permission set
//! changes. The only asynchronous boundary is the backend menu fetch in
//! [`assemble_backend`], awaited once per assembly.
//!
//! ## Example
//!
//! ```
//! use portico_routes::{assemble_frontend, RouteNode};
//! use std::collections::HashSet;
//!
//! let home = RouteNode::new("home")
//!     .with_default_path("analysis")
//!     .with_children(vec![
//!         RouteNode::new("analysis").with_title("Analysis"),
//!         RouteNode::new("workbench").with_title("Workbench"),
//!     ]);
//! let roots = vec![RouteNode::new("/").with_flatten(true).with_children(vec![home])];
//!
//! let registry = assemble_frontend(&roots, &[], &HashSet::new());
//!
//! // Routing table: physical nesting, breadcrumb chains attached.
//! let analysis = registry.table.get("/home/analysis").unwrap();
//! assert_eq!(analysis.pathname_chain, vec!["/", "/home", "/home/analysis"]);
//!
//! // Menu tree: the flatten root contributes no entry of its own.
//! assert_eq!(registry.menu.items[0].key, "/home");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod access;
pub mod assemble;
pub mod expand;
pub mod flatten;
pub mod menu;
pub mod node;
pub mod path;

// Re-export the public surface at the crate root.
pub use access::{filter_by_permission, resolve_components, AccessMode, ComponentTable};
pub use assemble::{assemble_backend, assemble_frontend, RouteRegistry};
pub use expand::{expand_defaults, expand_tree_defaults};
pub use flatten::{flatten, ResolvedRoute, RouteTable};
pub use menu::active::{
    find_menu_by_path, find_root_menu_by_path, strip_dynamic_tail, RootMenuMatch,
};
pub use menu::{project, MenuRecord, MenuSet};
pub use node::{PageComponent, RouteMeta, RouteNode};
pub use path::{is_canonical_pathname, normalize_pathname, ChainContext, PathPrefixes};
