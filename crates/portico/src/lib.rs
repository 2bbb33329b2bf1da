// Portico - admin shell navigation core
// Route-tree resolution, access-controlled menus, component registry.

pub mod backend;
pub mod components;
pub mod config;
pub mod constants;

pub use backend::decode_routes;
pub use components::{ComponentRegistry, Loader};
pub use config::{AccessConfig, Config, MenuConfig};
pub use constants::constant_routes;

// Re-export the engine crate and its core types.
pub use portico_routes as routes;
pub use portico_routes::{
    assemble_backend, assemble_frontend, expand_defaults, filter_by_permission,
    find_menu_by_path, find_root_menu_by_path, flatten, project, resolve_components,
    strip_dynamic_tail, AccessMode, ComponentTable, MenuRecord, MenuSet, PageComponent,
    ResolvedRoute, RootMenuMatch, RouteMeta, RouteNode, RouteRegistry, RouteTable,
};
