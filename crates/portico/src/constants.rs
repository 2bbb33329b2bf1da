// File: src/constants.rs
// Purpose: constant/fallback routes merged in before the main tree

use once_cell::sync::Lazy;
use portico_routes::{PageComponent, RouteNode};

/// Login, 403, 404 and the trailing catch-all.
///
/// All hidden: fallback pages are routable but never surface in menus.
/// The assembler merges these in verbatim before the selected main tree.
static CONSTANT_ROUTES: Lazy<Vec<RouteNode>> = Lazy::new(|| {
    vec![
        RouteNode::new("login")
            .with_component(PageComponent::Page("login".into()))
            .with_title("Login")
            .with_hidden(true),
        RouteNode::new("403")
            .with_component(PageComponent::Forbidden)
            .with_title("Forbidden")
            .with_hidden(true),
        RouteNode::new("404")
            .with_component(PageComponent::NotFound)
            .with_title("Not Found")
            .with_hidden(true),
        RouteNode::new("*path")
            .with_component(PageComponent::NotFound)
            .with_hidden(true),
    ]
});

/// A fresh copy of the constant route set for one assembly.
pub fn constant_routes() -> Vec<RouteNode> {
    CONSTANT_ROUTES.clone()
}
