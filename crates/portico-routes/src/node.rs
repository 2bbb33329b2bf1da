//! Authored route configuration model.
//!
//! A [`RouteNode`] tree is written by hand (or fetched from a backend in
//! backend access mode) and treated as immutable input for the lifetime of
//! one assembly. Both sources share this shape, so the whole model is
//! serde-derived and backend payloads decode straight into it.

use serde::{Deserialize, Serialize};

/// Opaque handle to a page or layout component.
///
/// The engine carries this value through the tree but never resolves it to
/// anything renderable; the single "resolve to renderable" operation lives
/// with the component registry outside the engine. Backend-supplied keys
/// that the registry does not know are swapped for [`PageComponent::Forbidden`]
/// so the route stays navigable and renders a 403 instead of breaking
/// route resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum PageComponent {
    /// Registry key of a lazily loaded page module.
    Page(String),
    /// Registry key of a layout shell.
    Layout(String),
    /// Substitute for backend keys absent from the registry; renders 403.
    Forbidden,
    /// The catch-all 404 page.
    NotFound,
}

/// Presentation and access metadata attached to a route node.
///
/// `order` drives sibling sorting in the projected menu; nodes without an
/// explicit order sort after all ordered siblings. `permission` lists the
/// codes a caller must all hold for the node to survive frontend access
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMeta {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub badge: Option<String>,
    pub badge_variant: Option<String>,
    /// Routable but excluded from rendered menus.
    pub hide_in_menu: bool,
    /// Permission codes required to keep this node in frontend mode.
    pub permission: Option<Vec<String>>,
}

/// One node of the declaratively nested route/menu configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteNode {
    /// Relative path segment; the root may be `"/"`.
    pub path: String,
    pub component: Option<PageComponent>,
    /// Marks the node non-renderable; visiting it lands on the target.
    pub redirect: Option<String>,
    /// Hoist this node's menu entries to the parent's menu level while
    /// keeping the node as a routing layer.
    pub flatten: bool,
    /// Child path an implicit index redirect should point at.
    pub default_path: Option<String>,
    pub meta: RouteMeta,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Creates a node with the given relative path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_routes::RouteNode;
    ///
    /// let node = RouteNode::new("dashboard");
    /// assert_eq!(node.path, "dashboard");
    /// assert!(node.children.is_empty());
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Sets the component handle.
    pub fn with_component(mut self, component: PageComponent) -> Self {
        self.component = Some(component);
        self
    }

    /// Marks the node as a redirect to `target`.
    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Replaces the ordered child list.
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Declares the child path an implicit index redirect should target.
    pub fn with_default_path(mut self, target: impl Into<String>) -> Self {
        self.default_path = Some(target.into());
        self
    }

    /// Toggles menu hoisting for this node.
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Replaces the metadata block.
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Sets the menu title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Sets the sibling sort order.
    pub fn with_order(mut self, order: i32) -> Self {
        self.meta.order = Some(order);
        self
    }

    /// Requires the given permission codes in frontend access mode.
    pub fn with_permission<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.permission = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Excludes the node from rendered menus while keeping it routable.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.meta.hide_in_menu = hidden;
        self
    }

    /// Whether this node is a non-renderable redirect.
    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }
}
