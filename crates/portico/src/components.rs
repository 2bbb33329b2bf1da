// File: src/components.rs
// Purpose: page/layout component registry backing backend-mode key resolution

use std::collections::HashMap;

use once_cell::sync::Lazy;
use portico_routes::{ComponentTable, PageComponent};
use tracing::warn;

/// Opaque zero-argument loader handle.
///
/// Stands in for whatever lazy-loading mechanism the host application uses
/// (dynamic import, bundle registry). The navigation engine never invokes
/// it; consumers resolve it to a renderable at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    module: String,
}

impl Loader {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// The module specifier the host loads lazily.
    pub fn module(&self) -> &str {
        &self.module
    }
}

static FORBIDDEN_LOADER: Lazy<Loader> = Lazy::new(|| Loader::new("views/fallback/forbidden"));
static NOT_FOUND_LOADER: Lazy<Loader> = Lazy::new(|| Loader::new("views/fallback/not-found"));

/// String-keyed page and layout loader tables.
///
/// Backend-supplied route descriptors name their components by key; the
/// assembler checks keys against this registry and consumers resolve them
/// through it. An unknown key resolves to the forbidden-page loader so the
/// route stays navigable.
///
/// # Examples
///
/// ```
/// use portico::{ComponentRegistry, Loader, PageComponent};
///
/// let registry = ComponentRegistry::new()
///     .with_page("analysis", Loader::new("views/home/analysis"))
///     .with_layout("default", Loader::new("layouts/default"));
///
/// let loader = registry.resolve(&PageComponent::Page("analysis".into()));
/// assert_eq!(loader.module(), "views/home/analysis");
///
/// let missing = registry.resolve(&PageComponent::Page("reports".into()));
/// assert_eq!(missing.module(), "views/fallback/forbidden");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    pages: HashMap<String, Loader>,
    layouts: HashMap<String, Loader>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page loader under `key`.
    pub fn with_page(mut self, key: impl Into<String>, loader: Loader) -> Self {
        self.pages.insert(key.into(), loader);
        self
    }

    /// Registers a layout loader under `key`.
    pub fn with_layout(mut self, key: impl Into<String>, loader: Loader) -> Self {
        self.layouts.insert(key.into(), loader);
        self
    }

    /// Resolves a component handle to its loader.
    ///
    /// The single "resolve to renderable" operation of the opaque handle:
    /// unknown keys fall back to the forbidden-page loader, `NotFound`
    /// resolves to the 404 loader.
    pub fn resolve(&self, component: &PageComponent) -> &Loader {
        match component {
            PageComponent::Page(key) => self.pages.get(key).unwrap_or_else(|| {
                warn!(%key, "no page loader registered, falling back to forbidden page");
                &FORBIDDEN_LOADER
            }),
            PageComponent::Layout(key) => self.layouts.get(key).unwrap_or_else(|| {
                warn!(%key, "no layout loader registered, falling back to forbidden page");
                &FORBIDDEN_LOADER
            }),
            PageComponent::Forbidden => &FORBIDDEN_LOADER,
            PageComponent::NotFound => &NOT_FOUND_LOADER,
        }
    }
}

impl ComponentTable for ComponentRegistry {
    fn has_page(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    fn has_layout(&self, key: &str) -> bool {
        self.layouts.contains_key(key)
    }
}
