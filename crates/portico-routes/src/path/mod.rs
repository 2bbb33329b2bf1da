//! Pathname utilities and the per-node chain resolver.
//!
//! All functions here are **pure**: given the same input they always produce
//! the same output with no side effects. Malformed path strings (missing
//! leading slash, duplicate or trailing slashes) are normalized defensively
//! rather than rejected.

use std::borrow::Cow;

pub mod prefixes;
pub use prefixes::PathPrefixes;

/// Validates that a pathname is in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use portico_routes::path::is_canonical_pathname;
///
/// assert!(is_canonical_pathname("/"));
/// assert!(is_canonical_pathname("/home/analysis"));
///
/// assert!(!is_canonical_pathname(""));
/// assert!(!is_canonical_pathname("home")); // Missing leading /
/// assert!(!is_canonical_pathname("/home/")); // Trailing /
/// assert!(!is_canonical_pathname("/home//analysis")); // Double //
/// ```
pub fn is_canonical_pathname(pathname: &str) -> bool {
    if pathname.is_empty() || !pathname.starts_with('/') {
        return false;
    }
    if pathname.contains("//") {
        return false;
    }
    if pathname == "/" {
        return true;
    }
    !pathname.ends_with('/')
}

/// Normalizes a pathname to canonical form.
///
/// Zero-copy on the fast path: already-canonical input is returned as
/// `Cow::Borrowed` without allocating. Otherwise empty segments are
/// collapsed, the leading slash is ensured and the trailing slash stripped.
/// The empty string collapses to `/`, which is only ever returned for the
/// true root.
///
/// # Examples
///
/// ```
/// use portico_routes::path::normalize_pathname;
/// use std::borrow::Cow;
///
/// let p = normalize_pathname("/home");
/// assert!(matches!(p, Cow::Borrowed("/home")));
///
/// assert_eq!(normalize_pathname("home"), "/home");
/// assert_eq!(normalize_pathname("/home/"), "/home");
/// assert_eq!(normalize_pathname("/home//analysis"), "/home/analysis");
/// assert_eq!(normalize_pathname(""), "/");
/// ```
pub fn normalize_pathname(pathname: &str) -> Cow<'_, str> {
    if is_canonical_pathname(pathname) {
        return Cow::Borrowed(pathname);
    }

    let joined = pathname
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

/// Accumulated path state for one node during tree resolution.
///
/// Carries the raw segment chain and the cumulative absolute pathname chain
/// from the root down to the node, plus the node's own resolved pathname.
/// The pathname chain is what breadcrumb trails read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainContext {
    /// Raw path segments from the root to this node, root `"/"` collapsed
    /// to the empty segment.
    pub path_chain: Vec<String>,
    /// Cumulative absolute pathnames from the root to this node.
    pub pathname_chain: Vec<String>,
    /// Absolute pathname of this node.
    pub pathname: String,
}

impl ChainContext {
    /// The empty context a top-level node resolves against.
    pub fn root() -> Self {
        Self::default()
    }

    /// Resolves a child context from this parent's chains.
    ///
    /// Total for any well-formed string: a raw path of `"/"` is collapsed
    /// to the empty segment before joining so root-layout routes do not
    /// inject a spurious separator into child paths, and the joined result
    /// is normalized ([`normalize_pathname`]) so a missing leading slash or
    /// duplicate separators cannot corrupt descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_routes::path::ChainContext;
    ///
    /// let root = ChainContext::root().child("/");
    /// assert_eq!(root.pathname, "/");
    ///
    /// let home = root.child("home");
    /// assert_eq!(home.pathname, "/home");
    ///
    /// let analysis = home.child("analysis");
    /// assert_eq!(analysis.pathname, "/home/analysis");
    /// assert_eq!(analysis.path_chain, vec!["", "home", "analysis"]);
    /// assert_eq!(analysis.pathname_chain, vec!["/", "/home", "/home/analysis"]);
    /// ```
    pub fn child(&self, raw_path: &str) -> ChainContext {
        let segment = if raw_path == "/" { "" } else { raw_path };

        let mut path_chain = self.path_chain.clone();
        path_chain.push(segment.to_string());

        let pathname = normalize_pathname(&path_chain.join("/")).into_owned();

        let mut pathname_chain = self.pathname_chain.clone();
        pathname_chain.push(pathname.clone());

        ChainContext {
            path_chain,
            pathname_chain,
            pathname,
        }
    }
}
