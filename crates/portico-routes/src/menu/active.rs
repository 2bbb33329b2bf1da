//! Active-chain resolution.
//!
//! Given the built menu tree and the current URL, finds the matching record
//! and its top-level ancestor; breadcrumbs and "which first-level tab is
//! active" both read this. The `parents` chain is computed by splitting the
//! record's own path into cumulative prefixes, *not* by walking routing
//! back-references: under flatten hoisting the menu path and the routing
//! path diverge, and highlighting follows the menu.

use crate::menu::MenuRecord;
use crate::path::PathPrefixes;

/// Result of resolving a URL against the top-level menu list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootMenuMatch {
    /// The matching record, `parents` populated.
    pub menu: Option<MenuRecord>,
    /// The first-level record the match sits under.
    pub root: Option<MenuRecord>,
    /// The first-level record's path.
    pub root_path: Option<String>,
}

/// Depth-first search for the record whose path equals `target`.
///
/// The hit is returned with `parents` filled in as the cumulative prefix
/// chain of its own path.
///
/// # Examples
///
/// ```
/// use portico_routes::{find_menu_by_path, MenuRecord};
///
/// let menus = vec![MenuRecord {
///     key: "/home".into(),
///     path: "/home".into(),
///     children: vec![MenuRecord {
///         key: "/home/analysis".into(),
///         path: "/home/analysis".into(),
///         ..MenuRecord::default()
///     }],
///     ..MenuRecord::default()
/// }];
///
/// let hit = find_menu_by_path(&menus, "/home/analysis").unwrap();
/// assert_eq!(hit.parents, vec!["/home", "/home/analysis"]);
/// ```
pub fn find_menu_by_path(menus: &[MenuRecord], target: &str) -> Option<MenuRecord> {
    find_record(menus, target).map(|record| {
        let mut hit = record.clone();
        hit.parents = PathPrefixes::new(&hit.path).map(str::to_string).collect();
        hit
    })
}

fn find_record<'a>(menus: &'a [MenuRecord], target: &str) -> Option<&'a MenuRecord> {
    menus.iter().find_map(|menu| {
        if menu.path == target {
            Some(menu)
        } else {
            find_record(&menu.children, target)
        }
    })
}

/// Finds the record for `path` and resolves which first-level sibling it
/// sits under, via `parents[level]`.
///
/// A URL several levels deep still highlights its first-level tab: the
/// match's prefix chain is cut at `level` and resolved against the
/// top-level sibling list.
pub fn find_root_menu_by_path(menus: &[MenuRecord], path: &str, level: usize) -> RootMenuMatch {
    let menu = find_menu_by_path(menus, path);
    let root_path = menu
        .as_ref()
        .and_then(|m| m.parents.get(level))
        .cloned();
    let root = root_path
        .as_ref()
        .and_then(|rp| menus.iter().find(|m| &m.path == rp))
        .cloned();

    RootMenuMatch {
        menu,
        root,
        root_path,
    }
}

/// Strips a hidden detail page's path back to its listing parent.
///
/// When `hidden` is set, the path is cut at its last `:param`-bearing
/// segment (inclusive), so `/users/:id` highlights `/users`. Without a
/// dynamic segment, or when `hidden` is false, the path is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use portico_routes::strip_dynamic_tail;
///
/// assert_eq!(strip_dynamic_tail("/users/:id", true), "/users");
/// assert_eq!(strip_dynamic_tail("/users/:id", false), "/users/:id");
/// ```
pub fn strip_dynamic_tail(path: &str, hidden: bool) -> String {
    if !hidden {
        return path.to_string();
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.iter().rposition(|s| s.contains(':')) {
        Some(last_dynamic) => {
            let kept = &segments[..last_dynamic];
            if kept.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", kept.join("/"))
            }
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, children: Vec<MenuRecord>) -> MenuRecord {
        MenuRecord {
            key: path.to_string(),
            path: path.to_string(),
            children,
            ..MenuRecord::default()
        }
    }

    fn sample_menus() -> Vec<MenuRecord> {
        vec![
            record("/home", vec![record("/home/analysis", vec![])]),
            record(
                "/system",
                vec![record("/system/account", vec![record("/system/account/roles", vec![])])],
            ),
        ]
    }

    #[test]
    fn test_find_menu_fills_parents() {
        let hit = find_menu_by_path(&sample_menus(), "/system/account/roles").unwrap();
        assert_eq!(
            hit.parents,
            vec!["/system", "/system/account", "/system/account/roles"]
        );
    }

    #[test]
    fn test_find_menu_miss() {
        assert!(find_menu_by_path(&sample_menus(), "/nope").is_none());
    }

    #[test]
    fn test_find_root_menu() {
        let m = find_root_menu_by_path(&sample_menus(), "/system/account/roles", 0);
        assert_eq!(m.root_path.as_deref(), Some("/system"));
        assert_eq!(m.root.unwrap().path, "/system");
        assert_eq!(m.menu.unwrap().path, "/system/account/roles");
    }

    #[test]
    fn test_find_root_menu_level() {
        let m = find_root_menu_by_path(&sample_menus(), "/system/account/roles", 1);
        assert_eq!(m.root_path.as_deref(), Some("/system/account"));
        // Not a first-level sibling, so no root record resolves.
        assert!(m.root.is_none());
    }

    #[test]
    fn test_strip_dynamic_tail_middle_param() {
        assert_eq!(strip_dynamic_tail("/orgs/:org/users/:id", true), "/orgs/:org/users");
        assert_eq!(strip_dynamic_tail("/:id", true), "/");
    }

    #[test]
    fn test_strip_dynamic_tail_static_path() {
        assert_eq!(strip_dynamic_tail("/users", true), "/users");
    }
}
