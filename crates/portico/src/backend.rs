// File: src/backend.rs
// Purpose: decoding the backend menu source payload

use anyhow::{Context, Result};
use portico_routes::RouteNode;

/// Decodes a backend menu payload into route descriptors.
///
/// The server returns an ordered list structurally identical to the
/// authored configuration, with string component keys in place of loader
/// references. A decode failure surfaces through the same error path as
/// the fetch itself; it is the one asynchronous boundary that may fail.
///
/// # Examples
///
/// ```
/// use portico::backend::decode_routes;
///
/// let routes = decode_routes(
///     r#"[{"path": "home", "meta": {"title": "Home"}}]"#,
/// ).unwrap();
/// assert_eq!(routes[0].path, "home");
/// ```
pub fn decode_routes(payload: &str) -> Result<Vec<RouteNode>> {
    serde_json::from_str(payload).context("failed to decode backend menu payload")
}
