//! Route table module
//!
//! Paths are normalized before lookup, then matched by exact string
//! comparison only. There is no pattern matching and no method-based
//! dispatch; any path missing from the table resolves to the not-found
//! route.

use std::collections::HashMap;

/// Registered route variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Echo endpoint returning query and body as JSON
    Hello,
    /// Fallback for every unregistered path
    NotFound,
}

/// Immutable path-to-route mapping, built once at startup
pub struct RouteTable {
    routes: HashMap<String, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        let mut routes = HashMap::new();
        routes.insert("hello".to_string(), Route::Hello);
        Self { routes }
    }

    /// Resolve a normalized path to its route, falling back to `NotFound`
    pub fn resolve(&self, path: &str) -> Route {
        self.routes.get(path).copied().unwrap_or(Route::NotFound)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip all leading and trailing slashes from a request path.
///
/// `/hello/` and `//hello` both normalize to `hello`; `/` normalizes to
/// the empty string, which is not a registered route. Inner slashes are
/// preserved, so `/a/b` stays `a/b`.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_all_edge_slashes() {
        assert_eq!(normalize_path("/hello"), "hello");
        assert_eq!(normalize_path("hello"), "hello");
        assert_eq!(normalize_path("/hello/"), "hello");
        assert_eq!(normalize_path("//hello//"), "hello");
        assert_eq!(normalize_path("///hello"), "hello");
    }

    #[test]
    fn test_normalize_preserves_inner_slashes() {
        assert_eq!(normalize_path("/a/b/"), "a/b");
        assert_eq!(normalize_path("//hello/world//"), "hello/world");
    }

    #[test]
    fn test_normalize_root_is_empty() {
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("//"), "");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("hello"), Route::Hello);
        assert_eq!(table.resolve("hello/world"), Route::NotFound);
        assert_eq!(table.resolve("hell"), Route::NotFound);
        assert_eq!(table.resolve("Hello"), Route::NotFound);
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("unknown"), Route::NotFound);
        assert_eq!(table.resolve(""), Route::NotFound);
    }

    #[test]
    fn test_slash_variants_route_identically() {
        let table = RouteTable::new();
        for raw in ["/hello", "hello", "//hello//", "/hello/"] {
            assert_eq!(table.resolve(normalize_path(raw)), Route::Hello);
        }
    }
}
