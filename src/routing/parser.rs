//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled matchers in precedence order
//! - Resolve a URL to the first matching route
//! - Keep diagnostics for route entries that failed to compile
//!
//! # Design Decisions
//! - Immutable after construction (shareable across threads without locks)
//! - O(n) scan in declaration order; first match wins
//! - One pattern evaluation per matcher tried, stopping at the first hit
//! - Entries that fail to compile are dropped, logged and kept as diagnostics
//! - No match is `None`, never an error

use crate::config::RouteConfig;
use crate::observability::metrics;
use crate::routing::matcher::RouteMatcher;
use crate::routing::normalize::route_path;
use crate::routing::pattern::{CompileError, CompileResult};
use crate::routing::route::Route;

/// Resolves URLs against an ordered set of route matchers.
#[derive(Debug)]
pub struct RouteParser {
    matchers: Vec<RouteMatcher>,
    compile_errors: Vec<CompileError>,
}

impl RouteParser {
    /// Build a parser from a route table.
    ///
    /// Entries whose pattern does not compile are dropped; the rest keep
    /// their relative order.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        Self::from_results(routes.iter().map(RouteMatcher::from_config))
    }

    /// Build a parser from already compiled matchers, in precedence order.
    pub fn from_matchers(matchers: Vec<RouteMatcher>) -> Self {
        Self::from_results(matchers.into_iter().map(Ok))
    }

    /// Build a parser from construction results, dropping failures.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = CompileResult<RouteMatcher>>,
    {
        let mut matchers = Vec::new();
        let mut compile_errors = Vec::new();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(matcher) => matchers.push(matcher),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Dropping route that failed to compile");
                    metrics::record_compile_error();
                    compile_errors.push(e);
                }
            }
        }

        tracing::debug!(
            routes = matchers.len(),
            dropped = compile_errors.len(),
            "Route parser built"
        );

        Self {
            matchers,
            compile_errors,
        }
    }

    /// Resolve `url` to a route.
    ///
    /// Absolute URLs are reduced to their path; bare paths lose any query or
    /// fragment. Unparsable input and unknown paths both yield `None`.
    pub fn parse(&self, url: &str) -> Option<Route> {
        let route = route_path(url).and_then(|path| {
            self.matchers
                .iter()
                .find_map(|matcher| matcher.resolve(&path))
        });

        match &route {
            Some(r) => tracing::trace!(template = %r.path(), "Route resolved"),
            None => tracing::trace!("No route matched"),
        }
        metrics::record_parse(route.is_some());

        route
    }

    pub fn matchers(&self) -> &[RouteMatcher] {
        &self.matchers
    }

    /// Templates of the active routes, in precedence order.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(RouteMatcher::template)
    }

    /// Errors for the route entries that were dropped at construction.
    pub fn compile_errors(&self) -> &[CompileError] {
        &self.compile_errors
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for RouteParser {
    /// The built-in client route table.
    fn default() -> Self {
        Self::from_config(&client_routes())
    }
}

/// The application's client routes, in precedence order.
pub fn client_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::from_pattern("^/home$", "/home"),
        RouteConfig::from_pattern("^/profile$", "/profile"),
        RouteConfig::from_pattern("^/settings$", "/settings"),
        RouteConfig::from_pattern("^/feature/([^/]+)$", "/feature/:id").with_parameters(["id"]),
        RouteConfig::from_pattern("^/help$", "/help"),
    ]
}
