//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use route_resolver::config::RouteConfig;
use route_resolver::redaction::{RedactionResult, UrlRedactor};
use route_resolver::routing::RouteParser;

/// A route table with a literal route ahead of a catch-all.
pub fn literal_then_wildcard() -> Vec<RouteConfig> {
    vec![
        RouteConfig::from_template("/home"),
        RouteConfig::from_pattern("/([^/]+)", "/:any").with_parameters(["any"]),
    ]
}

/// The built-in client routes behind an `Arc`, as collaborators share it.
pub fn shared_parser() -> Arc<RouteParser> {
    Arc::new(RouteParser::default())
}

/// A redactor that counts calls and delegates to an inner redactor.
#[derive(Debug)]
pub struct CountingRedactor<R> {
    inner: R,
    calls: Arc<AtomicUsize>,
}

impl<R: UrlRedactor> CountingRedactor<R> {
    pub fn new(inner: R) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { inner, calls: calls.clone() }, calls)
    }
}

impl<R: UrlRedactor> UrlRedactor for CountingRedactor<R> {
    fn redact(&self, url: &str) -> RedactionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.redact(url)
    }
}

/// Redacts every URL to a fixed string.
#[derive(Debug)]
pub struct Constant(pub &'static str);

impl UrlRedactor for Constant {
    fn redact(&self, _url: &str) -> RedactionResult {
        RedactionResult::Redacted(self.0.to_string())
    }
}
