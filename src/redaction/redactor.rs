//! URL redactors.
//!
//! # Responsibilities
//! - Define the single-call redaction capability
//! - Redact URLs that resolve to a known client route
//!
//! # Design Decisions
//! - One entry point: applicability and output come from one evaluation
//! - Parameter values are replaced by their `:name` placeholder, never echoed

use std::fmt;
use std::sync::Arc;

use crate::observability::metrics;
use crate::redaction::result::RedactionResult;
use crate::routing::{Route, RouteParser};

/// Something that can turn a URL into a privacy-safe form.
pub trait UrlRedactor: Send + Sync + fmt::Debug {
    /// Redact `url`, or report that this redactor does not apply to it.
    fn redact(&self, url: &str) -> RedactionResult;
}

impl<T: UrlRedactor + ?Sized> UrlRedactor for Box<T> {
    fn redact(&self, url: &str) -> RedactionResult {
        (**self).redact(url)
    }
}

impl<T: UrlRedactor + ?Sized> UrlRedactor for Arc<T> {
    fn redact(&self, url: &str) -> RedactionResult {
        (**self).redact(url)
    }
}

/// Redacts URLs that match a client route to that route's template.
#[derive(Debug, Clone)]
pub struct ClientRouteRedactor {
    parser: Arc<RouteParser>,
}

impl ClientRouteRedactor {
    pub fn new(parser: Arc<RouteParser>) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &RouteParser {
        &self.parser
    }
}

impl UrlRedactor for ClientRouteRedactor {
    fn redact(&self, url: &str) -> RedactionResult {
        let result = match self.parser.parse(url) {
            Some(route) => RedactionResult::Redacted(redact_route(&route)),
            None => RedactionResult::NotApplicable,
        };

        tracing::trace!(redacted = %result, "Client route redaction");
        metrics::record_redaction("client_route", result.is_redacted());
        result
    }
}

/// Render a route with every parameter shown as its placeholder.
///
/// The template already carries `:name` placeholders. Parameters that the
/// template does not mention are appended as `/:name`, in name order.
pub fn redact_route(route: &Route) -> String {
    let mut redacted = route.path().to_string();

    for name in route.parameters().keys() {
        let placed = route
            .path()
            .split('/')
            .any(|segment| segment.strip_prefix(':') == Some(name.as_str()));
        if !placed {
            redacted.push_str("/:");
            redacted.push_str(name);
        }
    }

    redacted
}
