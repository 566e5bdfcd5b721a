//! Ordered composition of redactors.

use crate::observability::metrics;
use crate::redaction::redactor::UrlRedactor;
use crate::redaction::result::RedactionResult;

/// Tries each member in order and returns the first redacted result.
///
/// Each member is asked exactly once per call, and later members are not
/// asked at all once one has redacted the URL.
#[derive(Debug, Default)]
pub struct AggregateRedactor {
    redactors: Vec<Box<dyn UrlRedactor>>,
}

impl AggregateRedactor {
    /// Create an aggregate; list order is precedence order.
    pub fn new(redactors: Vec<Box<dyn UrlRedactor>>) -> Self {
        Self { redactors }
    }

    /// Append a redactor with the lowest precedence so far.
    pub fn with(mut self, redactor: impl UrlRedactor + 'static) -> Self {
        self.redactors.push(Box::new(redactor));
        self
    }

    pub fn len(&self) -> usize {
        self.redactors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redactors.is_empty()
    }
}

impl UrlRedactor for AggregateRedactor {
    fn redact(&self, url: &str) -> RedactionResult {
        let result = self
            .redactors
            .iter()
            .map(|redactor| redactor.redact(url))
            .find(RedactionResult::is_redacted)
            .unwrap_or(RedactionResult::NotApplicable);

        metrics::record_redaction("aggregate", result.is_redacted());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::redactor::ClientRouteRedactor;
    use crate::routing::RouteParser;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Returns a fixed result and counts how often it was asked.
    #[derive(Debug)]
    struct Fixed {
        result: RedactionResult,
        calls: Arc<AtomicUsize>,
    }

    impl Fixed {
        fn new(result: RedactionResult) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { result, calls: calls.clone() }, calls)
        }
    }

    impl UrlRedactor for Fixed {
        fn redact(&self, _url: &str) -> RedactionResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[test]
    fn test_first_redacted_wins() {
        let (first, first_calls) = Fixed::new(RedactionResult::NotApplicable);
        let (second, second_calls) = Fixed::new(RedactionResult::Redacted("/second".into()));
        let (third, third_calls) = Fixed::new(RedactionResult::Redacted("/third".into()));

        let aggregate = AggregateRedactor::default().with(first).with(second).with(third);
        assert_eq!(aggregate.redact("/x"), RedactionResult::Redacted("/second".into()));

        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_not_applicable() {
        let (first, first_calls) = Fixed::new(RedactionResult::NotApplicable);
        let (second, second_calls) = Fixed::new(RedactionResult::NotApplicable);

        let aggregate = AggregateRedactor::new(vec![Box::new(first), Box::new(second)]);
        assert_eq!(aggregate.redact("/x"), RedactionResult::NotApplicable);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_aggregate() {
        let aggregate = AggregateRedactor::default();
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.redact("/home"), RedactionResult::NotApplicable);
    }

    #[test]
    fn test_wraps_client_route_redactor() {
        let parser = Arc::new(RouteParser::default());
        let aggregate = AggregateRedactor::default().with(ClientRouteRedactor::new(parser));

        assert_eq!(aggregate.len(), 1);
        assert_eq!(
            aggregate.redact("/feature/456"),
            RedactionResult::Redacted("/feature/:id".into())
        );
        assert_eq!(aggregate.redact("/unknown"), RedactionResult::NotApplicable);
    }
}
