//! Redaction pipeline through the public API.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use route_resolver::config::RouteConfig;
use route_resolver::redaction::{
    AggregateRedactor, ClientRouteRedactor, RedactionResult, UrlRedactor,
};
use route_resolver::routing::RouteParser;

mod common;

use common::{Constant, CountingRedactor};

#[test]
fn test_client_route_redaction() {
    let redactor = ClientRouteRedactor::new(common::shared_parser());

    let result = redactor.redact("/feature/123");
    assert_eq!(result, RedactionResult::Redacted("/feature/:id".to_string()));
    assert!(!result.to_string().contains("123"));

    assert_eq!(redactor.redact("/unknown/path"), RedactionResult::NotApplicable);
}

#[test]
fn test_aggregate_redaction() {
    let client = ClientRouteRedactor::new(common::shared_parser());
    let aggregate = AggregateRedactor::default().with(client);

    assert_eq!(
        aggregate.redact("/feature/456"),
        RedactionResult::Redacted("/feature/:id".to_string())
    );
    assert_eq!(aggregate.redact("/unknown"), RedactionResult::NotApplicable);
}

#[test]
fn test_aggregate_falls_through_to_second() {
    let (client, client_calls) =
        CountingRedactor::new(ClientRouteRedactor::new(common::shared_parser()));
    let (fallback, fallback_calls) = CountingRedactor::new(Constant("<external>"));
    let aggregate = AggregateRedactor::default().with(client).with(fallback);

    assert_eq!(
        aggregate.redact("https://partner.example.com/private/abc"),
        RedactionResult::Redacted("<external>".to_string())
    );
    assert_eq!(client_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);

    assert_eq!(
        aggregate.redact("/feature/1"),
        RedactionResult::Redacted("/feature/:id".to_string())
    );
    assert_eq!(client_calls.load(Ordering::SeqCst), 2);
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_redactors_share_one_parser() {
    let parser = common::shared_parser();
    let first = ClientRouteRedactor::new(parser.clone());
    let second = ClientRouteRedactor::new(parser.clone());

    assert!(std::ptr::eq(first.parser(), second.parser()));
    assert_eq!(first.redact("/help"), second.redact("/help"));
}

#[test]
fn test_renamed_template_parameters_never_redact() {
    let parser = RouteParser::from_config(&[
        RouteConfig::from_template("/feature/:id").with_parameters(["feature_id"]),
        RouteConfig::from_template("/orders/:order"),
    ]);
    assert_eq!(parser.compile_errors().len(), 1);

    let redactor = ClientRouteRedactor::new(Arc::new(parser));
    assert_eq!(redactor.redact("/feature/1"), RedactionResult::NotApplicable);
    assert_eq!(
        redactor.redact("/orders/42"),
        RedactionResult::Redacted("/orders/:order".to_string())
    );
}
