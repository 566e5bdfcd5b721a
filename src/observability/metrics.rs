//! Metrics collection.
//!
//! # Metrics
//! - `route_parse_total` (counter): parse calls by outcome (matched, unmatched)
//! - `route_redact_total` (counter): redactions by redactor and outcome
//! - `route_compile_errors_total` (counter): route entries dropped at construction
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no-ops until the host installs a recorder
//! - The library never installs an exporter

pub const ROUTE_PARSE_TOTAL: &str = "route_parse_total";
pub const ROUTE_REDACT_TOTAL: &str = "route_redact_total";
pub const ROUTE_COMPILE_ERRORS_TOTAL: &str = "route_compile_errors_total";

pub fn record_parse(matched: bool) {
    let outcome = if matched { "matched" } else { "unmatched" };
    ::metrics::counter!(ROUTE_PARSE_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_redaction(redactor: &'static str, redacted: bool) {
    let outcome = if redacted { "redacted" } else { "not_applicable" };
    ::metrics::counter!(ROUTE_REDACT_TOTAL, "redactor" => redactor, "outcome" => outcome)
        .increment(1);
}

pub fn record_compile_error() {
    ::metrics::counter!(ROUTE_COMPILE_ERRORS_TOTAL).increment(1);
}
