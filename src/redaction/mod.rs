//! Redaction subsystem.
//!
//! # Data Flow
//! ```text
//! URL
//!     → aggregate.rs (ask each member once, in order)
//!     → redactor.rs (ClientRouteRedactor: parse once via RouteParser)
//!     → Return: Redacted(template) or NotApplicable
//! ```
//!
//! # Design Decisions
//! - No separate "can redact" probe; `redact` is the only call
//! - Tagged result, so "not applicable" is distinct from "unchanged"
//! - Redactors share one RouteParser through `Arc`

pub mod aggregate;
pub mod redactor;
pub mod result;

pub use aggregate::AggregateRedactor;
pub use redactor::{redact_route, ClientRouteRedactor, UrlRedactor};
pub use result::RedactionResult;
