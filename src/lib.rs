//! URL-to-route resolution and redaction library.

pub mod config;
pub mod observability;
pub mod redaction;
pub mod routing;

pub use config::schema::ResolverConfig;
pub use redaction::{AggregateRedactor, ClientRouteRedactor, RedactionResult, UrlRedactor};
pub use routing::{Route, RouteMatcher, RouteParser};
