//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at construction):
//!     RouteConfig[] (template, pattern?, parameters)
//!     → pattern.rs (compile + anchor, once)
//!     → matcher.rs (bind parameter names to capture groups)
//!     → Freeze as immutable RouteParser
//!
//! Resolution (per call):
//!     URL or path
//!     → normalize.rs (reduce to path)
//!     → parser.rs (try matchers in declaration order)
//!     → Return: Route or None
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at construction, immutable afterwards
//! - Deterministic: same input always resolves to the same route
//! - First match wins (ordered by declaration)
//! - Routes are values; callers reuse them instead of parsing again

pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod pattern;
pub mod route;

pub use matcher::RouteMatcher;
pub use parser::{client_routes, RouteParser};
pub use pattern::{CompileError, CompiledPattern};
pub use route::{Parameters, Route};
