//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / redaction produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → Log aggregation (stderr, pretty or JSON)
//!     → Whatever metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - Parameter values are never logged; only templates and redacted forms
//! - Metrics are cheap (counter increments)

pub mod logging;
pub mod metrics;
