//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resolver.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::client_routes;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Route table, in precedence order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            routes: client_routes(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One route table entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Template the route resolves to (e.g., "/feature/:id").
    pub template: String,

    /// Regex pattern to match. When absent the template is compiled instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Parameter names bound positionally to capture groups.
    /// Empty means: derive from named groups or template placeholders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl RouteConfig {
    /// An entry whose pattern is derived from the template.
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            pattern: None,
            parameters: Vec::new(),
        }
    }

    /// An entry with an explicit regex pattern.
    pub fn from_pattern(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            pattern: Some(pattern.into()),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}
