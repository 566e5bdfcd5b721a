//! Resolved route value.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Parameter name to captured value.
pub type Parameters = BTreeMap<String, String>;

/// The outcome of a successful resolution: the matched template and the
/// parameters captured from the input.
///
/// Routes are plain values. Callers that need the resolution in several places
/// should clone the `Route` rather than parse the same input again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    path: String,
    parameters: Parameters,
}

impl Route {
    /// Create a route from a template path and its captured parameters.
    pub fn new(path: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            path: path.into(),
            parameters,
        }
    }

    /// Create a route with no parameters.
    pub fn literal(path: impl Into<String>) -> Self {
        Self::new(path, Parameters::new())
    }

    /// The template path of the matched route, e.g. `/feature/:id`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Look up a single captured parameter.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn into_parts(self) -> (String, Parameters) {
        (self.path, self.parameters)
    }
}

// Displays the template only; captured values never appear.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
