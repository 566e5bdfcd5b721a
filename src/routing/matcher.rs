//! Route matching logic.
//!
//! # Responsibilities
//! - Own one compiled pattern and the template it resolves to
//! - Answer whole-input match queries
//! - Extract named parameters from capture groups
//!
//! # Design Decisions
//! - Patterns are compiled in the constructor and never again
//! - Matching is anchored: a substring hit is not a route match
//! - Declared parameter names bind positionally (name[i] -> group i + 1)
//! - Surplus captures are ignored; names without a capture are left absent

use crate::config::RouteConfig;
use crate::routing::pattern::{self, CompileError, CompileResult, CompiledPattern};
use crate::routing::route::{Parameters, Route};
use regex::Captures;

/// A parameter name bound to a capture group index.
#[derive(Debug, Clone)]
struct Binding {
    name: String,
    group: usize,
}

/// Matches paths against one precompiled route pattern.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    pattern: CompiledPattern,
    bindings: Vec<Binding>,
    template: String,
}

impl RouteMatcher {
    /// Create a matcher from a regex pattern.
    ///
    /// When `parameter_names` is empty the names are taken from the pattern's
    /// named groups (`(?P<id>...)`), each bound to its own group.
    /// The template must start with `/`; declared names must be non-empty
    /// and unique.
    pub fn new<I, S>(
        pattern: &str,
        parameter_names: I,
        template: impl Into<String>,
    ) -> CompileResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = template.into();
        let names: Vec<String> = parameter_names.into_iter().map(Into::into).collect();
        pattern::check_template(&template)?;
        pattern::check_parameters(&template, &names)?;
        let pattern = pattern::compile(pattern)?;

        let bindings = if names.is_empty() {
            pattern
                .named_groups()
                .into_iter()
                .map(|(group, name)| Binding { name, group })
                .collect()
        } else {
            if names.len() > pattern.capture_count() {
                tracing::warn!(
                    template = %template,
                    declared = names.len(),
                    captures = pattern.capture_count(),
                    "Route declares more parameters than the pattern captures"
                );
            }
            positional(names)
        };

        Ok(Self {
            pattern,
            bindings,
            template,
        })
    }

    /// Create a matcher whose pattern is derived from its template,
    /// e.g. `/feature/:id`.
    pub fn from_template(template: impl Into<String>) -> CompileResult<Self> {
        let template = template.into();
        let (pattern, names) = pattern::compile_template(&template)?;

        Ok(Self {
            pattern,
            bindings: positional(names),
            template,
        })
    }

    /// Create a matcher from a route table entry.
    ///
    /// Entries without a pattern compile their template; parameter names
    /// declared on such an entry must repeat the template's `:name` segments.
    pub fn from_config(config: &RouteConfig) -> CompileResult<Self> {
        match &config.pattern {
            Some(pattern) => Self::new(
                pattern,
                config.parameters.iter().cloned(),
                config.template.clone(),
            ),
            None => {
                let matcher = Self::from_template(config.template.clone())?;
                let declared = config.parameters.iter().map(String::as_str);
                if !config.parameters.is_empty() && !matcher.parameter_names().eq(declared) {
                    return Err(CompileError::InvalidParameters {
                        template: config.template.clone(),
                        reason: "declared parameters differ from the template's placeholders"
                            .to_string(),
                    });
                }
                Ok(matcher)
            }
        }
    }

    /// Returns true if the whole input matches this route's pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.regex().is_match(input)
    }

    /// Extract parameters if the input matches; `None` otherwise.
    ///
    /// Consistent with [`matches`](Self::matches): both evaluate the same
    /// compiled pattern.
    pub fn extract(&self, input: &str) -> Option<Parameters> {
        self.pattern
            .regex()
            .captures(input)
            .map(|captures| self.collect(&captures))
    }

    /// Match and extract in a single pattern evaluation.
    pub fn resolve(&self, input: &str) -> Option<Route> {
        self.extract(input)
            .map(|parameters| Route::new(self.template.clone(), parameters))
    }

    fn collect(&self, captures: &Captures<'_>) -> Parameters {
        self.bindings
            .iter()
            .filter_map(|binding| {
                captures
                    .get(binding.group)
                    .map(|m| (binding.name.clone(), m.as_str().to_string()))
            })
            .collect()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.name.as_str())
    }
}

fn positional(names: Vec<String>) -> Vec<Binding> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Binding { name, group: i + 1 })
        .collect()
}
