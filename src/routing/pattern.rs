//! Route pattern compilation.
//!
//! # Responsibilities
//! - Compile regular-expression route patterns, anchored at both ends
//! - Compile path templates (`/feature/:id`) into the same representation
//! - Report malformed patterns as [`CompileError`]
//!
//! # Design Decisions
//! - Compilation happens once, when a matcher is built; never on the parse path
//! - Anchoring is applied by the compiler, so `^`/`$` in the source are optional
//! - Template syntax is limited to literal segments and `:name` segments

use regex::Regex;
use thiserror::Error;

/// Errors raised while compiling a route pattern.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The pattern is not valid in the regex grammar.
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The path template cannot be turned into a pattern.
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// The declared parameter names cannot be bound.
    #[error("invalid parameters for route `{template}`: {reason}")]
    InvalidParameters { template: String, reason: String },
}

/// Result type for pattern compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// An executable, fully anchored route pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// The pattern text as it was given to the compiler.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    pub fn capture_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Named capture groups as `(group index, name)` pairs, in group order.
    pub fn named_groups(&self) -> Vec<(usize, String)> {
        self.regex
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| name.map(|n| (index, n.to_string())))
            .collect()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compile a regex route pattern.
///
/// The pattern is wrapped as `^(?:pattern)$` so that only whole-input matches
/// count. A pattern that already carries its own anchors compiles the same way.
pub fn compile(pattern: &str) -> CompileResult<CompiledPattern> {
    let anchored = format!("^(?:{pattern})$");
    let regex = Regex::new(&anchored).map_err(|source| CompileError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Compile a path template such as `/feature/:id`.
///
/// Returns the compiled pattern and the parameter names in capture order.
/// `:name` segments capture one path segment; every other segment is literal.
pub fn compile_template(template: &str) -> CompileResult<(CompiledPattern, Vec<String>)> {
    let invalid = |reason: &str| CompileError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    };

    check_template(template)?;

    let mut names: Vec<String> = Vec::new();
    let mut segments = Vec::new();

    for segment in template.split('/') {
        match segment.strip_prefix(':') {
            Some("") => return Err(invalid("parameter segment has no name")),
            Some(name) => {
                if names.iter().any(|n| n == name) {
                    return Err(invalid(&format!("parameter `{name}` is declared twice")));
                }
                names.push(name.to_string());
                segments.push("([^/]+)".to_string());
            }
            None => segments.push(regex::escape(segment)),
        }
    }

    let pattern = compile(&segments.join("/"))?;
    Ok((pattern, names))
}

/// Check that a route template is an absolute path.
pub fn check_template(template: &str) -> CompileResult<()> {
    if template.starts_with('/') {
        Ok(())
    } else {
        Err(CompileError::InvalidTemplate {
            template: template.to_string(),
            reason: "template must start with '/'".to_string(),
        })
    }
}

/// Check that declared parameter names are non-empty and unique.
pub fn check_parameters(template: &str, names: &[String]) -> CompileResult<()> {
    let invalid = |reason: String| CompileError::InvalidParameters {
        template: template.to_string(),
        reason,
    };

    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(invalid("parameter name is empty".to_string()));
        }
        if names[..i].contains(name) {
            return Err(invalid(format!("parameter `{name}` is declared twice")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_anchors_both_ends() {
        let pattern = compile("/home").unwrap();
        assert!(pattern.regex().is_match("/home"));
        assert!(!pattern.regex().is_match("/home/extra"));
        assert!(!pattern.regex().is_match("/prefix/home"));
    }

    #[test]
    fn test_compile_accepts_explicit_anchors() {
        let pattern = compile("^/feature/([^/]+)$").unwrap();
        assert_eq!(pattern.capture_count(), 1);
        assert!(pattern.regex().is_match("/feature/123"));
        assert!(!pattern.regex().is_match("/feature/123/edit"));
    }

    #[test]
    fn test_compile_alternation_stays_anchored() {
        // Without the group wrapper `a|b` would anchor each side separately.
        let pattern = compile("/a|/b").unwrap();
        assert!(pattern.regex().is_match("/a"));
        assert!(pattern.regex().is_match("/b"));
        assert!(!pattern.regex().is_match("/a/x"));
        assert!(!pattern.regex().is_match("x/b"));
    }

    #[test]
    fn test_compile_reports_invalid_pattern() {
        let err = compile("/feature/([^/]+").unwrap_err();
        match err {
            CompileError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "/feature/([^/]+"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_named_groups() {
        let pattern = compile("/users/(?P<user>[^/]+)/(\\d+)/(?P<post>[^/]+)").unwrap();
        assert_eq!(pattern.capture_count(), 3);
        assert_eq!(
            pattern.named_groups(),
            vec![(1, "user".to_string()), (3, "post".to_string())]
        );
    }

    #[test]
    fn test_compile_template() {
        let (pattern, names) = compile_template("/feature/:id").unwrap();
        assert_eq!(names, vec!["id"]);
        assert_eq!(pattern.source(), "/feature/([^/]+)");
        assert!(pattern.regex().is_match("/feature/123"));
        assert!(!pattern.regex().is_match("/feature/"));
        assert!(!pattern.regex().is_match("/feature/1/2"));
    }

    #[test]
    fn test_compile_template_escapes_literals() {
        let (pattern, names) = compile_template("/files/v1.0").unwrap();
        assert!(names.is_empty());
        assert!(pattern.regex().is_match("/files/v1.0"));
        assert!(!pattern.regex().is_match("/files/v1x0"));
    }

    #[test]
    fn test_compile_template_root() {
        let (pattern, _) = compile_template("/").unwrap();
        assert!(pattern.regex().is_match("/"));
        assert!(!pattern.regex().is_match(""));
    }

    #[test]
    fn test_compile_template_rejects_malformed() {
        assert!(matches!(
            compile_template("feature/:id"),
            Err(CompileError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            compile_template("/feature/:"),
            Err(CompileError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            compile_template("/a/:id/b/:id"),
            Err(CompileError::InvalidTemplate { .. })
        ));
    }
}
