//! Redaction outcome.

use serde::Serialize;
use std::fmt;

/// Outcome of a single redaction attempt.
///
/// `NotApplicable` means the redactor does not recognize the URL. It is
/// distinct from a URL that redacts to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", content = "url", rename_all = "snake_case")]
pub enum RedactionResult {
    /// Privacy-safe form of the URL.
    Redacted(String),
    NotApplicable,
}

impl RedactionResult {
    pub fn is_redacted(&self) -> bool {
        matches!(self, RedactionResult::Redacted(_))
    }

    /// The redacted URL, if any.
    pub fn as_redacted(&self) -> Option<&str> {
        match self {
            RedactionResult::Redacted(url) => Some(url),
            RedactionResult::NotApplicable => None,
        }
    }

    pub fn into_redacted(self) -> Option<String> {
        match self {
            RedactionResult::Redacted(url) => Some(url),
            RedactionResult::NotApplicable => None,
        }
    }
}

impl fmt::Display for RedactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedactionResult::Redacted(url) => f.write_str(url),
            RedactionResult::NotApplicable => f.write_str("<not applicable>"),
        }
    }
}
