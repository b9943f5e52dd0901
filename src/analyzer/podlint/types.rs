//! Core types for the podlint validator.
//!
//! These types follow the pattern established by dclint:
//! - `RuleCode` - Rule identifiers (e.g., "POD001")
//! - `RuleScope` - Which node of the manifest a rule inspects
//! - `Diagnostic` - A single rule violation

use std::fmt;

use serde::Serialize;

/// A rule code identifier (e.g., "POD001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuleCode(pub String);

impl RuleCode {
    /// Create a new rule code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The node a rule is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Runs once against the `spec` mapping.
    Pod,
    /// Runs against every mapping entry of `spec.containers`.
    Container,
}

/// Rule metadata for documentation and display.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    /// Short description of the rule.
    pub description: String,
}

impl RuleMeta {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A validation violation found in a manifest.
///
/// Diagnostics are kept in the order they were found; they are never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The rule code that was violated.
    #[serde(rename = "ruleId")]
    pub code: RuleCode,
    /// The human-readable rule name (e.g., "os-supported-value").
    pub rule_name: String,
    /// Path of the validated file, or `<inline>`.
    #[serde(skip)]
    pub source: String,
    /// The line number of the offending node (1-indexed).
    pub line: u32,
    /// The column number of the offending node (1-indexed).
    pub column: u32,
    /// A human-readable message describing the violation.
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        code: impl Into<RuleCode>,
        rule_name: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            code: code.into(),
            rule_name: rule_name.into(),
            source: source.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// `<source>:<line> <message>`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.source, self.line, self.message)
    }
}
