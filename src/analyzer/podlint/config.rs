//! Configuration for the podlint validator.

use std::collections::BTreeSet;

use crate::analyzer::podlint::types::RuleCode;

/// Main configuration for podlint.
///
/// The default configuration runs every rule.
#[derive(Debug, Clone, Default)]
pub struct PodlintConfig {
    /// Rule codes that are not run.
    pub ignored: BTreeSet<String>,
}

impl PodlintConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable a rule.
    pub fn ignore(mut self, rule: impl Into<String>) -> Self {
        self.ignored.insert(rule.into());
        self
    }

    /// Disable several rules.
    pub fn with_ignores(mut self, rules: impl IntoIterator<Item = String>) -> Self {
        self.ignored.extend(rules);
        self
    }

    /// Check if a rule is ignored (disabled).
    pub fn is_rule_ignored(&self, code: &RuleCode) -> bool {
        self.ignored.contains(code.as_str())
    }
}
