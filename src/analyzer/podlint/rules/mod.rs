//! Rule system framework for podlint.
//!
//! Provides the infrastructure for defining and running pod manifest rules.
//! Follows the dclint pattern with:
//! - `Rule` trait for all rules
//! - `SimpleRule` for stateless checks built from a plain function

use crate::analyzer::podlint::parser::Node;
use crate::analyzer::podlint::types::{Diagnostic, RuleCode, RuleMeta, RuleScope};

// Rule modules
pub mod pod001;
pub mod pod002;
pub mod pod003;

/// Context for validating a manifest.
#[derive(Debug, Clone)]
pub struct LintContext<'a> {
    /// The file path (for diagnostics).
    pub path: &'a str,
}

impl<'a> LintContext<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

/// A rule that can check part of a pod manifest.
pub trait Rule: Send + Sync {
    /// Get the rule code (e.g., "POD001").
    fn code(&self) -> &RuleCode;

    /// Get the human-readable rule name (e.g., "os-supported-value").
    fn name(&self) -> &str;

    /// Which node the rule is handed: `spec` or one container.
    fn scope(&self) -> RuleScope;

    /// Get the rule metadata.
    fn meta(&self) -> &RuleMeta;

    /// Check the node and return any diagnostics, in traversal order.
    fn check(&self, context: &LintContext, node: &Node) -> Vec<Diagnostic>;
}

/// Base implementation for a stateless rule.
pub struct SimpleRule<F>
where
    F: Fn(&LintContext, &Node) -> Vec<Diagnostic> + Send + Sync,
{
    code: RuleCode,
    name: String,
    scope: RuleScope,
    meta: RuleMeta,
    check_fn: F,
}

impl<F> SimpleRule<F>
where
    F: Fn(&LintContext, &Node) -> Vec<Diagnostic> + Send + Sync,
{
    pub fn new(
        code: impl Into<RuleCode>,
        name: impl Into<String>,
        scope: RuleScope,
        description: impl Into<String>,
        check_fn: F,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            scope,
            meta: RuleMeta::new(description),
            check_fn,
        }
    }
}

impl<F> Rule for SimpleRule<F>
where
    F: Fn(&LintContext, &Node) -> Vec<Diagnostic> + Send + Sync,
{
    fn code(&self) -> &RuleCode {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> RuleScope {
        self.scope
    }

    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn check(&self, context: &LintContext, node: &Node) -> Vec<Diagnostic> {
        (self.check_fn)(context, node)
    }
}

/// Helper to create a diagnostic located at `node`.
pub fn make_diagnostic(
    ctx: &LintContext,
    code: &str,
    name: &str,
    node: &Node,
    message: impl Into<String>,
) -> Diagnostic {
    let position = node.position();
    Diagnostic::new(
        code,
        name,
        ctx.path,
        message,
        position.line,
        position.column,
    )
}

/// Get all rules, in the order they run within their scope.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(pod001::rule()),
        Box::new(pod002::rule()),
        Box::new(pod003::rule()),
    ]
}
