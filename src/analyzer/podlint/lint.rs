//! Main validation orchestration for podlint.
//!
//! This module ties together parsing and rules to provide the main
//! validation API. Rules run in document traversal order: pod-scope rules
//! against `spec`, then every container in sequence order with the
//! container-scope rules in registry order.

use std::path::Path;

use crate::analyzer::podlint::config::PodlintConfig;
use crate::analyzer::podlint::parser::{Node, ParseError, parse_document};
use crate::analyzer::podlint::rules::{LintContext, Rule, all_rules};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope};

/// Fatal errors that stop validation before any rule runs.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Error parsing YAML: {0}")]
    Parse(#[from] ParseError),
}

/// Result of validating a manifest.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The file path that was validated.
    pub file_path: String,
    /// Violations, in traversal order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if there are any diagnostics.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Validate a manifest string.
pub fn lint(content: &str, config: &PodlintConfig) -> Result<LintResult, LintError> {
    lint_with_path(content, "<inline>", config)
}

/// Validate a manifest string with a path for diagnostics.
pub fn lint_with_path(
    content: &str,
    path: &str,
    config: &PodlintConfig,
) -> Result<LintResult, LintError> {
    let document = parse_document(content)?;
    Ok(validate(&document, path, config))
}

/// Validate a manifest file.
pub fn lint_file(path: &Path, config: &PodlintConfig) -> Result<LintResult, LintError> {
    let path_str = path.display().to_string();
    log::info!("Validating {}", path_str);

    let content = std::fs::read_to_string(path)?;
    lint_with_path(&content, &path_str, config)
}

/// Run all enabled rules over an already loaded document.
pub fn validate(document: &Node, path: &str, config: &PodlintConfig) -> LintResult {
    let mut result = LintResult::new(path);

    let root = document.resolve_root();
    let Some(spec) = root.get("spec").filter(|spec| spec.is_mapping()) else {
        log::debug!("No `spec` mapping under a {} root, nothing to check", root.kind());
        return result;
    };

    let (pod_rules, container_rules): (Vec<_>, Vec<_>) = all_rules()
        .into_iter()
        .filter(|rule| {
            let ignored = config.is_rule_ignored(rule.code());
            if ignored {
                log::debug!("Skipping ignored rule {}", rule.code());
            }
            !ignored
        })
        .partition(|rule| rule.scope() == RuleScope::Pod);

    let ctx = LintContext::new(path);
    run_rules(&pod_rules, &ctx, spec, &mut result.diagnostics);

    if let Some(containers) = spec.get("containers").and_then(Node::as_sequence) {
        for (index, container) in containers.iter().enumerate() {
            if !container.is_mapping() {
                log::debug!("Skipping containers[{}]: {} entry", index, container.kind());
                continue;
            }
            run_rules(&container_rules, &ctx, container, &mut result.diagnostics);
        }
    }

    log::debug!(
        "{}: {} diagnostic(s)",
        result.file_path,
        result.diagnostics.len()
    );
    result
}

fn run_rules(
    rules: &[Box<dyn Rule>],
    ctx: &LintContext,
    node: &Node,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for rule in rules {
        let found = rule.check(ctx, node);
        log::trace!(
            "{} ({}) at line {}: {} diagnostic(s)",
            rule.code(),
            rule.name(),
            node.line(),
            found.len()
        );
        diagnostics.extend(found);
    }
}
