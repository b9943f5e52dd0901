//! POD001: os-supported-value
//!
//! `spec.os` must name a supported operating system, either directly as a
//! string or through `spec.os.name`.

use crate::analyzer::podlint::parser::Node;
use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule, make_diagnostic};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope};

const CODE: &str = "POD001";
const NAME: &str = "os-supported-value";
const DESCRIPTION: &str = "`spec.os` must be `linux` or `windows`, as a string or as `os.name`.";

const SUPPORTED_OS: &[&str] = &["linux", "windows"];

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Pod, DESCRIPTION, check)
}

fn check(ctx: &LintContext, spec: &Node) -> Vec<Diagnostic> {
    let Some(os) = spec.get("os") else {
        return Vec::new();
    };

    let message = match os {
        Node::Scalar { value, .. } => unsupported(value).map(|m| (os, m)),
        Node::Mapping { .. } => match os.get("name") {
            None => Some((os, "os.name is required".to_string())),
            Some(name) => match name.as_scalar() {
                Some(value) => unsupported(value).map(|m| (name, m)),
                None => Some((name, "os.name must be string".to_string())),
            },
        },
        _ => Some((os, "os must be string or object".to_string())),
    };

    message
        .map(|(node, message)| vec![make_diagnostic(ctx, CODE, NAME, node, message)])
        .unwrap_or_default()
}

fn unsupported(value: &str) -> Option<String> {
    if SUPPORTED_OS.contains(&value) {
        None
    } else {
        Some(format!("os has unsupported value '{}'", value))
    }
}
