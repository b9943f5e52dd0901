//! POD002: readiness-probe-port
//!
//! `readinessProbe.httpGet.port` must be a decimal port number in 1..=65535.

use crate::analyzer::podlint::parser::Node;
use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule, make_diagnostic};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope};

const CODE: &str = "POD002";
const NAME: &str = "readiness-probe-port";
const DESCRIPTION: &str =
    "A container's `readinessProbe.httpGet.port` must be an integer between 1 and 65535.";

const PORT_PATH: &[&str] = &["readinessProbe", "httpGet", "port"];

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext, container: &Node) -> Vec<Diagnostic> {
    let Some(port) = container.get_path(PORT_PATH) else {
        return Vec::new();
    };
    // Named ports and other non-scalar values are left to other tooling.
    let Some(value) = port.as_scalar() else {
        return Vec::new();
    };

    if is_valid_port(value) {
        Vec::new()
    } else {
        vec![make_diagnostic(ctx, CODE, NAME, port, "port value out of range")]
    }
}

fn is_valid_port(value: &str) -> bool {
    value
        .parse::<i64>()
        .map(|port| (1..=65535).contains(&port))
        .unwrap_or(false)
}
