//! POD003: cpu-integer-literal
//!
//! `resources.limits.cpu` and `resources.requests.cpu` must be written as
//! bare integer literals. Quoted values and fractions are reported, even when
//! Kubernetes itself would accept them as quantities.

use crate::analyzer::podlint::parser::{Node, ScalarTag};
use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule, make_diagnostic};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope};

const CODE: &str = "POD003";
const NAME: &str = "cpu-integer-literal";
const DESCRIPTION: &str =
    "A container's `resources.limits.cpu` and `resources.requests.cpu` must be unquoted integers.";

/// Checked independently, in this order.
const SECTIONS: &[&str] = &["limits", "requests"];

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext, container: &Node) -> Vec<Diagnostic> {
    let Some(resources) = container.get("resources") else {
        return Vec::new();
    };

    SECTIONS
        .iter()
        .filter_map(|&section| resources.get_path(&[section, "cpu"]))
        .filter(|cpu| matches!(cpu.scalar_tag(), Some(tag) if *tag != ScalarTag::Int))
        .map(|cpu| make_diagnostic(ctx, CODE, NAME, cpu, "cpu must be int"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::podlint::parser::parse_document;
    use proptest::prelude::*;

    fn check_yaml(yaml: &str) -> Vec<Diagnostic> {
        let doc = parse_document(yaml).unwrap();
        check(&LintContext::new("pod.yaml"), doc.resolve_root())
    }

    #[test]
    fn test_no_violation_integer() {
        let yaml = r#"name: app
resources:
  limits:
    cpu: 2
  requests:
    cpu: 1
"#;
        assert!(check_yaml(yaml).is_empty());
    }

    #[test]
    fn test_violation_quoted() {
        let yaml = r#"resources:
  requests:
    cpu: "2"
"#;
        let diags = check_yaml(yaml);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "cpu must be int");
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_violation_fraction() {
        let diags = check_yaml("resources:\n  limits:\n    cpu: 1.5\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_violation_millicores() {
        let diags = check_yaml("resources:\n  limits:\n    cpu: 500m\n");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_both_sections_reported_in_order() {
        let yaml = r#"resources:
  requests:
    cpu: "1"
  limits:
    cpu: 0.5
"#;
        let diags = check_yaml(yaml);
        assert_eq!(diags.len(), 2);
        // limits is checked before requests regardless of source order
        assert_eq!(diags[0].line, 5);
        assert_eq!(diags[1].line, 3);
    }

    #[test]
    fn test_explicit_int_tag_is_accepted() {
        assert!(check_yaml("resources:\n  limits:\n    cpu: !!int \"4\"\n").is_empty());
    }

    #[test]
    fn test_missing_levels_are_silent() {
        assert!(check_yaml("name: app\n").is_empty());
        assert!(check_yaml("resources: {}\n").is_empty());
        assert!(check_yaml("resources:\n  limits:\n    memory: 128Mi\n").is_empty());
        assert!(check_yaml("resources:\n  limits: 2\n").is_empty());
    }

    #[test]
    fn test_non_scalar_cpu_is_skipped() {
        assert!(check_yaml("resources:\n  limits:\n    cpu: {cores: 2}\n").is_empty());
    }

    proptest! {
        #[test]
        fn prop_unquoted_integers_pass(cpu in 0u32..10_000) {
            let yaml = format!("resources:\n  requests:\n    cpu: {}\n", cpu);
            prop_assert!(check_yaml(&yaml).is_empty());
        }

        #[test]
        fn prop_quoted_integers_fail(cpu in 0u32..10_000) {
            let yaml = format!("resources:\n  requests:\n    cpu: \"{}\"\n", cpu);
            prop_assert_eq!(check_yaml(&yaml).len(), 1);
        }
    }
}
