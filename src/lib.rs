//! # podspec-lint
//!
//! A command-line validator for pod manifests. It loads one YAML document,
//! runs a small set of semantic rules against `spec` and each entry of
//! `spec.containers`, and reports every violation with its source line.
//!
//! ## Example
//!
//! ```rust
//! use podspec_lint::analyzer::podlint::{PodlintConfig, lint_with_path};
//!
//! let pod = "spec:\n  os: [linux]\n";
//! let result = lint_with_path(pod, "pod.yaml", &PodlintConfig::default()).unwrap();
//! assert_eq!(result.diagnostics[0].to_string(), "pod.yaml:2 os must be string or object");
//! ```

pub mod analyzer;
pub mod cli;

pub use analyzer::podlint::{Diagnostic, LintError, LintResult, PodlintConfig};
