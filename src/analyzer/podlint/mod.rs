//! Podlint: semantic checks for pod manifests
//!
//! Catches the handful of pod-spec mistakes a generic schema validator cannot
//! express cheaply: values tied to how a scalar was written, numeric ranges,
//! and fields whose shape varies between a string and an object.
//!
//! # Features
//!
//! - YAML loading with line/column tracking for every node
//! - Rules that tolerate missing or wrongly-typed ancestors
//! - Diagnostics reported in document traversal order
//! - Multiple output formats (plain, JSON, GitHub Actions)
//!
//! # Example
//!
//! ```rust
//! use podspec_lint::analyzer::podlint::{PodlintConfig, lint};
//!
//! let pod = r#"
//! spec:
//!   os: macos
//!   containers:
//!     - name: web
//!       readinessProbe:
//!         httpGet:
//!           port: 8080
//! "#;
//!
//! let result = lint(pod, &PodlintConfig::default()).unwrap();
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].message, "os has unsupported value 'macos'");
//! ```
//!
//! # Rules
//!
//! | Code   | Name                 | Scope     | Description                                   |
//! |--------|----------------------|-----------|-----------------------------------------------|
//! | POD001 | os-supported-value   | pod       | `spec.os` must be `linux` or `windows`        |
//! | POD002 | readiness-probe-port | container | `readinessProbe.httpGet.port` in 1..=65535    |
//! | POD003 | cpu-integer-literal  | container | `limits.cpu` / `requests.cpu` are bare ints   |

pub mod config;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use config::PodlintConfig;
pub use formatter::{OutputFormat, format_result, format_results};
pub use lint::{LintError, LintResult, lint, lint_file, lint_with_path, validate};
pub use parser::{Node, ParseError, parse_document};
pub use types::{Diagnostic, RuleCode, RuleScope};
