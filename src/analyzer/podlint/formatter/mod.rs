//! Output formatters for podlint results.
//!
//! Provides the output formats for validation results:
//! - Plain - `<path>:<line> <message>`, one line per diagnostic (default)
//! - JSON - Machine-readable JSON output
//! - GitHub - GitHub Actions annotations

pub mod github;
pub mod json;
pub mod plain;

use crate::analyzer::podlint::lint::LintResult;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `<path>:<line> <message>` line per diagnostic
    #[default]
    Plain,
    /// JSON format for machine processing
    Json,
    /// GitHub Actions annotations
    GitHub,
}

/// Format validation results according to the specified format.
pub fn format_results(results: &[LintResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain::format(results),
        OutputFormat::Json => json::format(results),
        OutputFormat::GitHub => github::format(results),
    }
}

/// Format a single result.
pub fn format_result(result: &LintResult, format: OutputFormat) -> String {
    format_results(std::slice::from_ref(result), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_plain() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_empty_plain_output() {
        let result = LintResult::new("pod.yaml");
        assert_eq!(format_result(&result, OutputFormat::Plain), "");
    }
}
