//! GitHub Actions output formatter for podlint.
//!
//! Produces output in GitHub Actions workflow command format:
//! ::error file={name},line={line},col={col},title={code}::{message}

use crate::analyzer::podlint::lint::LintResult;

/// Format validation results for GitHub Actions.
pub fn format(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for diagnostic in &result.diagnostics {
            output.push_str(&format!(
                "::error file={},line={},col={},title={}::{}\n",
                result.file_path,
                diagnostic.line,
                diagnostic.column,
                diagnostic.code,
                escape_github(&diagnostic.message)
            ));
        }
    }

    output
}

/// Escape special characters for GitHub Actions.
fn escape_github(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
