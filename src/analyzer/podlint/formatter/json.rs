//! JSON output formatter for podlint.

use serde_json::json;

use crate::analyzer::podlint::lint::LintResult;

/// Format validation results as JSON.
pub fn format(results: &[LintResult]) -> String {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            json!({
                "filePath": result.file_path,
                "errorCount": result.error_count(),
                "messages": result.diagnostics,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
