//! Plain output formatter: `<path>:<line> <message>` per diagnostic.

use crate::analyzer::podlint::lint::LintResult;

/// Format validation results, one line per diagnostic, in traversal order.
pub fn format(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for diagnostic in &result.diagnostics {
            output.push_str(&format!("{}\n", diagnostic));
        }
    }

    output
}
