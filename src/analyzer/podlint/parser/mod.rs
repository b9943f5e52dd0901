//! YAML loader for pod manifests.
//!
//! Parses the first document of the input into a [`Node`] tree with
//! position tracking for accurate diagnostics.

mod builder;
pub mod tree;

pub use tree::{Node, NodeKind, Position, ScalarTag, lookup};

use yaml_rust2::parser::Parser;

use builder::TreeBuilder;

/// Error type for parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Scanner or parser rejected the input.
    #[error("{0}")]
    Syntax(String),
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

impl From<yaml_rust2::ScanError> for ParseError {
    fn from(err: yaml_rust2::ScanError) -> Self {
        Self::Syntax(err.to_string())
    }
}

/// Parse a YAML string into a document node.
///
/// Only the first document of a multi-document stream is loaded. An empty
/// input yields a document without content. A leading byte order mark is
/// skipped.
pub fn parse_document(content: &str) -> Result<Node, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(content);

    parser.load(&mut builder, false)?;

    builder.finish()
}
