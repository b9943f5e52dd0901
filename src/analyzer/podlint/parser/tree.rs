//! Position-annotated document tree and the navigation primitive every rule
//! uses to reach into it.
//!
//! A lookup never fails: a missing key, or an ancestor of the wrong kind,
//! simply yields `None` at that level and at every level below it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$").unwrap()
});

const FLOAT_SPECIALS: &[&str] = &[
    ".inf", ".Inf", ".INF", "+.inf", "+.Inf", "+.INF", "-.inf", "-.Inf", "-.INF", ".nan",
    ".NaN", ".NAN",
];

/// Position of a node's first token in the source (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// How a scalar was written in the source, independent of its text.
///
/// `2` is an [`ScalarTag::Int`], `"2"` is a [`ScalarTag::Str`] and `1.5` is a
/// [`ScalarTag::Float`], even though all three carry a textual value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
    /// An explicit tag outside the core schema, kept verbatim (e.g. `!quantity`).
    Other(String),
}

impl ScalarTag {
    /// Resolve the tag of an untagged plain scalar from its text.
    pub fn resolve_plain(value: &str) -> Self {
        match value {
            "" | "~" | "null" | "Null" | "NULL" => return Self::Null,
            "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return Self::Bool,
            _ => {}
        }

        if is_int_literal(value) {
            Self::Int
        } else if is_float_literal(value) {
            Self::Float
        } else {
            Self::Str
        }
    }

    /// Map an explicit core-schema tag suffix (`int` for `!!int`).
    pub fn from_core_suffix(suffix: &str) -> Self {
        match suffix {
            "null" => Self::Null,
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "str" => Self::Str,
            other => Self::Other(format!("!!{}", other)),
        }
    }
}

/// Integer literal forms after every `_` is removed: decimal, `0x`, `0o`,
/// `0b` and legacy leading-zero octal, with an optional sign. The value must
/// fit in 64 bits, and a `+` sign in a signed one.
fn is_int_literal(value: &str) -> bool {
    if !starts_numeric(value) {
        return false;
    }

    let plain = value.replace('_', "");
    let (sign, body) = match plain.as_bytes().first() {
        Some(b'-') => (Some('-'), &plain[1..]),
        Some(b'+') => (Some('+'), &plain[1..]),
        _ => (None, plain.as_str()),
    };

    let lower = body.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return false;
    }

    match (sign, u128::from_str_radix(digits, radix)) {
        (Some('-'), Ok(magnitude)) => magnitude <= i64::MAX as u128 + 1,
        (Some(_), Ok(magnitude)) => magnitude <= i64::MAX as u128,
        (None, Ok(magnitude)) => magnitude <= u64::MAX as u128,
        (_, Err(_)) => false,
    }
}

/// Digit separators are only dropped from text that starts like a number.
fn starts_numeric(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
}

fn is_float_literal(value: &str) -> bool {
    if FLOAT_SPECIALS.contains(&value) {
        return true;
    }
    if starts_numeric(value) {
        FLOAT_REGEX.is_match(&value.replace('_', ""))
    } else {
        FLOAT_REGEX.is_match(value)
    }
}

/// Discriminant of a [`Node`], used in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
    Document,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the loaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar {
        value: String,
        tag: ScalarTag,
        position: Position,
    },
    /// Key/value pairs in source order.
    Mapping {
        entries: Vec<(Node, Node)>,
        position: Position,
    },
    Sequence {
        items: Vec<Node>,
        position: Position,
    },
    /// Stream wrapper; `root` is `None` for an empty input.
    Document {
        root: Option<Box<Node>>,
        position: Position,
    },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar { .. } => NodeKind::Scalar,
            Self::Mapping { .. } => NodeKind::Mapping,
            Self::Sequence { .. } => NodeKind::Sequence,
            Self::Document { .. } => NodeKind::Document,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Scalar { position, .. }
            | Self::Mapping { position, .. }
            | Self::Sequence { position, .. }
            | Self::Document { position, .. } => *position,
        }
    }

    pub fn line(&self) -> u32 {
        self.position().line
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }

    /// Text of a scalar node.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Literal tag of a scalar node.
    pub fn scalar_tag(&self) -> Option<&ScalarTag> {
        match self {
            Self::Scalar { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Children of a sequence node.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Value of the first entry whose scalar key equals `key` exactly.
    ///
    /// Returns `None` when `self` is not a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Mapping { entries, .. } => entries
                .iter()
                .find(|(k, _)| k.as_scalar() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Follow a chain of keys, stopping at the first missing or non-mapping step.
    pub fn get_path(&self, path: &[&str]) -> Option<&Node> {
        path.iter().fold(Some(self), |node, key| lookup(node, key))
    }

    /// The same node, located at `at`. Children keep their own positions.
    pub fn with_position(mut self, at: Position) -> Self {
        match &mut self {
            Self::Scalar { position, .. }
            | Self::Mapping { position, .. }
            | Self::Sequence { position, .. }
            | Self::Document { position, .. } => *position = at,
        }
        self
    }

    /// Unwrap the document wrapper, if any, to the node rules should search.
    pub fn resolve_root(&self) -> &Node {
        match self {
            Self::Document {
                root: Some(root), ..
            } => root,
            other => other,
        }
    }
}

/// Look up `key` in a possibly-absent node.
pub fn lookup<'a>(node: Option<&'a Node>, key: &str) -> Option<&'a Node> {
    node?.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: &str, line: u32) -> Node {
        Node::Scalar {
            value: value.to_string(),
            tag: ScalarTag::resolve_plain(value),
            position: Position::new(line, 1),
        }
    }

    fn mapping(entries: Vec<(&str, Node)>, line: u32) -> Node {
        Node::Mapping {
            entries: entries
                .into_iter()
                .map(|(k, v)| (scalar(k, line), v))
                .collect(),
            position: Position::new(line, 1),
        }
    }

    #[test]
    fn test_get_finds_first_match() {
        let node = mapping(vec![("a", scalar("1", 1)), ("a", scalar("2", 2))], 1);
        assert_eq!(node.get("a").and_then(Node::as_scalar), Some("1"));
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let node = mapping(vec![("Spec", scalar("x", 1))], 1);
        assert!(node.get("spec").is_none());
    }

    #[test]
    fn test_get_on_non_mapping() {
        assert!(scalar("x", 1).get("x").is_none());
        let seq = Node::Sequence {
            items: vec![scalar("x", 1)],
            position: Position::new(1, 1),
        };
        assert!(seq.get("x").is_none());
    }

    #[test]
    fn test_lookup_absent() {
        assert!(lookup(None, "spec").is_none());
    }

    #[test]
    fn test_get_path_short_circuits() {
        let node = mapping(
            vec![("a", mapping(vec![("b", scalar("leaf", 3))], 2))],
            1,
        );
        assert_eq!(
            node.get_path(&["a", "b"]).and_then(Node::as_scalar),
            Some("leaf")
        );
        assert!(node.get_path(&["a", "b", "c"]).is_none());
        assert!(node.get_path(&["a", "missing", "c"]).is_none());
    }

    #[test]
    fn test_resolve_root() {
        let inner = mapping(vec![("spec", scalar("x", 1))], 1);
        let doc = Node::Document {
            root: Some(Box::new(inner.clone())),
            position: Position::new(1, 1),
        };
        assert_eq!(doc.resolve_root(), &inner);
        assert_eq!(inner.resolve_root(), &inner);

        let empty = Node::Document {
            root: None,
            position: Position::new(1, 1),
        };
        assert_eq!(empty.resolve_root().kind(), NodeKind::Document);
    }

    #[test]
    fn test_resolve_plain_tags() {
        assert_eq!(ScalarTag::resolve_plain("2"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("-17"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("0x1F"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("0o17"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("1_000"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("1.5"), ScalarTag::Float);
        assert_eq!(ScalarTag::resolve_plain("1e3"), ScalarTag::Float);
        assert_eq!(ScalarTag::resolve_plain(".inf"), ScalarTag::Float);
        assert_eq!(ScalarTag::resolve_plain("500m"), ScalarTag::Str);
        assert_eq!(ScalarTag::resolve_plain("true"), ScalarTag::Bool);
        assert_eq!(ScalarTag::resolve_plain("yes"), ScalarTag::Str);
        assert_eq!(ScalarTag::resolve_plain("~"), ScalarTag::Null);
        assert_eq!(ScalarTag::resolve_plain(""), ScalarTag::Null);
    }

    #[test]
    fn test_resolve_plain_int_bounds() {
        assert_eq!(
            ScalarTag::resolve_plain("18446744073709551615"),
            ScalarTag::Int
        );
        assert_eq!(
            ScalarTag::resolve_plain("-9223372036854775808"),
            ScalarTag::Int
        );
        assert_eq!(
            ScalarTag::resolve_plain("99999999999999999999"),
            ScalarTag::Float
        );
        // Leading zero means octal, so 8 and 9 are not valid digits.
        assert_eq!(ScalarTag::resolve_plain("010"), ScalarTag::Int);
        assert_eq!(ScalarTag::resolve_plain("08"), ScalarTag::Float);
    }

    #[test]
    fn test_resolve_plain_digit_separators() {
        for value in ["1__0", "1_", "0_7", "0x1_", "-1_000", "+0b1_0"] {
            assert_eq!(ScalarTag::resolve_plain(value), ScalarTag::Int, "{}", value);
        }
        assert_eq!(ScalarTag::resolve_plain("1_000.5"), ScalarTag::Float);
        assert_eq!(ScalarTag::resolve_plain("_1"), ScalarTag::Str);
        assert_eq!(ScalarTag::resolve_plain("0x_"), ScalarTag::Str);
        assert_eq!(
            ScalarTag::resolve_plain("+9223372036854775808"),
            ScalarTag::Float
        );
    }

    #[test]
    fn test_with_position_restamps_top_level_only() {
        let node = mapping(vec![("name", scalar("linux", 2))], 2).with_position(Position::new(9, 5));
        assert_eq!(node.position(), Position::new(9, 5));
        assert_eq!(node.get("name").unwrap().line(), 2);
    }

    #[test]
    fn test_lookup_chains_through_absent_nodes() {
        let node = mapping(vec![("a", scalar("1", 1))], 1);
        assert_eq!(lookup(Some(&node), "a").and_then(Node::as_scalar), Some("1"));
        assert!(lookup(lookup(Some(&node), "missing"), "a").is_none());
        assert!(lookup(lookup(Some(&node), "a"), "b").is_none());
    }

    #[test]
    fn test_core_suffix() {
        assert_eq!(ScalarTag::from_core_suffix("int"), ScalarTag::Int);
        assert_eq!(
            ScalarTag::from_core_suffix("binary"),
            ScalarTag::Other("!!binary".to_string())
        );
    }
}
