//! Event-driven construction of the document tree.
//!
//! Receives the marked event stream of `yaml-rust2` and assembles a [`Node`]
//! tree, recording the position of each node's first token.

use std::collections::HashMap;

use yaml_rust2::parser::{Event, MarkedEventReceiver, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use super::ParseError;
use super::tree::{Node, Position, ScalarTag};

/// Resolved handle of the `!!` shorthand.
const CORE_TAG_HANDLE: &str = "tag:yaml.org,2002:";

/// Builder implementing [`MarkedEventReceiver`].
///
/// Only the first document is kept; events after it are ignored.
pub(crate) struct TreeBuilder<'a> {
    /// Source text, consulted to tell an empty value from an explicit `~`.
    source: &'a str,
    /// Byte offset of every char; `None` when the source is ASCII and the
    /// marker's char index is already a byte offset.
    char_offsets: Option<Vec<usize>>,
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
    error: Option<ParseError>,
}

/// A collection node under construction.
enum Frame {
    Document {
        position: Position,
        content: Option<Node>,
    },
    Sequence {
        anchor: usize,
        position: Position,
        items: Vec<Node>,
    },
    Mapping {
        anchor: usize,
        position: Position,
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            char_offsets: (!source.is_ascii())
                .then(|| source.char_indices().map(|(offset, _)| offset).collect()),
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
            error: None,
        }
    }

    /// Consume the builder and return the document node.
    pub(crate) fn finish(self) -> Result<Node, ParseError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(ParseError::InvalidStructure(
                "unterminated collection at end of input".to_string(),
            ));
        }

        Ok(self.root.unwrap_or(Node::Document {
            root: None,
            position: Position::new(1, 1),
        }))
    }

    /// The parser reports an omitted value as a plain `~`; only a `~` that is
    /// actually in the source keeps that text.
    fn scalar_text(&self, value: String, style: &TScalarStyle, marker: &Marker) -> String {
        if value == "~"
            && *style == TScalarStyle::Plain
            && self.char_at(marker.index()) != Some('~')
        {
            String::new()
        } else {
            value
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        let offset = match &self.char_offsets {
            Some(offsets) => *offsets.get(index)?,
            None => index,
        };
        self.source.get(offset..)?.chars().next()
    }

    fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(ParseError::InvalidStructure(message.into()));
        }
    }

    /// Attach a finished node to the collection on top of the stack.
    fn push_complete(&mut self, node: Node, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }

        let conflict = match self.stack.last_mut() {
            Some(Frame::Document { content, .. }) if content.is_some() => {
                Some("document has more than one root node")
            }
            Some(Frame::Document { content, .. }) => {
                *content = Some(node);
                None
            }
            Some(Frame::Sequence { items, .. }) => {
                items.push(node);
                None
            }
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => {
                match pending_key.take() {
                    Some(key) => entries.push((key, node)),
                    None => *pending_key = Some(node),
                }
                None
            }
            None => Some("node outside of a document"),
        };

        if let Some(message) = conflict {
            self.fail(message);
        }
    }

    fn on_document_end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Document { position, content }) => {
                self.root = Some(Node::Document {
                    root: content.map(Box::new),
                    position,
                });
            }
            _ => self.fail("document end without a matching start"),
        }
    }

    fn on_sequence_end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Sequence {
                anchor,
                position,
                items,
            }) => self.push_complete(Node::Sequence { items, position }, anchor),
            _ => self.fail("sequence end without a matching start"),
        }
    }

    fn on_mapping_end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Mapping {
                anchor,
                position,
                entries,
                pending_key,
            }) => {
                if pending_key.is_some() {
                    self.fail("mapping key without a value");
                    return;
                }
                self.push_complete(Node::Mapping { entries, position }, anchor);
            }
            _ => self.fail("mapping end without a matching start"),
        }
    }
}

impl MarkedEventReceiver for TreeBuilder<'_> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() || self.root.is_some() {
            return;
        }

        let position = position_of(&marker);
        match ev {
            Event::Nothing | Event::StreamStart | Event::StreamEnd => {}

            Event::DocumentStart => self.stack.push(Frame::Document {
                position,
                content: None,
            }),
            Event::DocumentEnd => self.on_document_end(),

            Event::Scalar(value, style, anchor, tag) => {
                let value = self.scalar_text(value, &style, &marker);
                let tag = resolve_tag(&value, style, tag.as_ref());
                self.push_complete(
                    Node::Scalar {
                        value,
                        tag,
                        position,
                    },
                    anchor,
                );
            }

            Event::SequenceStart(anchor, _tag) => self.stack.push(Frame::Sequence {
                anchor,
                position,
                items: Vec::new(),
            }),
            Event::SequenceEnd => self.on_sequence_end(),

            Event::MappingStart(anchor, _tag) => self.stack.push(Frame::Mapping {
                anchor,
                position,
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::MappingEnd => self.on_mapping_end(),

            // The copy is located where the alias is written, not at its anchor.
            Event::Alias(anchor) => {
                let target = self.anchors.get(&anchor).cloned();
                match target {
                    Some(node) => self.push_complete(node.with_position(position), 0),
                    None => self.fail(format!(
                        "unknown anchor at line {} column {}",
                        position.line, position.column
                    )),
                }
            }
        }
    }
}

/// Marker lines are 1-based, columns 0-based.
fn position_of(marker: &Marker) -> Position {
    Position::new(marker.line() as u32, marker.col() as u32 + 1)
}

/// Decide the literal tag of a scalar event.
///
/// An explicit tag always wins; otherwise only plain scalars are resolved
/// from their text, and quoted or block scalars are strings.
fn resolve_tag(value: &str, style: TScalarStyle, tag: Option<&Tag>) -> ScalarTag {
    match tag {
        Some(tag) if tag.handle == CORE_TAG_HANDLE || tag.handle == "!!" => {
            ScalarTag::from_core_suffix(&tag.suffix)
        }
        // The non-specific `!` tag forces a string.
        Some(tag) if tag.handle == "!" && tag.suffix.is_empty() => ScalarTag::Str,
        Some(tag) => ScalarTag::Other(format!("{}{}", tag.handle, tag.suffix)),
        None if style == TScalarStyle::Plain => ScalarTag::resolve_plain(value),
        None => ScalarTag::Str,
    }
}
