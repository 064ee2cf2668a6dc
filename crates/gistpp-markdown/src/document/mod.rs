//! # Document
//!
//! The parsed tree lives in an arena owned by [`Document`]. Each entry owns
//! its child list by index and keeps a back-reference to its parent, so the
//! tree is acyclic with a single root at [`Document::ROOT`].
//!
//! ## Modules
//!
//! - **`navigation`**: `NodeRef` read handle, `Children`, pre-order `Walk`
//! - **`edit`**: `Edit` enum, `Document::apply` and dirty propagation
//!
//! Nodes are only ever added, by the parser or by `Edit::AppendChild`.
//! There is no removal or move.

pub mod edit;
pub mod navigation;

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

pub use edit::Edit;
pub use navigation::{Children, NodeRef, Walk};

use crate::node::{NodeData, NodeId, NodeKind};
use crate::parsing::{parse_document, rope::Span};
use crate::serialize;

/// A 1-based line and byte column in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// The node's own fields were edited.
    pub(crate) dirty: bool,
    /// This node or any descendant is dirty. Never cleared.
    pub(crate) subtree_dirty: bool,
    /// Bytes of the original input the node was parsed from.
    pub(crate) span: Option<Span>,
}

/// A lossless, editable Markdown document.
///
/// Serializing an unedited document reproduces its input byte-for-byte.
/// Edits only regenerate the smallest dirty subtree; everything else is
/// replayed from the captured source text.
///
/// A document is a plain owned value with no interior mutability: edits take
/// `&mut self`, reads take `&self`.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<Entry>,
    pub(crate) leading_trivia: String,
    pub(crate) source_path: Option<PathBuf>,
    pub(crate) line_starts: Vec<usize>,
}

impl Document {
    pub const ROOT: NodeId = NodeId(0);

    /// An empty document.
    pub fn new() -> Self {
        Self {
            nodes: vec![Entry {
                data: NodeData::Root,
                parent: None,
                children: vec![],
                dirty: false,
                subtree_dirty: false,
                span: None,
            }],
            leading_trivia: String::new(),
            source_path: None,
            line_starts: vec![],
        }
    }

    /// Parses `markdown`. Never fails: anything unrecognised becomes
    /// paragraph content.
    pub fn parse(markdown: &str) -> Self {
        parse_document(markdown)
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, Self::ROOT)
    }

    /// Looks up a node by id; `None` if the id came from another document.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Blank lines before the first block.
    pub fn leading_trivia(&self) -> &str {
        &self.leading_trivia
    }

    /// The file the document was read from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The document title: the root's first child, when it is a level-1
    /// heading and no other heading sits at the top level.
    pub fn title(&self) -> Option<NodeRef<'_>> {
        let mut top = self.root().children();
        let first = top.next().filter(|n| n.kind() == NodeKind::Heading(1))?;
        if top.any(|n| matches!(n.kind(), NodeKind::Heading(_))) {
            return None;
        }
        Some(first)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True once any edit has been applied.
    pub fn is_dirty(&self) -> bool {
        self.nodes[Self::ROOT.0].subtree_dirty
    }

    /// The full serialized text.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        serialize::write_node(self, Self::ROOT, &mut out);
        out
    }

    /// The serialized text with trailing line breaks removed.
    pub fn to_trimmed_markdown(&self) -> String {
        serialize::trim_line_breaks(&self.to_markdown()).to_string()
    }

    /// Line and column of a byte offset in the original input.
    pub fn position_of(&self, offset: usize) -> Position {
        let idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(idx).copied().unwrap_or(0);
        Position {
            line: idx + 1,
            column: offset - line_start + 1,
        }
    }

    pub(crate) fn entry(&self, id: NodeId) -> &Entry {
        &self.nodes[id.0]
    }

    /// Attaches a node without marking anything dirty. Used while parsing and
    /// for the inline children of an appended paragraph.
    pub(crate) fn push_node(&mut self, parent: NodeId, data: NodeData, span: Option<Span>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Entry {
            data,
            parent: Some(parent),
            children: vec![],
            dirty: false,
            subtree_dirty: false,
            span,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
