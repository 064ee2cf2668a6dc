//! # Node Taxonomy
//!
//! The closed set of node kinds and the per-kind data carried in the
//! document arena.
//!
//! Every populated kind keeps the raw text it was parsed from next to the
//! structured fields an edit can change. Serialization replays the raw text
//! until the node is marked dirty (see [`crate::serialize`]).
//!
//! `BlockQuote`, `List`, `ListItem` and `Raw` exist as kinds only: the parser
//! never produces them and there are no constructors for them.

pub mod code_block;
pub mod heading;
pub mod link;
pub mod paragraph;
pub mod text;

use std::fmt;

use serde::Serialize;

pub use code_block::CodeBlock;
pub use heading::Heading;
pub use link::Link;
pub use paragraph::Paragraph;
pub use text::TextLeaf;

use crate::error::DocumentError;

/// Index of a node inside its [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Root,
    /// ATX heading with its level (1-6).
    Heading(u8),
    Paragraph,
    Text,
    Link,
    Image,
    CodeBlock,
    BlockQuote,
    List,
    ListItem,
    Raw,
}

impl NodeKind {
    /// Block-level kinds that sit under the root or a heading.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Heading(_) | NodeKind::Paragraph | NodeKind::CodeBlock
        )
    }

    /// Leaf kinds that sit inside a paragraph.
    pub fn is_inline(self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::Link | NodeKind::Image)
    }

    /// Whether a node of this kind may be given a child of kind `child`.
    pub fn accepts_child(self, child: NodeKind) -> bool {
        match self {
            NodeKind::Root | NodeKind::Heading(_) => child.is_block(),
            NodeKind::Paragraph => child.is_inline(),
            _ => false,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Heading(level) => write!(f, "Heading{level}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// Per-kind node data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Root,
    Heading(Heading),
    Paragraph(Paragraph),
    Text(TextLeaf),
    /// Links and images; see [`Link::is_image`].
    Link(Link),
    CodeBlock(CodeBlock),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Root => NodeKind::Root,
            NodeData::Heading(h) => NodeKind::Heading(h.level()),
            NodeData::Paragraph(_) => NodeKind::Paragraph,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Link(l) if l.is_image() => NodeKind::Image,
            NodeData::Link(_) => NodeKind::Link,
            NodeData::CodeBlock(_) => NodeKind::CodeBlock,
        }
    }

    /// A new `## title` style heading, ready to append.
    pub fn heading(level: u8, title: &str) -> Result<Self, DocumentError> {
        Heading::new(level, title).map(NodeData::Heading)
    }

    /// A new paragraph; its links and images are scanned when it is appended.
    pub fn paragraph(text: &str) -> Self {
        NodeData::Paragraph(Paragraph::new(text))
    }

    pub fn text(raw: &str) -> Self {
        NodeData::Text(TextLeaf::new(raw))
    }

    pub fn link(label: &str, href: &str) -> Self {
        NodeData::Link(Link::new(label, href, false))
    }

    pub fn image(label: &str, href: &str) -> Self {
        NodeData::Link(Link::new(label, href, true))
    }

    pub fn code_block(info: &str, body: &str) -> Self {
        NodeData::CodeBlock(CodeBlock::new(info, body))
    }
}
