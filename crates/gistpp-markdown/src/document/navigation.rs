use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::node::{NodeData, NodeId, NodeKind};
use crate::parsing::rope::Span;
use crate::serialize;

use super::{Document, Position};

/// A read handle on one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn document(self) -> &'a Document {
        self.doc
    }

    pub fn data(self) -> &'a NodeData {
        &self.doc.entry(self.id).data
    }

    pub fn kind(self) -> NodeKind {
        self.data().kind()
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.doc
            .entry(self.id)
            .parent
            .map(|id| NodeRef::new(self.doc, id))
    }

    /// Children in document order.
    pub fn children(self) -> Children<'a> {
        Children {
            doc: self.doc,
            ids: self.doc.entry(self.id).children.iter(),
        }
    }

    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        self.doc
            .entry(self.id)
            .children
            .get(index)
            .map(|&id| NodeRef::new(self.doc, id))
    }

    pub fn child_count(self) -> usize {
        self.doc.entry(self.id).children.len()
    }

    /// The node's text:
    ///
    /// - heading: the title
    /// - paragraph: the plain text of its children, trimmed
    /// - text: the text without surrounding whitespace
    /// - link / image: the label
    /// - code block: the body
    /// - root: empty
    pub fn text(self) -> String {
        match self.data() {
            NodeData::Root => String::new(),
            NodeData::Heading(h) => h.title().to_string(),
            NodeData::Paragraph(_) => self
                .children()
                .map(NodeRef::plain_text)
                .collect::<String>()
                .trim()
                .to_string(),
            NodeData::Text(t) => t.text().to_string(),
            NodeData::Link(l) => l.label().to_string(),
            NodeData::CodeBlock(c) => c.body().to_string(),
        }
    }

    /// Text with markup removed but whitespace kept. Links contribute their
    /// label; block nodes fall back to their trimmed Markdown.
    pub fn plain_text(self) -> String {
        match self.data() {
            NodeData::Text(t) => t.full_text(),
            NodeData::Link(l) => l.full_label(),
            _ => self.to_trimmed_markdown(),
        }
    }

    /// Link label; alias of [`NodeRef::text`] for links and images.
    pub fn label(self) -> Option<&'a str> {
        match self.data() {
            NodeData::Link(l) => Some(l.label()),
            _ => None,
        }
    }

    pub fn level(self) -> Option<u8> {
        match self.data() {
            NodeData::Heading(h) => Some(h.level()),
            _ => None,
        }
    }

    pub fn href(self) -> Option<&'a str> {
        match self.data() {
            NodeData::Link(l) => Some(l.href()),
            _ => None,
        }
    }

    pub fn info_string(self) -> Option<&'a str> {
        match self.data() {
            NodeData::CodeBlock(c) => Some(c.info_string()),
            _ => None,
        }
    }

    /// True if this node or any descendant has been edited.
    pub fn is_dirty(self) -> bool {
        self.doc.entry(self.id).subtree_dirty
    }

    /// Bytes of the original input this node was parsed from. `None` for
    /// appended nodes.
    pub fn source_span(self) -> Option<Span> {
        self.doc.entry(self.id).span
    }

    /// Where the node started in the original input.
    pub fn position(self) -> Option<Position> {
        self.source_span().map(|sp| self.doc.position_of(sp.start))
    }

    pub fn to_markdown(self) -> String {
        let mut out = String::new();
        serialize::write_node(self.doc, self.id, &mut out);
        out
    }

    pub fn to_trimmed_markdown(self) -> String {
        serialize::trim_line_breaks(&self.to_markdown()).to_string()
    }

    /// Pre-order traversal starting with this node. Each call starts a
    /// fresh walk.
    pub fn walk(self) -> Walk<'a> {
        Walk {
            doc: self.doc,
            stack: vec![self.id],
        }
    }

    /// Every node of `kind` in this subtree, in walk order.
    pub fn find_all(self, kind: NodeKind) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.walk().filter(move |n| n.kind() == kind)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Iterator over a node's children.
#[derive(Clone)]
pub struct Children<'a> {
    doc: &'a Document,
    ids: slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| NodeRef::new(self.doc, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| NodeRef::new(self.doc, id))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

/// Lazy pre-order traversal: a node, then each child's walk in order.
#[derive(Clone)]
pub struct Walk<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.entry(id).children.iter().rev().copied());
        Some(NodeRef::new(self.doc, id))
    }
}

impl FusedIterator for Walk<'_> {}
