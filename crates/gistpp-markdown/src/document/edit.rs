use crate::error::{Capability, DocumentError};
use crate::node::{NodeData, NodeId};
use crate::parsing::attach_inlines;

use super::Document;

/// A single change to a [`Document`].
///
/// All mutation flows through [`Document::apply`]; the `set_*` and
/// `append_child` methods are shorthands for building an `Edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the node's text. What "text" means depends on the kind: a
    /// heading's title, a link's label, a code block's body.
    SetText { node: NodeId, text: String },
    /// Retarget a link or image.
    SetHref { node: NodeId, href: String },
    /// Replace a code block's info string.
    SetInfoString { node: NodeId, info: String },
    /// Attach a new node as the last child of `parent`.
    AppendChild { parent: NodeId, node: NodeData },
}

impl Document {
    /// Applies `edit`, returning the id of the edited or appended node.
    ///
    /// A rejected edit leaves the document untouched.
    pub fn apply(&mut self, edit: Edit) -> Result<NodeId, DocumentError> {
        let result = self.apply_inner(edit);
        if let Err(err) = &result {
            log::debug!("edit rejected: {err}");
        }
        result
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<NodeId, DocumentError> {
        self.apply(Edit::SetText {
            node,
            text: text.to_string(),
        })
    }

    pub fn set_href(&mut self, node: NodeId, href: &str) -> Result<NodeId, DocumentError> {
        self.apply(Edit::SetHref {
            node,
            href: href.to_string(),
        })
    }

    pub fn set_info_string(&mut self, node: NodeId, info: &str) -> Result<NodeId, DocumentError> {
        self.apply(Edit::SetInfoString {
            node,
            info: info.to_string(),
        })
    }

    pub fn append_child(&mut self, parent: NodeId, node: NodeData) -> Result<NodeId, DocumentError> {
        self.apply(Edit::AppendChild { parent, node })
    }

    fn apply_inner(&mut self, edit: Edit) -> Result<NodeId, DocumentError> {
        match edit {
            Edit::SetText { node, text } => {
                match self.data_mut(node)? {
                    NodeData::Heading(h) => h.set_title(&text),
                    NodeData::Text(t) => t.set_text(&text),
                    NodeData::Link(l) => l.set_label(&text),
                    NodeData::CodeBlock(c) => c.set_body(&text),
                    other => return Err(unsupported(other, Capability::TextAssignment)),
                }
                self.mark_dirty(node);
                Ok(node)
            }
            Edit::SetHref { node, href } => {
                match self.data_mut(node)? {
                    NodeData::Link(l) => l.set_href(&href),
                    other => return Err(unsupported(other, Capability::Href)),
                }
                self.mark_dirty(node);
                Ok(node)
            }
            Edit::SetInfoString { node, info } => {
                match self.data_mut(node)? {
                    NodeData::CodeBlock(c) => c.set_info_string(&info),
                    other => return Err(unsupported(other, Capability::InfoString)),
                }
                self.mark_dirty(node);
                Ok(node)
            }
            Edit::AppendChild { parent, node } => {
                let parent_kind = self.data_mut(parent)?.kind();
                let child_kind = node.kind();
                if !parent_kind.accepts_child(child_kind) {
                    return Err(DocumentError::InvalidChild {
                        parent: parent_kind,
                        child: child_kind,
                    });
                }

                let inline_source = match &node {
                    NodeData::Paragraph(p) => Some(p.raw().to_string()),
                    _ => None,
                };
                let id = self.push_node(parent, node, None);
                if let Some(raw) = inline_source {
                    attach_inlines(self, id, &raw, None);
                }
                self.mark_dirty(parent);
                log::trace!("appended {child_kind} {id} under {parent_kind} {parent}");
                Ok(id)
            }
        }
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData, DocumentError> {
        self.nodes
            .get_mut(id.index())
            .map(|e| &mut e.data)
            .ok_or(DocumentError::UnknownNode(id))
    }

    /// Flags `id` as edited and every ancestor as having an edited subtree.
    fn mark_dirty(&mut self, id: NodeId) {
        self.nodes[id.index()].dirty = true;
        let mut cur = Some(id);
        while let Some(at) = cur {
            let entry = &mut self.nodes[at.index()];
            entry.subtree_dirty = true;
            cur = entry.parent;
        }
    }
}

fn unsupported(data: &NodeData, capability: Capability) -> DocumentError {
    DocumentError::Unsupported {
        kind: data.kind(),
        capability,
    }
}
