//! Dirty-tracking serializer.
//!
//! A clean node replays the text it was parsed from. A dirty node rebuilds
//! its text from its fields while keeping the whitespace captured around
//! them. A paragraph is the smallest unit that switches between the two:
//! once anything inside it changes, it is written as the concatenation of
//! its children.

use crate::document::Document;
use crate::node::{NodeData, NodeId};

/// Appends the serialization of `id` and its subtree to `out`.
pub(crate) fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let entry = doc.entry(id);
    match &entry.data {
        NodeData::Root => {
            out.push_str(doc.leading_trivia());
            write_children(doc, id, out);
        }
        NodeData::Heading(heading) => {
            // Only the heading's own flag decides its line; dirty children
            // are handled by their own writers.
            heading.write_line(entry.dirty, out);
            out.push_str(heading.block_suffix());
            write_children(doc, id, out);
        }
        NodeData::Paragraph(para) => {
            if entry.subtree_dirty {
                write_children(doc, id, out);
            } else {
                out.push_str(para.raw());
            }
            out.push_str(para.block_suffix());
        }
        NodeData::Text(text) => text.write_to(entry.subtree_dirty, out),
        NodeData::Link(link) => link.write_to(entry.subtree_dirty, out),
        NodeData::CodeBlock(code) => code.write_to(entry.subtree_dirty, out),
    }
}

fn write_children(doc: &Document, id: NodeId, out: &mut String) {
    for &child in &doc.entry(id).children {
        write_node(doc, child, out);
    }
}

/// `text` without trailing `\r` and `\n`; other whitespace is kept.
pub fn trim_line_breaks(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}
