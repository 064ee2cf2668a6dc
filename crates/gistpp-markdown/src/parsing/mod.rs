//! # Parsing
//!
//! Text to [`Document`] in two phases: every line is classified on its own,
//! then a `BlockBuilder` assembles blocks and the heading hierarchy. Each
//! paragraph is scanned for links and images as it is attached.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use blocks::{BlockBuilder, MarkdownLineClassifier};
use inline::{InlineNode, parse_inline};
use rope::{Span, lines_with_spans};

use crate::document::Document;
use crate::node::{Link, NodeData, NodeId, TextLeaf};

/// Parses `markdown` into a document. Total: every input yields a tree whose
/// serialization reproduces the input.
pub fn parse_document(markdown: &str) -> Document {
    let rope = Rope::from(markdown);
    let classifier = MarkdownLineClassifier;
    let lines: Vec<_> = lines_with_spans(&rope)
        .map(|lr| classifier.classify(&lr))
        .collect();

    let line_starts = lines.iter().map(|l| l.line.start).collect();
    let line_count = lines.len();

    let mut doc = BlockBuilder::new(lines).finish();
    doc.line_starts = line_starts;
    doc.nodes[Document::ROOT.index()].span = Some(Span::new(0, markdown.len()));

    log::debug!(
        "parsed {} bytes, {} lines into {} nodes",
        markdown.len(),
        line_count,
        doc.node_count()
    );
    doc
}

/// Scans `raw` and attaches its text, link and image leaves under `para`.
///
/// `base` is where `raw` starts in the parsed source; appended paragraphs
/// have none and their leaves get no span.
pub(crate) fn attach_inlines(doc: &mut Document, para: NodeId, raw: &str, base: Option<usize>) {
    for token in parse_inline(0, raw) {
        let data = match &token {
            InlineNode::Text(sp) => NodeData::Text(TextLeaf::new(&raw[sp.start..sp.end])),
            InlineNode::Link {
                full,
                label,
                href,
                image,
            } => NodeData::Link(Link::from_parts(
                &raw[full.start..full.end],
                &raw[label.start..label.end],
                &raw[href.start..href.end],
                *image,
            )),
        };
        let span = base.map(|b| token.span().offset(b));
        doc.push_node(para, data, span);
    }
}
