use std::fmt::Write;

use crate::document::{Document, NodeRef};

/// Renders the tree one node per line, indented two spaces per level, with
/// each node's text in debug quotes when it has any.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    write_outline(doc.root(), 0, &mut out);
    out
}

fn write_outline(node: NodeRef<'_>, depth: usize, out: &mut String) {
    let text = node.text();
    let _ = write!(out, "{:indent$}{}", "", node.kind(), indent = depth * 2);
    if !text.is_empty() {
        let _ = write!(out, " {text:?}");
    }
    out.push('\n');
    for child in node.children() {
        write_outline(child, depth + 1, out);
    }
}
