use crate::parsing::rope::span::Span;

use super::{cursor::Cursor, kinds::LinkSyntax, types::InlineNode};

/// Scans paragraph content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute span positions)
/// - `s`: The paragraph content to scan
///
/// At each position an image is tried first, then a link. Matching is greedy
/// and non-recursive: the label ends at the first `]`, which must be followed
/// directly by `(`, and the target ends at the first `)` after that.
/// Unmatched input is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let found = try_parse_image(&mut cur).or_else(|| try_parse_link(&mut cur));
        if let Some(node) = found {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.advance();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(LinkSyntax::IMAGE_OPEN) {
        return None;
    }
    let start = cur.pos();
    attempt(cur, |cur| {
        cur.advance(); // !
        scan_link_body(cur, start, true)
    })
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(LinkSyntax::LABEL_OPEN) {
        return None;
    }
    let start = cur.pos();
    attempt(cur, |cur| scan_link_body(cur, start, false))
}

/// Runs `scan`, rewinding the cursor when it finds nothing.
fn attempt(
    cur: &mut Cursor<'_>,
    scan: impl FnOnce(&mut Cursor<'_>) -> Option<InlineNode>,
) -> Option<InlineNode> {
    let saved = cur.clone();
    let found = scan(cur);
    if found.is_none() {
        *cur = saved;
    }
    found
}

/// Scans `[label](href)` with the cursor on `[`, leaving it after `)`.
fn scan_link_body(cur: &mut Cursor<'_>, start: usize, image: bool) -> Option<InlineNode> {
    if !cur.eat(LinkSyntax::LABEL_OPEN) {
        return None;
    }
    let label = cur.take_until(LinkSyntax::LABEL_CLOSE)?;
    if !cur.eat(LinkSyntax::HREF_OPEN) {
        return None;
    }
    let href = cur.take_until(LinkSyntax::HREF_CLOSE)?;
    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        label,
        href,
        image,
    })
}
