use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line of the source.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// 1-based line number.
    pub number: usize,
    /// The line text including its line ending.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// A line ends after `\n`, after `\r\n`, or after a `\r` that is not
/// followed by `\n`. Every line keeps its ending, so concatenating the
/// yielded texts reproduces the rope exactly.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..)
        .flat_map(|line| split_after_bare_cr(&line))
        .enumerate()
        .map(move |(idx, text)| {
            let start = offset;
            offset += text.len();
            LineRef {
                span: Span { start, end: offset },
                number: idx + 1,
                text,
            }
        })
}

/// `lines_raw` only breaks after `\n`; old Mac files end lines with `\r`.
fn split_after_bare_cr(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\r' && bytes.get(i + 1) != Some(&b'\n') {
            out.push(line[start..=i].to_string());
            start = i + 1;
        }
    }
    if start < line.len() {
        out.push(line[start..].to_string());
    }
    out
}
