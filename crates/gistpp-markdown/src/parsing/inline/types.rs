use crate::parsing::rope::span::Span;

/// A scanned inline token with byte spans into the source.
///
/// The tokens of a paragraph tile its content exactly: concatenating the
/// `full` spans in order yields the paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any link or image.
    Text(Span),
    /// `[label](href)` or, with `image` set, `![label](href)`.
    Link {
        /// Full span including brackets, parentheses and any `!`.
        full: Span,
        /// Span between `[` and `]`.
        label: Span,
        /// Span between `(` and `)`.
        href: Span,
        image: bool,
    },
}

impl InlineNode {
    /// Extracts the full span from any variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Link { full, .. } => *full,
        }
    }
}
