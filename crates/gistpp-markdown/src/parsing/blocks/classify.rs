use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{AtxHeading, CodeFence, FenceLine, HeadingLine};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a fence line actually
/// opens a block is decided later by the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the source.
    pub line: Span,
    /// 1-based line number.
    pub number: usize,
    /// The raw line, line ending included.
    pub text: String,
    /// Whitespace followed by a line ending and nothing else.
    pub is_blank: bool,
    /// Set when the line has the shape of an opening fence.
    pub fence: Option<FenceLine>,
    /// Set when the line is an ATX heading.
    pub heading: Option<HeadingLine>,
}

impl LineClass {
    /// Lines that end a running paragraph.
    pub fn interrupts_paragraph(&self) -> bool {
        self.is_blank || self.fence.is_some() || self.heading.is_some()
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    fn blank_regex() -> &'static Regex {
        static BLANK_REGEX: OnceLock<Regex> = OnceLock::new();
        BLANK_REGEX.get_or_init(|| Regex::new(r"^[ \t]*\r?\n$").expect("Invalid blank line regex"))
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// A whitespace-only final line with no line ending is not blank; it
    /// falls through to paragraph content.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let is_blank = Self::blank_regex().is_match(&lr.text);
        let (fence, heading) = if is_blank {
            (None, None)
        } else {
            (CodeFence::open(&lr.text), AtxHeading::parse(&lr.text))
        };

        LineClass {
            line: lr.span,
            number: lr.number,
            text: lr.text.clone(),
            is_blank,
            fence,
            heading,
        }
    }
}
