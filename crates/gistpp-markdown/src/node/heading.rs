use crate::error::DocumentError;
use crate::parsing::blocks::kinds::{AtxHeading, HeadingLine};
use crate::trivia::{Trivia, split_trivia};

/// An ATX heading. Its section content is held as the node's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: u8,
    raw_line: String,
    prefix: String,
    title: Trivia,
    line_suffix: String,
    block_suffix: String,
}

impl Heading {
    pub(crate) fn from_line(line: HeadingLine, raw_line: String, block_suffix: String) -> Self {
        Self {
            level: line.level,
            raw_line,
            prefix: line.prefix,
            title: split_trivia(&line.title),
            line_suffix: line.line_suffix,
            block_suffix,
        }
    }

    /// A heading line `"<hashes> <title>\n"` followed by one blank line.
    pub fn new(level: u8, title: &str) -> Result<Self, DocumentError> {
        if !(1..=AtxHeading::MAX_LEVEL).contains(&level) {
            return Err(DocumentError::InvalidHeadingLevel(level));
        }
        let prefix = AtxHeading::prefix_for(level);
        let title = title.trim();
        Ok(Self {
            level,
            raw_line: format!("{prefix}{title}\n"),
            prefix,
            title: split_trivia(title),
            line_suffix: "\n".into(),
            block_suffix: "\n".into(),
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title.core
    }

    /// The heading line exactly as parsed.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Blank lines captured after the heading line.
    pub fn block_suffix(&self) -> &str {
        &self.block_suffix
    }

    pub(crate) fn set_title(&mut self, value: &str) {
        self.title.set_core(value);
    }

    /// Writes the heading line: the original while clean, otherwise rebuilt
    /// from prefix, title and line suffix.
    pub(crate) fn write_line(&self, dirty: bool, out: &mut String) {
        if !dirty {
            out.push_str(&self.raw_line);
            return;
        }
        out.push_str(&self.prefix);
        self.title.write_to(out);
        out.push_str(&self.line_suffix);
    }
}
