/// A paragraph. Its text lives in its inline children; the node itself keeps
/// the original content and the blank lines that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    raw: String,
    block_suffix: String,
}

impl Paragraph {
    pub(crate) fn from_parts(raw: String, block_suffix: String) -> Self {
        Self { raw, block_suffix }
    }

    /// A paragraph ending in a newline followed by one blank line.
    pub fn new(text: &str) -> Self {
        let mut raw = text.to_string();
        if !raw.ends_with('\n') {
            raw.push('\n');
        }
        Self {
            raw,
            block_suffix: "\n".into(),
        }
    }

    /// The paragraph content exactly as parsed, without the block suffix.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn block_suffix(&self) -> &str {
        &self.block_suffix
    }
}
