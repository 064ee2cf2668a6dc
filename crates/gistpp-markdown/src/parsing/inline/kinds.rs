//! Inline delimiters. The scanner refers to these and never hardcodes them.

/// Link and image syntax: `[label](href)` and `![label](href)`.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const IMAGE_OPEN: &'static [u8; 2] = b"![";
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}
