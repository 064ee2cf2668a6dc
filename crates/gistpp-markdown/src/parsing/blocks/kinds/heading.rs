use std::sync::OnceLock;

use regex::Regex;

/// An ATX heading line split into its parts.
///
/// `prefix + title + line_suffix` reproduces the line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    pub level: u8,
    /// Indentation, hashes and the separating whitespace.
    pub prefix: String,
    pub title: String,
    /// Trailing blanks plus the line ending.
    pub line_suffix: String,
}

/// ATX heading syntax (`#` through `######`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn line_regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| {
            Regex::new(r"^([ \t]*)(#{1,6})([ \t]+)(.*?)([ \t]*)(\r?\n)?$")
                .expect("Invalid heading regex")
        })
    }

    /// Matches 1-6 hashes followed by required whitespace and a title.
    pub fn parse(line: &str) -> Option<HeadingLine> {
        let caps = Self::line_regex().captures(line)?;
        let eol = caps.get(6).map_or("", |m| m.as_str());
        Some(HeadingLine {
            level: caps[2].len() as u8,
            prefix: format!("{}{}{}", &caps[1], &caps[2], &caps[3]),
            title: caps[4].to_string(),
            line_suffix: format!("{}{eol}", &caps[5]),
        })
    }

    /// The canonical prefix for a new heading, e.g. `"## "`.
    pub fn prefix_for(level: u8) -> String {
        format!("{} ", Self::MARKER.to_string().repeat(usize::from(level)))
    }
}
