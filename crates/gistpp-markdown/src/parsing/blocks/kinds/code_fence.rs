use std::sync::OnceLock;

use regex::Regex;

/// Which delimiter character a fence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c {
            CodeFence::BACKTICK => Some(FenceKind::Backticks),
            CodeFence::TILDE => Some(FenceKind::Tildes),
            _ => None,
        }
    }
}

/// A fence line split into its parts.
///
/// For an opening line `rest` is the info string exactly as written
/// (including any space after the fence); for a closing line it is whatever
/// trails the fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceLine {
    pub indent: String,
    pub kind: FenceKind,
    pub len: usize,
    pub rest: String,
    pub eol: String,
}

impl FenceLine {
    /// The delimiter run, e.g. "````".
    pub fn fence(&self) -> String {
        self.kind.marker().to_string().repeat(self.len)
    }

    /// Rebuilds the line from its parts.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.indent);
        out.push_str(&self.fence());
        out.push_str(&self.rest);
        out.push_str(&self.eol);
    }

    /// A plain three-backtick line; used when a line cannot be split.
    fn fallback(line: &str) -> Self {
        Self {
            indent: String::new(),
            kind: FenceKind::Backticks,
            len: CodeFence::MIN_LEN,
            rest: String::new(),
            eol: if line.ends_with('\n') { "\n".into() } else { String::new() },
        }
    }
}

/// Fenced code block syntax.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    fn line_regex() -> &'static Regex {
        static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        FENCE_REGEX.get_or_init(|| {
            Regex::new(r"^([ \t]*)(`{3,}|~{3,})([^\r\n]*)(\r?\n)?$").expect("Invalid fence regex")
        })
    }

    /// Matches an opening fence: optional indentation, 3+ backticks or
    /// tildes, then an info string up to the line ending.
    pub fn open(line: &str) -> Option<FenceLine> {
        let caps = Self::line_regex().captures(line)?;
        let fence = &caps[2];
        let kind = FenceKind::from_marker(fence.chars().next()?)?;
        Some(FenceLine {
            indent: caps[1].to_string(),
            kind,
            len: fence.len(),
            rest: caps[3].to_string(),
            eol: caps.get(4).map_or("", |m| m.as_str()).to_string(),
        })
    }

    /// Splits a line already known to be a fence. A closing line may end in
    /// a bare `\r`, which the opening pattern does not accept.
    pub fn split_line(line: &str) -> FenceLine {
        if let Some(parts) = Self::open(line) {
            return parts;
        }
        if let Some(body) = line.strip_suffix('\r')
            && let Some(mut parts) = Self::open(body)
        {
            parts.eol.push('\r');
            return parts;
        }
        FenceLine::fallback(line)
    }

    /// True if `line` closes a block opened by `open`: same fence character,
    /// run at least as long as the opener. Indentation and anything after the
    /// run are ignored.
    pub fn closes(open: &FenceLine, line: &str) -> bool {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        let rest = body.trim_start_matches([' ', '\t']);
        let marker = open.kind.marker();
        let run = rest.chars().take_while(|&c| c == marker).count();
        run >= open.len && !rest[run..].contains(['\r', '\n'])
    }
}
