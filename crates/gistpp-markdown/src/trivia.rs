//! Whitespace trivia around editable text.
//!
//! Fields that can be rewritten after parsing (heading titles, link labels,
//! link targets, text runs) are stored as a [`Trivia`] triple so an edit only
//! replaces the core and the surrounding whitespace survives byte-for-byte.

/// A raw string split into leading whitespace, core content and trailing
/// whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trivia {
    pub leading: String,
    pub core: String,
    pub trailing: String,
}

impl Trivia {
    /// Replaces the core, keeping the original surrounding whitespace.
    pub fn set_core(&mut self, value: &str) {
        self.core = value.trim().to_string();
    }

    /// Writes `leading + core + trailing` into `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.leading);
        out.push_str(&self.core);
        out.push_str(&self.trailing);
    }

    /// The recombined text.
    pub fn joined(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// Splits `raw` on the maximal whitespace run (newlines included) at each end.
///
/// An all-whitespace input is returned entirely as leading trivia.
pub fn split_trivia(raw: &str) -> Trivia {
    let after_leading = raw.trim_start();
    let leading = &raw[..raw.len() - after_leading.len()];
    let core = after_leading.trim_end();
    let trailing = &after_leading[core.len()..];
    Trivia {
        leading: leading.to_string(),
        core: core.to_string(),
        trailing: trailing.to_string(),
    }
}
