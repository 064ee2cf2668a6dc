use crate::trivia::{Trivia, split_trivia};

/// A run of plain text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLeaf {
    raw: String,
    trivia: Trivia,
}

impl TextLeaf {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            trivia: split_trivia(raw),
        }
    }

    /// The text without surrounding whitespace.
    pub fn text(&self) -> &str {
        &self.trivia.core
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Current text including surrounding whitespace.
    pub fn full_text(&self) -> String {
        self.trivia.joined()
    }

    pub(crate) fn set_text(&mut self, value: &str) {
        self.trivia.set_core(value);
    }

    pub(crate) fn write_to(&self, dirty: bool, out: &mut String) {
        if dirty {
            self.trivia.write_to(out);
        } else {
            out.push_str(&self.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_keeps_whitespace() {
        let mut t = TextLeaf::new(" and \n");
        t.set_text("or");
        let mut out = String::new();
        t.write_to(true, &mut out);
        assert_eq!(out, " or \n");
        assert_eq!(t.raw(), " and \n");
    }
}
