use crate::trivia::{Trivia, split_trivia};

/// An inline link `[label](href)` or image `![label](href)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    raw: String,
    image: bool,
    label: Trivia,
    href: Trivia,
}

impl Link {
    pub(crate) fn from_parts(raw: &str, label: &str, href: &str, image: bool) -> Self {
        Self {
            raw: raw.to_string(),
            image,
            label: split_trivia(label),
            href: split_trivia(href),
        }
    }

    pub fn new(label: &str, href: &str, image: bool) -> Self {
        let bang = if image { "!" } else { "" };
        let (label, href) = (label.trim(), href.trim());
        Self::from_parts(&format!("{bang}[{label}]({href})"), label, href, image)
    }

    pub fn is_image(&self) -> bool {
        self.image
    }

    pub fn label(&self) -> &str {
        &self.label.core
    }

    pub fn href(&self) -> &str {
        &self.href.core
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The label including any whitespace inside the brackets.
    pub fn full_label(&self) -> String {
        self.label.joined()
    }

    pub(crate) fn set_label(&mut self, value: &str) {
        self.label.set_core(value);
    }

    pub(crate) fn set_href(&mut self, value: &str) {
        self.href.set_core(value);
    }

    pub(crate) fn write_to(&self, dirty: bool, out: &mut String) {
        if !dirty {
            out.push_str(&self.raw);
            return;
        }
        if self.image {
            out.push('!');
        }
        out.push('[');
        self.label.write_to(out);
        out.push_str("](");
        self.href.write_to(out);
        out.push(')');
    }
}
