use crate::parsing::blocks::kinds::{CodeFence, FenceLine};

/// A fenced code block.
///
/// The opening and closing lines are kept verbatim and also split into
/// parts so the info string can be rewritten. `Text` on a code block means
/// the body between the fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    opening_raw: String,
    opening: FenceLine,
    body_original: String,
    body: String,
    closing_raw: String,
    closing: FenceLine,
    block_suffix: String,
}

impl CodeBlock {
    pub(crate) fn from_parts(
        opening: FenceLine,
        opening_raw: String,
        body: String,
        closing_raw: String,
        block_suffix: String,
    ) -> Self {
        let closing = CodeFence::split_line(&closing_raw);
        Self {
            opening_raw,
            opening,
            body_original: body.clone(),
            body,
            closing_raw,
            closing,
            block_suffix,
        }
    }

    /// A backtick block. The fence is made longer than any backtick run that
    /// starts a body line so the body cannot close it early.
    pub fn new(info: &str, body: &str) -> Self {
        let mut body = body.to_string();
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        let longest_run = body
            .lines()
            .map(|l| {
                l.trim_start_matches([' ', '\t'])
                    .chars()
                    .take_while(|&c| c == CodeFence::BACKTICK)
                    .count()
            })
            .max()
            .unwrap_or(0);
        let fence = CodeFence::BACKTICK
            .to_string()
            .repeat(CodeFence::MIN_LEN.max(longest_run + 1));
        let opening_raw = format!("{fence}{}\n", info.trim());
        let closing_raw = format!("{fence}\n");
        let opening = CodeFence::split_line(&opening_raw);
        Self::from_parts(opening, opening_raw, body, closing_raw, "\n".into())
    }

    /// The code between the fences, reflecting any edit.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The info string without surrounding whitespace.
    pub fn info_string(&self) -> &str {
        self.opening.rest.trim()
    }

    pub fn fence(&self) -> &FenceLine {
        &self.opening
    }

    pub fn opening_raw(&self) -> &str {
        &self.opening_raw
    }

    pub fn closing_raw(&self) -> &str {
        &self.closing_raw
    }

    pub fn block_suffix(&self) -> &str {
        &self.block_suffix
    }

    pub(crate) fn set_body(&mut self, value: &str) {
        self.body = value.to_string();
    }

    /// Stores the info string separated from the fence by one space, or
    /// nothing when `value` is blank.
    pub(crate) fn set_info_string(&mut self, value: &str) {
        let value = value.trim();
        self.opening.rest = if value.is_empty() {
            String::new()
        } else {
            format!(" {value}")
        };
    }

    pub(crate) fn write_to(&self, dirty: bool, out: &mut String) {
        if dirty {
            self.opening.write_to(out);
            out.push_str(&self.body);
            self.closing.write_to(out);
        } else {
            out.push_str(&self.opening_raw);
            out.push_str(&self.body_original);
            out.push_str(&self.closing_raw);
        }
        out.push_str(&self.block_suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(open: &str, body: &str, close: &str) -> CodeBlock {
        CodeBlock::from_parts(
            CodeFence::open(open).unwrap(),
            open.into(),
            body.into(),
            close.into(),
            "\n".into(),
        )
    }

    #[test]
    fn clean_block_replays_original() {
        let block = parsed("  ```rust  \n", "fn main() {}\n", "  ```  \n");
        let mut out = String::new();
        block.write_to(false, &mut out);
        assert_eq!(out, "  ```rust  \nfn main() {}\n  ```  \n\n");
    }

    #[test]
    fn edited_body_keeps_fences() {
        let mut block = parsed("~~~~ py\n", "x = 1\n", "~~~~~\n");
        block.set_body("x = 2\n");
        let mut out = String::new();
        block.write_to(true, &mut out);
        assert_eq!(out, "~~~~ py\nx = 2\n~~~~~\n\n");
    }

    #[test]
    fn info_string_roundtrip() {
        let mut block = parsed("```  rust \n", "", "```\n");
        assert_eq!(block.info_string(), "rust");
        block.set_info_string(" toml ");
        assert_eq!(block.info_string(), "toml");
        let mut out = String::new();
        block.write_to(true, &mut out);
        assert_eq!(out, "``` toml\n```\n\n");
        block.set_info_string("   ");
        assert_eq!(block.fence().rest, "");
    }

    #[test]
    fn new_block_outgrows_inner_fences() {
        let block = CodeBlock::new("md", "```\ninner\n```");
        assert_eq!(block.opening_raw(), "````md\n");
        assert_eq!(block.closing_raw(), "````\n");
        assert_eq!(block.body(), "```\ninner\n```\n");
    }
}
