use crate::parsing::rope::span::Span;

/// Byte cursor over paragraph content.
///
/// Positions reported by [`Cursor::pos`] and the spans from
/// [`Cursor::take_until`] are absolute source offsets (`base` + local index).
/// Only ASCII delimiters are matched, so every reported offset lies on a char
/// boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    base: usize,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Steps over one byte.
    pub fn advance(&mut self) {
        if !self.eof() {
            self.i += 1;
        }
    }

    /// Consumes `b` if it is the next byte.
    pub fn eat(&mut self, b: u8) -> bool {
        let hit = self.peek() == Some(b);
        if hit {
            self.i += 1;
        }
        hit
    }

    /// Consumes everything up to and including the next `b`, returning the
    /// span before it. Leaves the cursor untouched when there is no `b`.
    pub fn take_until(&mut self, b: u8) -> Option<Span> {
        let off = self.rest().iter().position(|&c| c == b)?;
        let start = self.pos();
        self.i += off;
        let span = Span::new(start, self.pos());
        self.i += 1;
        Some(span)
    }

    fn rest(&self) -> &'a [u8] {
        &self.s.as_bytes()[self.i..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_offset_by_base() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert_eq!(cur.peek(), Some(b'h'));
        cur.advance();
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut cur = Cursor::new("x", 0);
        cur.advance();
        cur.advance();
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn eat_only_matching_byte() {
        let mut cur = Cursor::new("[a", 0);
        assert!(!cur.eat(b'('));
        assert!(cur.eat(b'['));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn take_until_spans_the_gap() {
        let mut cur = Cursor::new("ab]cd)", 4);
        assert_eq!(cur.take_until(b']'), Some(Span::new(4, 6)));
        assert_eq!(cur.pos(), 7);
        assert_eq!(cur.take_until(b'x'), None);
        assert_eq!(cur.pos(), 7);
        assert_eq!(cur.take_until(b')'), Some(Span::new(7, 9)));
        assert!(cur.eof());
    }
}
