use crate::document::Document;
use crate::node::{CodeBlock, Heading, NodeData, NodeId, Paragraph};
use crate::parsing::{attach_inlines, rope::Span};

use super::{classify::LineClass, kinds::CodeFence};

/// Builds the document tree from classified lines.
///
/// Works over the whole line list rather than a stream so an unterminated
/// fence can be rewound and its lines reparsed.
pub struct BlockBuilder {
    lines: Vec<LineClass>,
    pos: usize,
    doc: Document,
    /// Open headings, outermost first. The last entry receives new blocks.
    headings: Vec<(u8, NodeId)>,
}

impl BlockBuilder {
    pub fn new(lines: Vec<LineClass>) -> Self {
        Self {
            lines,
            pos: 0,
            doc: Document::new(),
            headings: vec![],
        }
    }

    pub fn finish(mut self) -> Document {
        self.doc.leading_trivia = self.take_blank_run();

        while self.pos < self.lines.len() {
            if self.try_fenced_code() || self.try_heading() {
                continue;
            }
            self.paragraph();
        }
        self.doc
    }

    /// Consumes consecutive blank lines and returns their text.
    fn take_blank_run(&mut self) -> String {
        let mut run = String::new();
        while let Some(line) = self.lines.get(self.pos).filter(|l| l.is_blank) {
            run.push_str(&line.text);
            self.pos += 1;
        }
        run
    }

    /// End offset of everything consumed so far.
    fn consumed_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .map_or(0, |last| self.lines[last].line.end)
    }

    fn parent(&self) -> NodeId {
        self.headings
            .last()
            .map_or(Document::ROOT, |&(_, id)| id)
    }

    /// Attaches a block spanning `start` to the current position and widens
    /// every open heading to cover it.
    fn attach(&mut self, data: NodeData, start: usize) -> NodeId {
        let end = self.consumed_end();
        let id = self
            .doc
            .push_node(self.parent(), data, Some(Span::new(start, end)));
        for &(_, heading) in &self.headings {
            if let Some(span) = &mut self.doc.nodes[heading.index()].span {
                span.end = end;
            }
        }
        id
    }

    /// Returns false, consuming nothing, when the current line is not an
    /// opening fence or no closing fence follows it.
    fn try_fenced_code(&mut self) -> bool {
        let open_idx = self.pos;
        let Some(open) = self.lines[open_idx].fence.clone() else {
            return false;
        };
        let Some(close_idx) =
            (open_idx + 1..self.lines.len()).find(|&i| CodeFence::closes(&open, &self.lines[i].text))
        else {
            log::trace!(
                "unterminated fence on line {}, reparsing as paragraph",
                self.lines[open_idx].number
            );
            return false;
        };

        let opening_raw = self.lines[open_idx].text.clone();
        let body: String = self.lines[open_idx + 1..close_idx]
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        let closing_raw = self.lines[close_idx].text.clone();
        let start = self.lines[open_idx].line.start;

        self.pos = close_idx + 1;
        let suffix = self.take_blank_run();
        let block = CodeBlock::from_parts(open, opening_raw, body, closing_raw, suffix);
        self.attach(NodeData::CodeBlock(block), start);
        true
    }

    fn try_heading(&mut self) -> bool {
        let Some(line) = self.lines[self.pos].heading.clone() else {
            return false;
        };
        let raw_line = self.lines[self.pos].text.clone();
        let start = self.lines[self.pos].line.start;
        let level = line.level;

        self.pos += 1;
        let suffix = self.take_blank_run();

        while self.headings.last().is_some_and(|&(open, _)| open >= level) {
            self.headings.pop();
        }
        let heading = Heading::from_line(line, raw_line, suffix);
        let id = self.attach(NodeData::Heading(heading), start);
        self.headings.push((level, id));
        true
    }

    /// The first line is always taken, so a rewound fence line lands here.
    fn paragraph(&mut self) {
        let first = self.pos;
        self.pos += 1;
        while self
            .lines
            .get(self.pos)
            .is_some_and(|l| !l.interrupts_paragraph())
        {
            self.pos += 1;
        }

        let raw: String = self.lines[first..self.pos]
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        let start = self.lines[first].line.start;
        let suffix = self.take_blank_run();

        let id = self.attach(
            NodeData::Paragraph(Paragraph::from_parts(raw.clone(), suffix)),
            start,
        );
        attach_inlines(&mut self.doc, id, &raw, Some(start));
    }
}
