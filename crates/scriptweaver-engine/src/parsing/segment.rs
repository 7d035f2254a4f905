use super::blocks::{
    Block,
    kinds::{NumberedHeading, SectionDivider},
};
use super::span::LineSpan;

/// Splits document text into candidate blocks.
///
/// Blank (whitespace-only) lines separate blocks. Inside a run of non-blank
/// lines, section dividers and numbered headings are peeled off into
/// singleton blocks so they never merge with neighbouring prose. Lines are
/// trimmed; order is preserved.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    numbered: NumberedHeading,
}

#[derive(Default)]
struct Run {
    lines: Vec<String>,
    start: usize,
    end: usize,
}

impl Run {
    fn push(&mut self, line_no: usize, line: &str) {
        if self.lines.is_empty() {
            self.start = line_no;
        }
        self.end = line_no;
        self.lines.push(line.to_string());
    }

    fn flush(&mut self, out: &mut Vec<Block>) {
        if self.lines.is_empty() {
            return;
        }
        out.push(Block {
            text: self.lines.join("\n"),
            lines: LineSpan {
                start: self.start,
                end: self.end,
            },
        });
        self.lines.clear();
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(&self, text: &str) -> Vec<Block> {
        let mut out = Vec::new();
        let mut run = Run::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                run.flush(&mut out);
                continue;
            }

            if SectionDivider::is_divider_line(line) || self.numbered.matches(line) {
                run.flush(&mut out);
                out.push(Block {
                    text: line.to_string(),
                    lines: LineSpan::single(line_no),
                });
                continue;
            }

            run.push(line_no, line);
        }

        run.flush(&mut out);
        out
    }
}
