/// An inclusive, 1-based range of source lines `[start, end]`.
///
/// Blocks carry their line span so diagnostics and snapshots can point back
/// at the original document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSpan {
    /// First line of the block (1-based).
    pub start: usize,
    /// Last line of the block (1-based, inclusive).
    pub end: usize,
}

impl LineSpan {
    /// A span covering exactly one line.
    #[must_use]
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    #[must_use]
    pub fn contains(self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}
