/// A byte range `[start, end)` into a document's text.
///
/// Parsed links store spans rather than copied text, so the rewriter can
/// splice replacements at the exact position of each occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `source`.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
