/// A byte cursor over document text.
///
/// Delimiters are all ASCII, so every position the parser stops at is a
/// char boundary even when the surrounding text is multi-byte UTF-8.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte offset into the text.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// True when the cursor sits on a line break (or the end of input).
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n') | Some(b'\r'))
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Callers only skip over delimiters they have
    /// already matched with [`Cursor::starts_with`].
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn starts_with_link_delimiters() {
        let cur = Cursor::new("[[link]]");
        assert!(cur.starts_with(b"[["));
        assert!(!cur.starts_with(b"]]"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(5);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn line_end_detection() {
        let mut cur = Cursor::new("a\r\nb");
        assert!(!cur.at_line_end());
        cur.bump();
        assert!(cur.at_line_end());
        cur.bump_n(3);
        assert!(cur.at_line_end());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}
