//! Byte cursor for traversing source text.
//!
//! Every character that can start, end or delimit a token is ASCII, so the
//! lexer walks the UTF-8 bytes of the source directly. Multi-byte characters
//! are only ever copied through (inside strings and comments) or decoded for
//! an error message, never split.

/// A cursor over the bytes of a source text.
///
/// # Example
///
/// ```
/// use gqlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("{ a }", 0);
/// assert_eq!(cursor.peek(), Some(b'{'));
/// cursor.bump();
/// assert_eq!(cursor.peek(), Some(b' '));
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    body: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at `position`.
    pub fn new(body: &'a str, position: usize) -> Self {
        debug_assert!(position <= body.len());
        Self { body, position }
    }

    /// The whole source text.
    #[inline]
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute offset.
    #[inline]
    pub fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.body.len());
        self.position = position;
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.body.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `offset` bytes ahead of the cursor.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.body.as_bytes().get(self.position + offset).copied()
    }

    /// Advances one byte. Does nothing at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if self.position < self.body.len() {
            self.position += 1;
        }
    }

    /// Advances `count` bytes, stopping at end of input.
    #[inline]
    pub fn bump_n(&mut self, count: usize) {
        self.position = (self.position + count).min(self.body.len());
    }

    /// Consumes the current byte if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Decodes the full character starting at `position`.
    ///
    /// Used to describe the offending character in errors; `position` must lie
    /// on a character boundary.
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.body.get(position..).and_then(|rest| rest.chars().next())
    }

    /// Text between `start` and the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.body[start..self.position]
    }

    /// Text between two offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.body[start..end]
    }
}
