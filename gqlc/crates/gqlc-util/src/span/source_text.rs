//! Named source text with a precomputed line table.
//!
//! [`SourceText`] is the immutable buffer a lexer scans. The name is only used
//! when rendering diagnostics; the line table lets a diagnostic turn a byte
//! offset back into a line, a column and the text of that line.

use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// Name given to sources created without one.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// An immutable text buffer plus its identifying name
///
/// Cloning is cheap: the body and line table are shared.
///
/// # Examples
///
/// ```
/// use gqlc_util::span::SourceText;
///
/// let source = SourceText::with_name("query.graphql", "{\n  me\n}");
/// assert_eq!(source.name(), "query.graphql");
/// assert_eq!(source.line_count(), 3);
/// assert_eq!(source.line_col(4).unwrap(), (2, 3));
/// ```
#[derive(Clone)]
pub struct SourceText {
    name: Arc<str>,
    body: Arc<str>,
    /// Offset of the first byte of every line
    line_starts: Arc<[usize]>,
}

impl SourceText {
    /// Create a source with the default name
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self::with_name(DEFAULT_SOURCE_NAME, body)
    }

    /// Create a source with an explicit name
    pub fn with_name(name: impl Into<Arc<str>>, body: impl Into<Arc<str>>) -> Self {
        let body = body.into();
        let line_starts = Self::line_starts(&body);
        Self {
            name: name.into(),
            body,
            line_starts,
        }
    }

    /// Compute line start offsets. `\n`, `\r\n` and a lone `\r` each end a line.
    fn line_starts(body: &str) -> Arc<[usize]> {
        let bytes = body.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    starts.push(i + 1);
                },
                _ => {},
            }
            i += 1;
        }
        starts.into()
    }

    /// The name used in diagnostics
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full text
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Length of the text in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Number of lines; an empty text has one line
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based `(line, column)` pair
    ///
    /// The offset one past the last byte is valid and names the end of input.
    pub fn line_col(&self, offset: usize) -> SourceResult<(u32, u32)> {
        if offset > self.body.len() {
            return Err(SourceError::OffsetOutOfBounds {
                name: self.name.to_string(),
                offset,
                len: self.body.len(),
            });
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point - 1,
        };
        let column = offset - self.line_starts[line] + 1;
        Ok((line as u32 + 1, column as u32))
    }

    /// Text of a 1-based line, without its terminator
    pub fn line_text(&self, line: usize) -> SourceResult<&str> {
        if line == 0 || line > self.line_starts.len() {
            return Err(SourceError::InvalidLineNumber {
                line,
                max_lines: self.line_starts.len(),
            });
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.body.len());
        Ok(self.body[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceText")
            .field("name", &self.name)
            .field("len", &self.body.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
