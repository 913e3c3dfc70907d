//! Span module - Source location tracking.
//!
//! This module provides types for representing source locations: the
//! [`SourceText`] buffer a lexer reads from, and the [`Span`] that every token
//! and diagnostic carries.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::span::{SourceText, Span};
//!
//! let source = SourceText::new("{ name }");
//! let span = Span::new(2, 6, 1, 3);
//! assert_eq!(&source.body()[span.start..span.end], "name");
//! ```

mod source_text;

pub use source_text::{SourceText, DEFAULT_SOURCE_NAME};

/// Source location span
///
/// A `Span` represents a half-open byte range in a [`SourceText`], plus the
/// 1-based line and column of its first byte.
///
/// # Examples
///
/// ```
/// use gqlc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
///
/// let point = Span::point(7, 2, 3);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Span of a diagnostic that has no source location
    ///
    /// ```
    /// use gqlc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} is after end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
