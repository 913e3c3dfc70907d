//! Core error types for gqlc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source text lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Offset past the end of the text
    #[error("Offset out of bounds: {offset} (source `{name}` has {len} bytes)")]
    OffsetOutOfBounds {
        /// Source name
        name: String,
        /// Requested offset
        offset: usize,
        /// Length of the text in bytes
        len: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested 1-based line
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for source text operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
