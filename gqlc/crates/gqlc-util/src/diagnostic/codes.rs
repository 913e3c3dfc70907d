//! Diagnostic codes for categorizing front-end errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation for a specific
//! error.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix, "E");
//! assert_eq!(code.number, 1005);
//! assert_eq!(code.as_str(), "E1005");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors and `number` is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a diagnostic code
    #[inline]
    const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // INPUT ERROR CODES (E0001-E0999)
    // =========================================================================

    /// E0001: A source file could not be read
    pub const E_SOURCE_UNREADABLE: Self = Self::new("E", 1);

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Invalid (control) character
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unexpected end of input
    pub const E_LEXER_UNEXPECTED_EOF: Self = Self::new("E", 1003);
    /// E1004: Lexer - Invalid character escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1004);
    /// E1005: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1005);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
