//! Lexical errors.
//!
//! Every error carries the byte offset it was detected at. Scanning stops at
//! the first error; nothing is recovered or retried.

use gqlc_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet};
use gqlc_util::span::{SourceText, Span};
use thiserror::Error;

use crate::chars::describe_char;

/// Result alias for lexer operations.
pub type LexResult<T> = Result<T, LexError>;

/// Why a character was unexpected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnexpectedReason {
    /// No token starts with this character.
    NoTokenStart,
    /// A number needed a digit here.
    ExpectedDigit,
    /// A digit followed a leading `0`.
    DigitAfterZero,
}

impl UnexpectedReason {
    fn message(self, ch: Option<char>) -> String {
        let found = describe_char(ch);
        match self {
            UnexpectedReason::NoTokenStart => format!("Unexpected character: {}.", found),
            UnexpectedReason::ExpectedDigit => {
                format!("Invalid number, expected digit but got: {}.", found)
            },
            UnexpectedReason::DigitAfterZero => {
                format!("Invalid number, unexpected digit after 0: {}.", found)
            },
        }
    }
}

/// Errors produced while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A control character that may not appear in source text.
    #[error("Invalid character: {}.", describe_char(Some(.ch.to_owned())))]
    InvalidCharacter {
        /// Offset of the character
        position: usize,
        /// The character
        ch: char,
    },

    /// A character that no rule accepts here. `ch` is `None` at end of input.
    #[error("{}", .reason.message(.ch.to_owned()))]
    UnexpectedCharacter {
        /// Offset of the character
        position: usize,
        /// The character, if any
        ch: Option<char>,
        /// Which rule rejected it
        reason: UnexpectedReason,
    },

    /// The input ended where more characters were required.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Offset of the end of input
        position: usize,
    },

    /// An unknown or malformed escape inside a string.
    #[error("Invalid character escape sequence: {sequence}.")]
    InvalidCharacterEscapeSequence {
        /// Offset of the backslash
        position: usize,
        /// The sequence as written, backslash included
        sequence: String,
    },

    /// A string without a closing quote on its line.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Offset where scanning stopped
        position: usize,
    },
}

impl LexError {
    /// Byte offset the error was detected at.
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. }
            | LexError::UnexpectedCharacter { position, .. }
            | LexError::UnexpectedEndOfInput { position }
            | LexError::InvalidCharacterEscapeSequence { position, .. }
            | LexError::UnterminatedString { position } => *position,
        }
    }

    /// Diagnostic code of this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidCharacter { .. } => DiagnosticCode::E_LEXER_INVALID_CHAR,
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnexpectedEndOfInput { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_EOF,
            LexError::InvalidCharacterEscapeSequence { .. } => {
                DiagnosticCode::E_LEXER_INVALID_ESCAPE
            },
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Bytes of source the error points at.
    fn width(&self) -> usize {
        match self {
            LexError::InvalidCharacter { ch, .. } => ch.len_utf8(),
            LexError::UnexpectedCharacter { ch, .. } => ch.map_or(0, char::len_utf8),
            LexError::InvalidCharacterEscapeSequence { sequence, .. } => sequence.len(),
            LexError::UnexpectedEndOfInput { .. } | LexError::UnterminatedString { .. } => 0,
        }
    }

    /// Resolves the error against its source for display.
    ///
    /// ```
    /// use gqlc_lex::tokenize;
    /// use gqlc_util::span::SourceText;
    ///
    /// let source = SourceText::with_name("query.graphql", "{ ? }");
    /// let error = tokenize(&source).unwrap_err();
    /// let diagnostic = error.to_diagnostic(&source);
    /// assert_eq!((diagnostic.span.line, diagnostic.span.column), (1, 3));
    /// assert!(diagnostic.to_string().starts_with("error[E1002]: Unexpected character: \"?\"."));
    /// ```
    pub fn to_diagnostic(&self, source: &SourceText) -> Diagnostic {
        let start = self.position();
        let end = (start + self.width()).min(source.len());
        let (line, column) = source.line_col(start).unwrap_or((1, 1));
        let span = Span::new(start, end, line, column);

        let mut builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(span)
            .source_name(source.name());
        if let Ok(snippet) = SourceSnippet::from_source(source, span) {
            builder = builder.snippet(snippet);
        }
        if let Some(help) = self.help() {
            builder = builder.help(help);
        }
        builder.build()
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedCharacter {
                ch: Some('\''),
                reason: UnexpectedReason::NoTokenStart,
                ..
            } => Some("strings are delimited by double quotes (\")"),
            LexError::UnexpectedCharacter {
                ch: Some('.'),
                reason: UnexpectedReason::NoTokenStart,
                ..
            } => Some("a spread is written as three dots (...)"),
            LexError::UnterminatedString { .. } => {
                Some("strings cannot span lines; close the string with \" first")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LexError::InvalidCharacter {
            position: 0,
            ch: '\u{7}',
        };
        assert_eq!(err.to_string(), "Invalid character: \"\\u0007\".");

        let err = LexError::UnexpectedCharacter {
            position: 0,
            ch: Some('?'),
            reason: UnexpectedReason::NoTokenStart,
        };
        assert_eq!(err.to_string(), "Unexpected character: \"?\".");

        let err = LexError::UnexpectedCharacter {
            position: 2,
            ch: None,
            reason: UnexpectedReason::ExpectedDigit,
        };
        assert_eq!(
            err.to_string(),
            "Invalid number, expected digit but got: <EOF>."
        );

        let err = LexError::UnexpectedCharacter {
            position: 1,
            ch: Some('1'),
            reason: UnexpectedReason::DigitAfterZero,
        };
        assert_eq!(
            err.to_string(),
            "Invalid number, unexpected digit after 0: \"1\"."
        );

        let err = LexError::InvalidCharacterEscapeSequence {
            position: 1,
            sequence: "\\q".into(),
        };
        assert_eq!(err.to_string(), "Invalid character escape sequence: \\q.");
        assert_eq!(
            LexError::UnterminatedString { position: 3 }.to_string(),
            "Unterminated string."
        );
    }

    #[test]
    fn test_position_and_code() {
        let err = LexError::UnexpectedEndOfInput { position: 9 };
        assert_eq!(err.position(), 9);
        assert_eq!(err.code(), DiagnosticCode::E_LEXER_UNEXPECTED_EOF);
        let err = LexError::UnterminatedString { position: 4 };
        assert_eq!(err.code().as_str(), "E1005");
    }

    #[test]
    fn test_to_diagnostic_on_second_line() {
        let source = SourceText::with_name("q.graphql", "{\n  \"\\uZZZZ\" }");
        let err = LexError::InvalidCharacterEscapeSequence {
            position: 5,
            sequence: "\\uZZZZ".into(),
        };
        let diag = err.to_diagnostic(&source);
        assert_eq!(diag.span, Span::new(5, 11, 2, 4));
        assert_eq!(diag.source_name.as_deref(), Some("q.graphql"));
        assert_eq!(
            diag.to_string(),
            "error[E1004]: Invalid character escape sequence: \\uZZZZ.\n  --> q.graphql:2:4\n  2 |   \"\\uZZZZ\" }\n    |    ^^^^^^"
        );
    }

    #[test]
    fn test_to_diagnostic_at_end_of_input() {
        let source = SourceText::new("\"abc");
        let diag = LexError::UnterminatedString { position: 4 }.to_diagnostic(&source);
        assert_eq!(diag.span, Span::point(4, 1, 5));
        assert_eq!(diag.helps.len(), 1);
        assert_eq!(diag.source_name.as_deref(), Some("GraphQL request"));
    }

    #[test]
    fn test_single_quote_help() {
        let source = SourceText::new("'a'");
        let err = LexError::UnexpectedCharacter {
            position: 0,
            ch: Some('\''),
            reason: UnexpectedReason::NoTokenStart,
        };
        let diag = err.to_diagnostic(&source);
        assert!(diag.helps[0].contains("double quotes"));
    }
}
