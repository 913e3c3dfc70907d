//! String literal lexing.
//!
//! Strings are single-line and double-quoted. The token value is the decoded
//! content: unescaped runs are copied through as slices and each escape is
//! decoded on its own.
//!
//! | Escape       | Value                   |
//! |--------------|-------------------------|
//! | `\"` `\\` `\/` | the character itself  |
//! | `\b` `\f`    | U+0008, U+000C          |
//! | `\n` `\r` `\t` | newline, return, tab  |
//! | `\uXXXX`     | the code point `XXXX`   |

use crate::chars::{
    combine_surrogates, decode_hex_quad, is_leading_surrogate, is_trailing_surrogate, HexQuad,
};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::LexerState;

/// Characters of a `\uXXXX` sequence.
const UNICODE_ESCAPE_LEN: usize = 6;

impl<'a> LexerState<'a> {
    /// Lexes a string literal, starting at the opening quote.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.bump();
        let mut value = String::new();
        let mut chunk_start = self.cursor.position();

        loop {
            let position = self.cursor.position();
            match self.cursor.peek() {
                None | Some(b'\n' | b'\r') => {
                    return Err(LexError::UnterminatedString { position });
                },
                Some(b'"') => {
                    value.push_str(self.cursor.slice(chunk_start, position));
                    self.cursor.bump();
                    return Ok(self.make_token(TokenKind::String, Some(value)));
                },
                Some(b'\\') => {
                    value.push_str(self.cursor.slice(chunk_start, position));
                    value.push(self.read_escape()?);
                    chunk_start = self.cursor.position();
                },
                Some(byte) if byte < 0x20 && byte != b'\t' => {
                    return Err(LexError::InvalidCharacter {
                        position,
                        ch: byte as char,
                    });
                },
                Some(_) => self.cursor.bump(),
            }
        }
    }

    /// Decodes the escape under the cursor and moves past it.
    fn read_escape(&mut self) -> LexResult<char> {
        let start = self.cursor.position();
        self.cursor.bump();
        let Some(byte) = self.cursor.peek() else {
            return Err(LexError::UnexpectedEndOfInput {
                position: self.cursor.position(),
            });
        };
        let decoded = match byte {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.read_unicode_escape(start),
            _ => return Err(self.invalid_escape(start, 2)),
        };
        self.cursor.bump();
        Ok(decoded)
    }

    /// Decodes `\uXXXX`, or a surrogate pair written as two such escapes.
    ///
    /// The cursor is on the `u`; `start` is the backslash.
    fn read_unicode_escape(&mut self, start: usize) -> LexResult<char> {
        let code = self.read_hex_quad(start)?;
        if let Some(ch) = char::from_u32(code) {
            return Ok(ch);
        }

        if is_leading_surrogate(code)
            && self.cursor.peek() == Some(b'\\')
            && self.cursor.peek_at(1) == Some(b'u')
        {
            let trailing_start = self.cursor.position();
            self.cursor.bump();
            let trailing = self.read_hex_quad(trailing_start)?;
            if is_trailing_surrogate(trailing) {
                if let Some(ch) = combine_surrogates(code, trailing) {
                    return Ok(ch);
                }
            }
        }
        Err(self.invalid_escape(start, UNICODE_ESCAPE_LEN))
    }

    /// Reads the four digits after the `u` under the cursor.
    fn read_hex_quad(&mut self, start: usize) -> LexResult<u32> {
        let digits = &self.cursor.body().as_bytes()[self.cursor.position() + 1..];
        match decode_hex_quad(digits) {
            HexQuad::Value(code) => {
                self.cursor.bump_n(5);
                Ok(code)
            },
            HexQuad::Invalid => Err(self.invalid_escape(start, UNICODE_ESCAPE_LEN)),
            HexQuad::Truncated => Err(LexError::UnexpectedEndOfInput {
                position: self.cursor.body().len(),
            }),
        }
    }

    /// Error for the escape at `start`, quoting up to `len` characters of it.
    fn invalid_escape(&self, start: usize, len: usize) -> LexError {
        let sequence = self.cursor.body()[start..]
            .chars()
            .take(len)
            .take_while(|c| !c.is_control())
            .collect();
        LexError::InvalidCharacterEscapeSequence {
            position: start,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{LexError, LexResult};
    use crate::token::{Token, TokenKind};
    use crate::LexerState;
    use gqlc_util::span::SourceText;

    fn lex_str(text: &str) -> LexResult<Token> {
        LexerState::new(&SourceText::new(text)).advance().cloned()
    }

    fn value_of(text: &str) -> String {
        let token = lex_str(text).unwrap();
        assert_eq!(token.kind(), TokenKind::String);
        token.value().unwrap().to_string()
    }

    #[test]
    fn test_simple_string() {
        let token = lex_str("\"simple\"").unwrap();
        assert_eq!(token.value(), Some("simple"));
        assert_eq!((token.start(), token.end()), (0, 8));
        assert_eq!(value_of("\"\""), "");
        assert_eq!(value_of("\" white space \""), " white space ");
        assert_eq!(value_of("\"tab\there\""), "tab\there");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(value_of(r#""a\nb""#), "a\nb");
        assert_eq!(value_of(r#""a\nb""#).chars().count(), 3);
        assert_eq!(value_of(r#""\"\\\/""#), "\"\\/");
        assert_eq!(value_of(r#""\b\f\n\r\t""#), "\u{8}\u{c}\n\r\t");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(value_of(r#""\u0041""#), "A");
        assert_eq!(value_of(r#""x\u00e9\u00E9y""#), "x\u{e9}\u{e9}y");
        assert_eq!(value_of(r#""\uD83D\uDE00""#), "\u{1F600}");
    }

    #[test]
    fn test_non_ascii_is_copied_through() {
        assert_eq!(value_of("\"caf\u{e9} \u{1F600}\""), "caf\u{e9} \u{1F600}");
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(
            lex_str(r#""a\qb""#),
            Err(LexError::InvalidCharacterEscapeSequence {
                position: 2,
                sequence: "\\q".into(),
            })
        );
    }

    #[test]
    fn test_malformed_unicode_escape() {
        assert_eq!(
            lex_str(r#""\uZZZZ""#),
            Err(LexError::InvalidCharacterEscapeSequence {
                position: 1,
                sequence: "\\uZZZZ".into(),
            })
        );
        assert_eq!(
            lex_str(r#""\u12"""#),
            Err(LexError::InvalidCharacterEscapeSequence {
                position: 1,
                sequence: "\\u12\"\"".into(),
            })
        );
    }

    #[test]
    fn test_lone_surrogates() {
        assert_eq!(
            lex_str(r#""\uDE00""#).unwrap_err().to_string(),
            "Invalid character escape sequence: \\uDE00."
        );
        assert_eq!(lex_str(r#""\uD83Dx""#).unwrap_err().position(), 1);
        assert_eq!(lex_str(r#""\uD83D\u0041""#).unwrap_err().position(), 1);
        assert_eq!(lex_str(r#""\uD83D\uZZZZ""#).unwrap_err().position(), 7);
    }

    #[test]
    fn test_escape_at_end_of_input() {
        assert_eq!(
            lex_str("\"abc\\"),
            Err(LexError::UnexpectedEndOfInput { position: 5 })
        );
        assert_eq!(
            lex_str("\"\\u00"),
            Err(LexError::UnexpectedEndOfInput { position: 5 })
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            lex_str("\"abc"),
            Err(LexError::UnterminatedString { position: 4 })
        );
        assert_eq!(
            lex_str("\"abc\ndef\""),
            Err(LexError::UnterminatedString { position: 4 })
        );
        assert_eq!(
            lex_str("\"abc\r\""),
            Err(LexError::UnterminatedString { position: 4 })
        );
    }

    #[test]
    fn test_control_character_in_string() {
        assert_eq!(
            lex_str("\"a\u{1}b\""),
            Err(LexError::InvalidCharacter {
                position: 2,
                ch: '\u{1}'
            })
        );
    }
}
