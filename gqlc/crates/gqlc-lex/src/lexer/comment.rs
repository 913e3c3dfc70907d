//! Ignored input and comments.
//!
//! Tabs, spaces, commas, line terminators and a byte order mark separate
//! tokens and are never emitted. `#` comments are emitted as tokens so they
//! stay reachable through the chain, but `advance` steps over them.

use crate::chars::is_allowed_control;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::LexerState;

impl<'a> LexerState<'a> {
    /// Skips ignored input, counting line terminators.
    ///
    /// `\r\n` is one terminator. Stops at the first byte that can start a
    /// token or at end of input.
    pub(crate) fn skip_ignored(&mut self) -> LexResult<()> {
        loop {
            match self.cursor.peek() {
                Some(b'\t' | b' ' | b',') => self.cursor.bump(),
                Some(0xEF) if self.at_bom() => self.cursor.bump_n(3),
                Some(b'\n') => {
                    self.cursor.bump();
                    self.start_line();
                },
                Some(b'\r') => {
                    self.cursor.bump();
                    self.cursor.eat(b'\n');
                    self.start_line();
                },
                Some(byte) if byte < 0x20 && !is_allowed_control(byte) => {
                    return Err(LexError::InvalidCharacter {
                        position: self.cursor.position(),
                        ch: byte as char,
                    });
                },
                _ => return Ok(()),
            }
        }
    }

    /// U+FEFF encoded as UTF-8.
    fn at_bom(&self) -> bool {
        self.cursor.peek_at(1) == Some(0xBB) && self.cursor.peek_at(2) == Some(0xBF)
    }

    fn start_line(&mut self) {
        self.line += 1;
        self.line_start = self.cursor.position();
    }

    /// Lexes a `#` comment up to the end of its line.
    ///
    /// The value is the text after `#`. A control character other than tab
    /// also ends the comment.
    pub(crate) fn lex_comment(&mut self) -> Token {
        self.cursor.bump();
        while let Some(byte) = self.cursor.peek() {
            if byte < 0x20 && byte != b'\t' {
                break;
            }
            self.cursor.bump();
        }
        let value = self.cursor.slice_from(self.token_start + 1).to_string();
        self.make_token(TokenKind::Comment, Some(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::LexerState;
    use gqlc_util::span::SourceText;

    #[test]
    fn test_separators_are_ignored() {
        let source = SourceText::new(" \t,,, a");
        let mut lexer = LexerState::new(&source);
        let token = lexer.advance().unwrap();
        assert_eq!(token.start(), 6);
        assert_eq!(token.column(), 7);
    }

    #[test]
    fn test_line_terminators() {
        let source = SourceText::new("\n\r\n\r a");
        let mut lexer = LexerState::new(&source);
        let token = lexer.advance().unwrap().clone();
        assert_eq!(token.line(), 4);
        assert_eq!(token.column(), 2);
        assert_eq!(lexer.line(), 4);
        assert_eq!(lexer.line_start(), 4);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let source = SourceText::new("\u{feff}{");
        let mut lexer = LexerState::new(&source);
        let token = lexer.advance().unwrap();
        assert_eq!(token.kind(), TokenKind::BraceL);
        assert_eq!(token.start(), 3);
    }

    #[test]
    fn test_invalid_control_character() {
        let source = SourceText::new("a \u{7}");
        let mut lexer = LexerState::new(&source);
        lexer.advance().unwrap();
        assert_eq!(
            lexer.advance().unwrap_err(),
            LexError::InvalidCharacter {
                position: 2,
                ch: '\u{7}'
            }
        );
    }

    #[test]
    fn test_comment_value_and_bounds() {
        let source = SourceText::new("#\tsome comment\r\nx");
        let mut lexer = LexerState::new(&source);
        let x = lexer.advance().unwrap().clone();
        assert_eq!(x.value(), Some("x"));
        assert_eq!(x.line(), 2);

        let comment = lexer.prev_of(&x).unwrap();
        assert_eq!(comment.kind(), TokenKind::Comment);
        assert_eq!(comment.value(), Some("\tsome comment"));
        assert_eq!((comment.start(), comment.end()), (0, 14));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let source = SourceText::new("# \u{e9}t\u{e9}");
        let mut lexer = LexerState::new(&source);
        let eof = lexer.advance().unwrap().clone();
        assert_eq!(eof.kind(), TokenKind::Eof);
        let comment = lexer.prev_of(&eof).unwrap();
        assert_eq!(comment.value(), Some(" \u{e9}t\u{e9}"));
    }

    #[test]
    fn test_control_character_ends_comment() {
        let source = SourceText::new("#ab\u{0}");
        let mut lexer = LexerState::new(&source);
        assert_eq!(
            lexer.advance().unwrap_err(),
            LexError::InvalidCharacter {
                position: 3,
                ch: '\u{0}'
            }
        );
    }
}
