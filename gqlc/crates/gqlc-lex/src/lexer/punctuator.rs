//! Punctuator lexing.

use crate::error::{LexResult, UnexpectedReason};
use crate::token::{Token, TokenKind};
use crate::LexerState;

impl<'a> LexerState<'a> {
    /// Lexes a single-character punctuator.
    pub(crate) fn lex_punctuator(&mut self, kind: TokenKind) -> Token {
        self.cursor.bump();
        self.make_token(kind, None)
    }

    /// Lexes `...`.
    ///
    /// A lone `.` or `..` starts no token and is rejected at the first dot.
    pub(crate) fn lex_spread(&mut self) -> LexResult<Token> {
        if self.cursor.peek_at(1) == Some(b'.') && self.cursor.peek_at(2) == Some(b'.') {
            self.cursor.bump_n(3);
            Ok(self.make_token(TokenKind::Spread, None))
        } else {
            Err(self.unexpected_character(UnexpectedReason::NoTokenStart))
        }
    }
}
