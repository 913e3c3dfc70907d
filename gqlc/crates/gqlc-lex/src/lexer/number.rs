//! Number literal lexing.
//!
//! ```text
//! IntValue   : -? (0 | [1-9][0-9]*)
//! FloatValue : IntValue ( . [0-9]+ )? ( [eE] [+-]? [0-9]+ )?
//! ```
//!
//! A fractional or exponent part makes the literal a float. The value is the
//! literal text as written.

use crate::chars::is_digit;
use crate::error::{LexResult, UnexpectedReason};
use crate::token::{Token, TokenKind};
use crate::LexerState;

impl<'a> LexerState<'a> {
    /// Lexes an int or float literal.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let mut is_float = false;

        self.cursor.eat(b'-');
        if self.cursor.eat(b'0') {
            if self.cursor.peek().is_some_and(is_digit) {
                return Err(self.unexpected_character(UnexpectedReason::DigitAfterZero));
            }
        } else {
            self.read_digits()?;
        }

        if self.cursor.eat(b'.') {
            is_float = true;
            self.read_digits()?;
        }

        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            is_float = true;
            self.cursor.bump();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.bump();
            }
            self.read_digits()?;
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        let value = self.cursor.slice_from(self.token_start).to_string();
        Ok(self.make_token(kind, Some(value)))
    }

    /// Consumes one or more digits.
    fn read_digits(&mut self) -> LexResult<()> {
        if !self.cursor.peek().is_some_and(is_digit) {
            return Err(self.unexpected_character(UnexpectedReason::ExpectedDigit));
        }
        while self.cursor.peek().is_some_and(is_digit) {
            self.cursor.bump();
        }
        Ok(())
    }
}
