//! Name lexing.

use crate::chars::is_name_continue;
use crate::token::{Token, TokenKind};
use crate::LexerState;

impl<'a> LexerState<'a> {
    /// Lexes a name: `[_A-Za-z][_0-9A-Za-z]*`.
    ///
    /// Keywords are ordinary names at this level.
    pub(crate) fn lex_name(&mut self) -> Token {
        self.cursor.bump();
        while self.cursor.peek().is_some_and(is_name_continue) {
            self.cursor.bump();
        }
        let value = self.cursor.slice_from(self.token_start).to_string();
        self.make_token(TokenKind::Name, Some(value))
    }
}
