//! Token definitions.
//!
//! A [`Token`] is an immutable record of one lexical unit. Tokens live in the
//! lexer's arena and refer to their neighbours through [`TokenId`] links; the
//! forward link is written once, when the following token is produced.

use std::fmt;

use gqlc_util::span::Span;
use serde::Serialize;

gqlc_util::define_idx!(
    /// Index of a token in the lexer's token arena.
    TokenId
);

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Synthetic start-of-input token
    Sof,
    /// End of input
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `|`
    Pipe,
    /// `}`
    BraceR,
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    /// Integer literal
    Int,
    /// Float literal
    Float,
    /// Quoted string literal
    String,
    /// `#` comment
    Comment,
}

impl TokenKind {
    /// Human readable description used in diagnostics.
    ///
    /// ```
    /// use gqlc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Sof.description(), "<SOF>");
    /// assert_eq!(TokenKind::Spread.description(), "...");
    /// assert_eq!(TokenKind::Name.description(), "Name");
    /// ```
    pub const fn description(self) -> &'static str {
        match self {
            TokenKind::Sof => "<SOF>",
            TokenKind::Eof => "<EOF>",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceR => "}",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Comment => "Comment",
        }
    }

    /// Maps a single-character punctuator to its kind.
    ///
    /// The spread (`...`) is not included; it needs three characters.
    pub fn from_punctuator(byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b'!' => TokenKind::Bang,
            b'$' => TokenKind::Dollar,
            b'(' => TokenKind::ParenL,
            b')' => TokenKind::ParenR,
            b':' => TokenKind::Colon,
            b'=' => TokenKind::Equals,
            b'@' => TokenKind::At,
            b'[' => TokenKind::BracketL,
            b']' => TokenKind::BracketR,
            b'{' => TokenKind::BraceL,
            b'|' => TokenKind::Pipe,
            b'}' => TokenKind::BraceR,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether tokens of this kind carry a literal value.
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Comment
        )
    }

    /// Punctuator kinds, the spread included.
    pub const fn is_punctuator(self) -> bool {
        !self.has_value() && !matches!(self, TokenKind::Sof | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One lexical unit.
///
/// `start..end` is a half-open byte range into the source; `line` and
/// `column` are 1-based and locate `start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip)]
    id: TokenId,
    #[serde(skip)]
    prev: Option<TokenId>,
    #[serde(skip)]
    next: Option<TokenId>,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        start: usize,
        end: usize,
        line: u32,
        column: u32,
        value: Option<String>,
    ) -> Self {
        debug_assert!(end >= start);
        debug_assert!(line >= 1 && column >= 1);
        debug_assert_eq!(kind.has_value(), value.is_some());
        Self {
            kind,
            start,
            end,
            line,
            column,
            value,
            id: TokenId(0),
            prev: None,
            next: None,
        }
    }

    /// The synthetic token every chain starts with.
    pub(crate) fn start_of_input() -> Self {
        Self::new(TokenKind::Sof, 0, 0, 1, 1, None)
    }

    /// The kind of this token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// 1-based line of `start`.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of `start`.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Literal value of names, numbers, strings and comments.
    ///
    /// Strings hold their decoded value, comments the text after `#`.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Slot of this token in the lexer's arena.
    #[inline]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The token produced before this one, comments included.
    #[inline]
    pub fn prev(&self) -> Option<TokenId> {
        self.prev
    }

    /// The token produced after this one, as of when this copy was taken.
    ///
    /// The link is written once the following token is read, so a clone kept
    /// from an earlier `advance` may still hold `None`; ask
    /// [`LexerState::next_of`](crate::LexerState::next_of) for the current
    /// link.
    #[inline]
    pub fn next(&self) -> Option<TokenId> {
        self.next
    }

    /// Location of this token for diagnostics.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end, self.line, self.column)
    }

    pub(crate) fn set_id(&mut self, id: TokenId) {
        self.id = id;
    }

    pub(crate) fn set_prev(&mut self, prev: TokenId) {
        self.prev = Some(prev);
    }

    pub(crate) fn link_next(&mut self, next: TokenId) {
        debug_assert!(self.next.is_none(), "forward link is written once");
        self.next = Some(next);
    }

    pub(crate) fn unlink_next(&mut self) {
        self.next = None;
    }
}

/// `Name "foo"`, or just the kind for tokens without a value.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{}\"", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
