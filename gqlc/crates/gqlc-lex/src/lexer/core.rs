//! Core lexer implementation.
//!
//! This module contains the [`LexerState`] struct, its pull-based
//! [`advance`](LexerState::advance) entry point and the dispatch from the
//! first character of a token to the scanning routine that reads it.

use gqlc_util::index_vec::IndexVec;
use gqlc_util::span::SourceText;
use log::{debug, trace};

use crate::chars::is_name_start;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, UnexpectedReason};
use crate::options::LexOptions;
use crate::token::{Token, TokenId, TokenKind};

/// Lexer state for one source text.
///
/// Tokens are produced on demand and appended to an arena, each linked to
/// the token before it and, once it exists, the token after it. Comments are
/// kept in the chain but never returned by [`advance`](Self::advance).
///
/// # Example
///
/// ```
/// use gqlc_lex::{LexerState, TokenKind};
/// use gqlc_util::span::SourceText;
///
/// let source = SourceText::new("{ name }");
/// let mut lexer = LexerState::new(&source);
///
/// assert_eq!(lexer.advance().unwrap().kind(), TokenKind::BraceL);
/// assert_eq!(lexer.advance().unwrap().value(), Some("name"));
/// assert_eq!(lexer.advance().unwrap().kind(), TokenKind::BraceR);
/// assert_eq!(lexer.advance().unwrap().kind(), TokenKind::Eof);
/// ```
pub struct LexerState<'a> {
    /// Source being tokenized.
    source: &'a SourceText,

    /// Options the lexer was built with.
    options: LexOptions,

    /// Byte cursor used by the scanning routines.
    pub(crate) cursor: Cursor<'a>,

    /// Every token produced so far, in source order.
    tokens: IndexVec<TokenId, Token>,

    /// Token returned by the previous `advance`.
    last_token: TokenId,

    /// Token currently held.
    token: TokenId,

    /// Line the scanner is on (1-based).
    pub(crate) line: u32,

    /// Offset where that line begins.
    pub(crate) line_start: usize,

    /// Start offset of the token being scanned.
    pub(crate) token_start: usize,

    /// Set once the iterator has yielded end-of-input or an error.
    finished: bool,
}

/// Lexer position to restore when a scan fails.
#[derive(Clone, Copy)]
struct Checkpoint {
    line: u32,
    line_start: usize,
    len: TokenId,
}

impl<'a> LexerState<'a> {
    /// Creates a lexer with default options.
    pub fn new(source: &'a SourceText) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    /// Creates a lexer with the given options.
    pub fn with_options(source: &'a SourceText, options: LexOptions) -> Self {
        let mut tokens = IndexVec::new();
        let sof = tokens.push(Token::start_of_input());
        Self {
            source,
            options,
            cursor: Cursor::new(source.body(), 0),
            tokens,
            last_token: sof,
            token: sof,
            line: 1,
            line_start: 0,
            token_start: 0,
            finished: false,
        }
    }

    /// Advances to the next significant token and returns it.
    ///
    /// Comments are skipped. Once end-of-input is reached every further call
    /// returns the same end-of-input token. When scanning fails the lexer is
    /// left exactly as it was before the call.
    pub fn advance(&mut self) -> LexResult<&Token> {
        let checkpoint = self.checkpoint();
        match self.next_significant(self.token) {
            Ok(next) => {
                self.last_token = self.token;
                self.token = next;
                let token = &self.tokens[next];
                trace!(
                    "{}:{}:{} {}",
                    self.source.name(),
                    token.line(),
                    token.column(),
                    token
                );
                Ok(token)
            },
            Err(err) => Err(self.fail(checkpoint, err)),
        }
    }

    /// Returns the significant token after the current one without
    /// advancing.
    ///
    /// The token is cached, so a following [`advance`](Self::advance)
    /// returns it without scanning again.
    pub fn lookahead(&mut self) -> LexResult<&Token> {
        let checkpoint = self.checkpoint();
        match self.next_significant(self.token) {
            Ok(next) => Ok(&self.tokens[next]),
            Err(err) => Err(self.fail(checkpoint, err)),
        }
    }

    /// Follows the chain from `from` to the next non-comment token, reading
    /// new tokens once the cached links run out.
    fn next_significant(&mut self, from: TokenId) -> LexResult<TokenId> {
        if self.tokens[from].kind() == TokenKind::Eof {
            return Ok(from);
        }
        let mut id = from;
        loop {
            id = match self.tokens[id].next() {
                Some(next) => next,
                None => {
                    let mut token = self.read_token(id)?;
                    token.set_id(self.tokens.next_index());
                    let next = self.tokens.push(token);
                    self.tokens[id].link_next(next);
                    next
                },
            };
            if self.tokens[id].kind() != TokenKind::Comment {
                return Ok(id);
            }
        }
    }

    /// Reads the token that follows `prev` in the source.
    fn read_token(&mut self, prev: TokenId) -> LexResult<Token> {
        self.cursor.reset(self.tokens[prev].end());
        self.skip_ignored()?;
        self.token_start = self.cursor.position();

        let mut token = match self.cursor.peek() {
            None => self.make_token(TokenKind::Eof, None),
            Some(b'#') => self.lex_comment(),
            Some(b'.') => self.lex_spread()?,
            Some(b'"') => self.lex_string()?,
            Some(b'-' | b'0'..=b'9') => self.lex_number()?,
            Some(byte) if is_name_start(byte) => self.lex_name(),
            Some(byte) => match TokenKind::from_punctuator(byte) {
                Some(kind) => self.lex_punctuator(kind),
                None => return Err(self.unexpected_character(UnexpectedReason::NoTokenStart)),
            },
        };
        token.set_prev(prev);
        Ok(token)
    }

    /// Builds a token from `token_start` to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, value: Option<String>) -> Token {
        let column = (self.token_start - self.line_start + 1) as u32;
        Token::new(
            kind,
            self.token_start,
            self.cursor.position(),
            self.line,
            column,
            value,
        )
    }

    /// Error for the character under the cursor.
    pub(crate) fn unexpected_character(&self, reason: UnexpectedReason) -> LexError {
        let position = self.cursor.position();
        LexError::UnexpectedCharacter {
            position,
            ch: self.cursor.char_at(position),
            reason,
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            line: self.line,
            line_start: self.line_start,
            len: self.tokens.next_index(),
        }
    }

    /// Drops everything read since `checkpoint` and hands back the error.
    fn fail(&mut self, checkpoint: Checkpoint, err: LexError) -> LexError {
        self.tokens.truncate(checkpoint.len);
        let tail = TokenId(checkpoint.len.0 - 1);
        self.tokens[tail].unlink_next();
        self.line = checkpoint.line;
        self.line_start = checkpoint.line_start;
        debug!(
            "{}: {} (offset {})",
            self.source.name(),
            err,
            err.position()
        );
        err
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Offset where the current line begins.
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// The token returned before the current one.
    pub fn last_token(&self) -> &Token {
        &self.tokens[self.last_token]
    }

    /// The token currently held.
    pub fn token(&self) -> &Token {
        &self.tokens[self.token]
    }

    /// Id of the token currently held.
    pub fn token_id(&self) -> TokenId {
        self.token
    }

    /// The source being tokenized.
    pub fn source(&self) -> &'a SourceText {
        self.source
    }

    /// The options this lexer was built with.
    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Looks up a token by id.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// The token linked after `token`, comments included.
    ///
    /// The link is read from the arena, so this also works on a clone taken
    /// before the following token was read.
    pub fn next_of(&self, token: &Token) -> Option<&Token> {
        self.tokens
            .get(token.id())
            .and_then(Token::next)
            .and_then(|id| self.tokens.get(id))
    }

    /// The token linked before `token`, comments included.
    pub fn prev_of(&self, token: &Token) -> Option<&Token> {
        self.tokens
            .get(token.id())
            .and_then(Token::prev)
            .and_then(|id| self.tokens.get(id))
    }

    /// Every token produced so far in source order, starting with the
    /// start-of-input token and including comments.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

/// Yields each significant token after start-of-input up to and including
/// end-of-input. After an error the error is yielded once and iteration ends.
impl<'a> Iterator for LexerState<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.advance().map(Token::clone);
        self.finished = match &result {
            Ok(token) => token.kind() == TokenKind::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for LexerState<'_> {}

/// Tokenizes a whole source text.
///
/// Returns every significant token, end-of-input last, or the first error.
///
/// ```
/// use gqlc_lex::{tokenize, TokenKind};
/// use gqlc_util::span::SourceText;
///
/// let tokens = tokenize(&SourceText::new("query { a }")).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Name, TokenKind::BraceL, TokenKind::Name, TokenKind::BraceR, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(source: &SourceText) -> LexResult<Vec<Token>> {
    LexerState::new(source).collect()
}
