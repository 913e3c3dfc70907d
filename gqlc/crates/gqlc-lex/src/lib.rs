//! gqlc-lex - Lexical Analyzer for GraphQL-like query documents
//!
//! This crate turns query source text into the stream of tokens a parser
//! consumes. It does not build trees or look at what names mean.
//!
//! # Example Usage
//!
//! ```
//! use gqlc_lex::{LexerState, TokenKind};
//! use gqlc_util::span::SourceText;
//!
//! let source = SourceText::new("query Hero($episode: Episode = JEDI) { hero { ...Name } }");
//! let mut lexer = LexerState::new(&source);
//!
//! // Pull tokens one at a time
//! let first = lexer.advance().unwrap();
//! assert_eq!(first.kind(), TokenKind::Name);
//! assert_eq!(first.value(), Some("query"));
//!
//! // Or iterate the rest
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.unwrap().kind()).collect();
//! assert_eq!(kinds.last(), Some(&TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - [`LexerState`] and the scanning routines
//! - [`cursor`] - Byte cursor for source traversal
//! - [`chars`] - Character classes and escape helpers
//! - [`error`] - [`LexError`] and its diagnostics
//! - [`options`] - [`LexOptions`]
//!
//! # Token Categories
//!
//! ## Punctuators
//!
//! `!` `$` `(` `)` `...` `:` `=` `@` `[` `]` `{` `|` `}`
//!
//! ## Names
//!
//! Pattern: `[_A-Za-z][_0-9A-Za-z]*`. Keywords are plain names here.
//!
//! ## Literals
//!
//! - **Int**: `0`, `-12`
//! - **Float**: `1.5`, `-0.0`, `6.02e23`, `1E-3`
//! - **String**: `"hello"`, `"tab\t"`, `"é"`
//!
//! ## Ignored
//!
//! Spaces, tabs, commas, line terminators and a byte order mark. `#`
//! comments are kept in the token chain but skipped by `advance`.
//!
//! ## Special
//!
//! - **SOF**: start of input, the token a lexer holds before its first advance
//! - **EOF**: end of input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult, UnexpectedReason};
pub use lexer::{tokenize, LexerState};
pub use options::LexOptions;
pub use token::{Token, TokenId, TokenKind};

static_assertions::assert_impl_all!(Token: Clone, Send, Sync);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);
