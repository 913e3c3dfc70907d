//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - [`LexerState`], `advance` and dispatch
//! - `comment` - Ignored input and `#` comments
//! - `punctuator` - Punctuators and the spread
//! - `name` - Names
//! - `number` - Int and float literals
//! - `string` - String literals and escapes

mod comment;
mod core;
mod name;
mod number;
mod punctuator;
mod string;

pub use self::core::{tokenize, LexerState};
