//! Command modules for the gqlt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod check;
pub mod lex;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use lex::{run_lex, LexArgs};
