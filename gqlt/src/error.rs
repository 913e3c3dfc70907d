//! Error handling module for the gqlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the gqlt CLI application.
#[derive(Error, Debug)]
pub enum GqltError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when one or more documents failed to tokenize.
    ///
    /// The diagnostics themselves have already been printed.
    #[error("Lexing failed: {0}")]
    Lex(String),
}

/// Result type alias using GqltError.
pub type Result<T> = std::result::Result<T, GqltError>;
