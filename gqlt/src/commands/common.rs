//! Common types and utilities for gqlt commands.
//!
//! This module provides shared types and helper functions used across all
//! command implementations.

use std::path::Path;

use clap::ValueEnum;
use gqlc_lex::LexError;
use gqlc_util::span::SourceText;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for `gqlt lex`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `line:column kind value`
    #[default]
    Text,
    /// A JSON array of tokens
    Json,
}

// ============================================================================
// Source Loading
// ============================================================================

/// Read a document from disk, named after its path.
pub fn read_source(path: &Path) -> Result<SourceText> {
    let body = std::fs::read_to_string(path)?;
    tracing::debug!("read {} ({} bytes)", path.display(), body.len());
    Ok(SourceText::with_name(path.display().to_string(), body))
}

/// Render a lexical error the way every command prints it.
pub fn render_error(source: &SourceText, err: &LexError) -> String {
    err.to_diagnostic(source).to_string()
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when documents failed to tokenize.
    pub const FILES_FAILED: &str = "{} file(s) with errors";
}
