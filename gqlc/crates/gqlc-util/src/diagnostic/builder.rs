//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::SourceResult;
use crate::span::{SourceText, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the highlighted
/// column range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build the snippet for a span of a source text
    ///
    /// The highlight is clipped to the first line of the span.
    ///
    /// ```
    /// use gqlc_util::diagnostic::SourceSnippet;
    /// use gqlc_util::span::{SourceText, Span};
    ///
    /// let source = SourceText::new("query {\n  me\n}");
    /// let snippet = SourceSnippet::from_source(&source, Span::new(10, 12, 2, 3)).unwrap();
    /// assert_eq!(snippet.line, "  me");
    /// assert_eq!((snippet.start_column, snippet.end_column), (3, 5));
    /// assert!(snippet.format().ends_with("|   ^^"));
    /// ```
    pub fn from_source(source: &SourceText, span: Span) -> SourceResult<Self> {
        let (line_number, start_column) = source.line_col(span.start)?;
        let line = source.line_text(line_number as usize)?;
        let start_column = start_column as usize;
        let end_column = (start_column + span.len()).min(line.len() + 1);
        Ok(Self {
            line: line.to_string(),
            line_number: line_number as usize,
            start_column,
            end_column: end_column.max(start_column),
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with carets (^) under the highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use gqlc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::point(2, 1, 3))
///     .help("close the string with `\"` before the end of the line")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    source_name: Option<String>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            source_name: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Name the source the span points into
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            source_name: self.source_name,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and hand the diagnostic to a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
