//! Check command implementation.
//!
//! Tokenizes each document and reports lexical errors as diagnostics.

use std::path::{Path, PathBuf};

use gqlc_lex::{LexOptions, LexResult, LexerState};
use gqlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use gqlc_util::span::SourceText;

use crate::commands::common::{error_messages, read_source};
use crate::config::Config;
use crate::error::{GqltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Documents to check.
    pub files: Vec<PathBuf>,
}

/// Run the check command.
///
/// Every file is checked even after a failure, including one that cannot be
/// read; the command fails if any of them had an error.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    let handler = Handler::new();

    for file in &args.files {
        let source = match read_source(file) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!("{}: {}", file.display(), err);
                unreadable(file, &err).emit(&handler);
                continue;
            },
        };
        match count_tokens(&source, config.lex) {
            Ok(count) => tracing::info!("{}: ok ({} tokens)", source.name(), count),
            Err(err) => {
                tracing::debug!("{}: {}", source.name(), err);
                handler.emit_diagnostic(err.to_diagnostic(&source));
            },
        }
    }

    for diagnostic in handler.diagnostics() {
        eprintln!("{}\n", diagnostic);
    }

    if handler.has_errors() {
        let count = handler.error_count().to_string();
        return Err(GqltError::Lex(
            error_messages::FILES_FAILED.replace("{}", &count),
        ));
    }

    println!("{} file(s) checked, no errors", args.files.len());
    Ok(())
}

/// Diagnostic for a file that could not be read.
fn unreadable(file: &Path, err: &GqltError) -> DiagnosticBuilder {
    let note = match err {
        GqltError::Io(io) => io.to_string(),
        other => other.to_string(),
    };
    DiagnosticBuilder::error("Could not read file.")
        .code(DiagnosticCode::E_SOURCE_UNREADABLE)
        .source_name(file.display().to_string())
        .note(note)
}

/// Count the significant tokens of a document, end-of-input included.
fn count_tokens(source: &SourceText, options: LexOptions) -> LexResult<usize> {
    LexerState::with_options(source, options).try_fold(0, |count, token| {
        token.map(|_| count + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlc_lex::LexError;
    use tempfile::TempDir;

    #[test]
    fn test_count_tokens() {
        let source = SourceText::new("{ a b }");
        assert_eq!(count_tokens(&source, LexOptions::default()), Ok(5));
    }

    #[test]
    fn test_count_tokens_reports_first_error() {
        let source = SourceText::new("{ \"a\\q\" }");
        assert!(matches!(
            count_tokens(&source, LexOptions::default()),
            Err(LexError::InvalidCharacterEscapeSequence { position: 4, .. })
        ));
    }

    #[test]
    fn test_check_mixed_files() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.graphql");
        let bad = temp_dir.path().join("bad.graphql");
        std::fs::write(&good, "{ a }").unwrap();
        std::fs::write(&bad, "{ 01 }").unwrap();

        let ok = run_check(
            CheckArgs {
                files: vec![good.clone()],
            },
            &Config::default(),
        );
        assert!(ok.is_ok());

        let err = run_check(
            CheckArgs {
                files: vec![good, bad],
            },
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Lexing failed: 1 file(s) with errors");
    }

    #[test]
    fn test_check_continues_past_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.graphql");
        let bad = temp_dir.path().join("bad.graphql");
        std::fs::write(&bad, "{ \"open }").unwrap();

        let err = run_check(
            CheckArgs {
                files: vec![missing, bad],
            },
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Lexing failed: 2 file(s) with errors");
    }

    #[test]
    fn test_unreadable_diagnostic() {
        let path = Path::new("missing.graphql");
        let err = GqltError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        let diag = unreadable(path, &err).build();
        assert_eq!(diag.code, Some(DiagnosticCode::E_SOURCE_UNREADABLE));
        assert_eq!(
            diag.to_string(),
            "error[E0001]: Could not read file.\n  --> missing.graphql\n  = note: No such file or directory"
        );
    }
}
