//! Lex command implementation.
//!
//! Tokenizes one document and prints its tokens.

use std::io::{self, Write};
use std::path::PathBuf;

use gqlc_lex::{LexOptions, LexResult, LexerState, Token, TokenKind};
use serde::Serialize;

use crate::commands::common::{read_source, render_error, OutputFormat};
use crate::config::Config;
use crate::error::{GqltError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Document to tokenize.
    pub file: PathBuf,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Also print comment tokens.
    pub comments: bool,
}

/// A token without its location, for `no_location` output.
#[derive(Serialize)]
struct UnlocatedToken<'a> {
    kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: &Config) -> Result<()> {
    let source = read_source(&args.file)?;
    let format = args.format.unwrap_or(config.output.format);
    let comments = args.comments || config.output.comments;

    let mut lexer = LexerState::with_options(&source, config.lex);
    let tokens = match collect_tokens(&mut lexer, comments) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", render_error(&source, &err));
            return Err(GqltError::Lex(source.name().to_string()));
        },
    };
    tracing::info!("{}: {} token(s)", source.name(), tokens.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, format, lexer.options())?;
    out.flush()?;
    Ok(())
}

/// Lex to end of input and return the chain after start-of-input.
fn collect_tokens(lexer: &mut LexerState<'_>, comments: bool) -> LexResult<Vec<Token>> {
    while lexer.advance()?.kind() != TokenKind::Eof {}
    Ok(lexer
        .tokens()
        .filter(|token| token.kind() != TokenKind::Sof)
        .filter(|token| comments || token.kind() != TokenKind::Comment)
        .cloned()
        .collect())
}

/// Write tokens in the requested format.
fn write_tokens(
    out: &mut impl Write,
    tokens: &[Token],
    format: OutputFormat,
    options: &LexOptions,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                if options.no_location {
                    writeln!(out, "{}", token)?;
                } else {
                    writeln!(out, "{}:{}\t{}", token.line(), token.column(), token)?;
                }
            }
        },
        OutputFormat::Json => {
            if options.no_location {
                let unlocated: Vec<_> = tokens
                    .iter()
                    .map(|token| UnlocatedToken {
                        kind: token.kind(),
                        value: token.value(),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &unlocated)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, tokens)?;
            }
            writeln!(out)?;
        },
    }
    Ok(())
}
