//! gqlt CLI - A command-line tool for tokenizing GraphQL documents.
//!
//! This is the main entry point for the gqlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_lex, CheckArgs, LexArgs};
use config::Config;
use error::{GqltError, Result};

/// gqlt - A CLI tool for GraphQL documents
///
/// gqlt tokenizes query documents and reports lexical errors with source
/// snippets.
#[derive(Parser, Debug)]
#[command(name = "gqlt")]
#[command(author = "gqlc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for tokenizing GraphQL documents", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GQLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GQLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors in log output
    ///
    /// Token output and diagnostics are always plain text.
    #[arg(long, global = true, env = "GQLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gqlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a document
    ///
    /// Tokenizes the file and prints one token per line, or a JSON array
    /// with `--format json`.
    Lex(LexCommand),

    /// Check documents for lexical errors
    ///
    /// Tokenizes every file and prints a diagnostic for each one that
    /// fails. Exits with an error if any file failed.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Document to tokenize
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print comment tokens
    #[arg(long)]
    comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Documents to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the gqlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine readable.
/// Records from the lexer's `log` facade are forwarded to the same
/// subscriber.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GqltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            let lex_args = LexArgs {
                file: args.file,
                format: args.format,
                comments: args.comments,
            };
            run_lex(lex_args, &config)
        },
        Commands::Check(args) => run_check(CheckArgs { files: args.files }, &config),
    }
}
