//! CLI module for Myte
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - *(no command)* - Start the interactive loop with the banner
//! - `repl` - Start the interactive loop with options
//! - `lex <file>` - Print the tokens of a file
//! - `parse <file>` / `parse -c <code>` - Print the rendered tree, or a JSON report with `--json`
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::repl::ReplConfig;
use crate::version::MYTE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Myte scripting language
#[derive(Parser, Debug)]
#[command(name = "myte")]
#[command(version = MYTE_VERSION)]
#[command(about = "The Myte scripting language: tokenizer, parser and interactive loop", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive loop
    Repl {
        /// Skip the logo and greeting
        #[arg(long)]
        no_banner: bool,
        /// Prompt text (overrides MYTE_PROMPT)
        #[arg(long, value_name = "PROMPT")]
        prompt: Option<String>,
        /// Print every token before the parse result
        #[arg(long)]
        tokens: bool,
    },

    /// Print the tokens of a source file
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a source file and print the rendered tree
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE", conflicts_with = "command", required_unless_present = "command")]
        file: Option<PathBuf>,
        /// Parse inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE", allow_hyphen_values = true)]
        command: Option<String>,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        None => commands::start_repl(&ReplConfig::from_env()),
        Some(Command::Repl {
            no_banner,
            prompt,
            tokens,
        }) => commands::start_repl(&repl_config(no_banner, prompt, tokens)),
        Some(Command::Lex { file }) => commands::lex_file(&file.to_string_lossy()),
        Some(Command::Parse { file, command, json }) => execute_parse(file, command, json),
    }
}

/// Environment defaults, then command-line flags on top.
fn repl_config(no_banner: bool, prompt: Option<String>, tokens: bool) -> ReplConfig {
    let config = ReplConfig::from_env().with_banner(!no_banner).with_tokens(tokens);
    match prompt {
        Some(prompt) => config.with_prompt(prompt),
        None => config,
    }
}

/// Handle the `parse` subcommand with its file and inline forms.
fn execute_parse(file: Option<PathBuf>, code: Option<String>, json: bool) -> CliResult<ExitCode> {
    if let Some(code) = code {
        if code.is_empty() {
            return Err(CliError::failure("Error: -c/--command requires source code string"));
        }
        commands::parse_source("<command>", &code, json)
    } else if let Some(file) = file {
        commands::parse_file(&file.to_string_lossy(), json)
    } else {
        Err(CliError::failure("Error: parse requires a file path or -c \"code\""))
    }
}

// ============================================================================
// Tests
// ============================================================================
