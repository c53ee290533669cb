//! Interactive read/parse/print loop
//!
//! Reads one line at a time, parses it as a complete program and prints the rendered tree. Diagnostics are
//! printed first, one per line and indented with a tab, and never stop the loop. End of input ends the session.
//!
//! The loop is generic over [`BufRead`]/[`Write`] so it can be driven from tests without a terminal.

pub mod config;

pub use config::ReplConfig;

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{lexer, parser};

/// ASCII art logo - embedded at compile time from assets/logo.txt
pub const LOGO: &str = include_str!("../../assets/logo.txt");

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Name used in the greeting: `$USER`, then `$USERNAME`, then a generic fallback.
pub fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "friend".to_string())
}

/// Logo plus greeting, printed once when the session starts.
pub fn banner(user: &str) -> String {
    format!(
        "{}\nHi there {}!, this is the Myte programming language!\nFeel free to type in commands\n",
        LOGO, user
    )
}

/// Everything printed in response to one input line (without the prompt).
pub fn respond(line: &str, show_tokens: bool) -> String {
    let mut out = String::new();

    if show_tokens {
        let (tokens, _) = lexer::lex(line);
        for token in tokens {
            out.push_str(&format!("{}\n", token));
        }
    }

    let parsed = parser::parse(line);
    for diagnostic in &parsed.diagnostics {
        out.push_str(&format!("\t{}\n", diagnostic));
    }
    out.push_str(&parsed.program.render());
    out.push('\n');
    out
}

/// Run the loop until `input` is exhausted.
///
/// ## Errors
/// Returns [`ReplError`] when reading a line or writing the response fails.
#[tracing::instrument(skip_all, fields(prompt = %config.prompt))]
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, config: &ReplConfig) -> Result<(), ReplError> {
    if config.show_banner {
        write!(output, "{}", banner(&current_user())).map_err(ReplError::Write)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt).map_err(ReplError::Write)?;
        output.flush().map_err(ReplError::Write)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(ReplError::Read)?;
        tracing::debug!(len = line.len(), "evaluating line");

        output
            .write_all(respond(&line, config.show_tokens).as_bytes())
            .map_err(ReplError::Write)?;
    }

    tracing::debug!("input closed");
    Ok(())
}
