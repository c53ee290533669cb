//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;

use miette::{NamedSource, Report};
use serde_json::{Value, json};

use crate::diagnostics::Diagnostic;
use crate::parser::Parsed;
use crate::repl::{self, ReplConfig};
use crate::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (10 MB); larger inputs are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a source file with size validation.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render diagnostics against their source with labelled snippets.
pub fn format_diagnostics(name: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| {
            let report =
                Report::new(diagnostic.clone()).with_source_code(NamedSource::new(name, source.to_string()));
            format!("{:?}", report)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tokenize a file and print one token per line.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, diagnostics) = lexer::lex(&source);

    for token in &tokens {
        println!("{}", token);
    }

    if diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format_diagnostics(file_path, &source, &diagnostics)))
    }
}

/// Parse a file and display the rendered tree.
pub fn parse_file(file_path: &str, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    parse_source(file_path, &source, json)
}

/// Parse `source` and print the result; any diagnostic makes the command fail.
pub fn parse_source(name: &str, source: &str, json: bool) -> CliResult<ExitCode> {
    let parsed = parser::parse(source);

    if json {
        println!("{}", json_report(&parsed));
        return Ok(if parsed.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    println!("{}", parsed.program);
    if parsed.has_errors() {
        return Err(CliError::failure(format_diagnostics(name, source, &parsed.diagnostics)));
    }
    Ok(ExitCode::SUCCESS)
}

/// `{"program": <render>, "diagnostics": [{kind, message, line, column}, ...]}`
pub fn json_report(parsed: &Parsed) -> Value {
    let diagnostics: Vec<Value> = parsed
        .diagnostics
        .iter()
        .map(|d| {
            json!({
                "kind": d.kind.code(),
                "message": d.message,
                "line": d.line,
                "column": d.column,
            })
        })
        .collect();

    json!({
        "program": parsed.program.render(),
        "diagnostics": diagnostics,
    })
}

/// Run the interactive loop on stdin/stdout.
pub fn start_repl(config: &ReplConfig) -> CliResult<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    repl::start(stdin.lock(), &mut stdout, config).map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}
