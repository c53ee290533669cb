//! Diagnostics produced while tokenizing and parsing Myte source.
//!
//! Every problem is a small structured record rather than a preformatted string, so consumers can filter or sort
//! by kind and position. The `Display` form keeps the familiar one-line shape used by the interactive loop:
//!
//! ```text
//! expected next token to be IDENT, got = instead. Line: 0, column: 5
//! ```
//!
//! [`Diagnostic`] also implements [`miette::Diagnostic`], so the CLI can render it against the source text with a
//! labelled snippet.

use std::fmt;

use miette::LabeledSpan;
use thiserror::Error;

use crate::lexer::Token;

/// The three classes of problems the frontend reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A character that matches no token category, or a literal that runs past the end of input.
    Lexical,
    /// An expected token is absent at a mandatory position.
    Syntax,
    /// A literal's text could not be converted to its numeric/boolean value.
    Literal,
}

impl DiagnosticKind {
    /// Stable diagnostic code, e.g. `myte::syntax`.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::Lexical => "myte::lexical",
            DiagnosticKind::Syntax => "myte::syntax",
            DiagnosticKind::Literal => "myte::literal",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::Literal => write!(f, "literal error"),
        }
    }
}

/// A single frontend diagnostic with its source location.
///
/// `line`/`column` follow the tokenizer's convention (see [`crate::lexer`]); `offset`/`len` are byte positions
/// used to underline the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}. Line: {line}, column: {column}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub len: usize,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, token: &Token) -> Self {
        Self {
            kind,
            message: message.into(),
            line: token.line,
            column: token.column,
            offset: token.offset,
            len: token.literal.len(),
            help: None,
        }
    }

    pub fn lexical(message: impl Into<String>, token: &Token) -> Self {
        Self::new(DiagnosticKind::Lexical, message, token)
    }

    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        Self::new(DiagnosticKind::Syntax, message, token)
    }

    pub fn literal(message: impl Into<String>, token: &Token) -> Self {
        Self::new(DiagnosticKind::Literal, message, token)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        // Zero-width spans (end of input) still get a one-column caret.
        let span = LabeledSpan::at(self.offset..self.offset + self.len.max(1), self.kind.to_string());
        Some(Box::new(std::iter::once(span)))
    }
}
