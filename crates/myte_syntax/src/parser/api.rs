/// Outcome of parsing a source string: the program plus every diagnostic found along the way.
///
/// The program is always present, possibly with statements missing where parsing failed. Whether diagnostics
/// are fatal is the caller's decision; [`Parsed::into_result`] is the strict option.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Treat any diagnostic as failure.
    ///
    /// ## Errors
    /// Returns all diagnostics, in source order, when at least one was recorded.
    pub fn into_result(self) -> Result<Program, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.program)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Parse source text into a [`Program`].
///
/// This is the main public entrypoint for parsing: it builds a lexer and parser over `source` and runs
/// [`Parser::parse_program`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    Parsed {
        program,
        diagnostics: parser.into_diagnostics(),
    }
}
