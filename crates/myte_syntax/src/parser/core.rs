/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its token-advancing primitive and the `parse_program()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - Every `parse_*` method is entered with `current` on the first token of its construct and returns with
///   `current` on the construct's last token.

/// Deepest expression nesting accepted before the parser gives up on a statement.
///
/// Every nested construct (group, operand, call argument, `if`/`fn`/`for` body) goes through
/// `parse_expression`, so this bounds the parser's recursion.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parser state.
///
/// The parser exclusively owns its lexer. Lexical diagnostics are moved into the parser's list as tokens are
/// consumed, so [`Parser::diagnostics`] covers both phases.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    diagnostics: Vec<Diagnostic>,
    /// Lexical diagnostics raised while scanning `peek`; reported once it becomes `current`.
    peek_diagnostics: Vec<Diagnostic>,
    /// Number of `parse_expression` calls currently active.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime `current` and `peek` from the lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", 0, 0, 0);
        let mut parser = Self {
            lexer,
            current: placeholder.clone(),
            peek: placeholder,
            diagnostics: Vec::new(),
            peek_diagnostics: Vec::new(),
            depth: 0,
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; the reason is in [`Parser::diagnostics`].
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current.is_eof() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        tracing::debug!(
            statements = statements.len(),
            diagnostics = self.diagnostics.len(),
            "parsed program"
        );
        Program { statements }
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Shift `peek` into `current` and pull a new lookahead from the lexer.
    ///
    /// Lexical problems are reported when their token becomes `current`, which keeps them ordered with the
    /// syntax diagnostics raised while parsing the tokens before it.
    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);

        let due = std::mem::replace(&mut self.peek_diagnostics, self.lexer.take_diagnostics());
        for diagnostic in due {
            self.report(diagnostic);
        }
    }

    /// Report the lookahead's lexical problems now, ahead of a diagnostic about that same token.
    fn flush_peek_diagnostics(&mut self) {
        for diagnostic in std::mem::take(&mut self.peek_diagnostics) {
            self.report(diagnostic);
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = %diagnostic.kind, %diagnostic, "diagnostic");
        self.diagnostics.push(diagnostic);
    }
}
