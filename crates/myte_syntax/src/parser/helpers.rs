/// Token inspection and expectation helpers.
///
/// These helpers centralize "what is the current/next token" checks and the diagnostics produced when an
/// expected token is missing.
impl<'a> Parser<'a> {
    // ===== Token checks =====

    fn current_is_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn peek_is_punct(&self, id: PunctuationId) -> bool {
        self.peek.kind.is_punctuation(id)
    }

    fn peek_is_keyword(&self, id: KeywordId) -> bool {
        self.peek.kind.is_keyword(id)
    }

    fn peek_is_operator(&self, id: OperatorId) -> bool {
        self.peek.kind.is_operator(id)
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    // ===== Expectations =====

    /// Advance onto `peek` if it has the expected kind; otherwise record a diagnostic and stay put.
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek.kind == expected {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.flush_peek_diagnostics();
        let message = format!("expected next token to be {}, got {} instead", expected, self.peek.kind);
        let diagnostic = Diagnostic::syntax(message, &self.peek);
        self.report(diagnostic);
    }

    /// Consume the `;` that ends a `var`/`const`/`return` statement.
    ///
    /// A missing `;` is reported, but the statement is still complete and kept.
    fn expect_statement_end(&mut self) {
        // An initializer that failed on `;` already stopped there.
        if !self.current_is_punct(PunctuationId::Semicolon) {
            self.expect_peek(TokenKind::Punctuation(PunctuationId::Semicolon));
        }
    }

    /// Skip the rest of an abandoned statement.
    ///
    /// Stops with `current` on `;` or end of input, or just before a token that can start a fresh
    /// `var`/`const`/`return` statement or close the enclosing block.
    fn synchronize(&mut self) {
        loop {
            if self.current_is_punct(PunctuationId::Semicolon) || self.current.is_eof() {
                return;
            }
            if self.peek.kind.starts_statement() || self.peek_is_punct(PunctuationId::RBrace) || self.peek.is_eof() {
                return;
            }
            self.next_token();
        }
    }

    /// Parse a comma-separated list closed by `close`, entered with `current` on the opening delimiter.
    ///
    /// `item` is called with `current` on the first token of each element. A trailing comma before `close` is
    /// accepted. Leaves `current` on `close`.
    fn parse_list<T>(&mut self, close: PunctuationId, mut item: impl FnMut(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let mut items = Vec::new();

        while !self.peek_is_punct(close) {
            self.next_token();
            items.push(item(self)?);
            if !self.peek_is_punct(PunctuationId::Comma) {
                break;
            }
            self.next_token();
        }

        self.expect_peek(TokenKind::Punctuation(close)).then_some(items)
    }
}

// ===== Dispatch tables =====

/// Binding power of a token when it appears after a complete left-hand side.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Operator(id) => operators::infix_precedence(id).unwrap_or(Precedence::Lowest),
        TokenKind::Punctuation(PunctuationId::LParen) => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Routines that can start an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixHandler {
    Identifier,
    Integer,
    Float,
    String,
    Boolean,
    Nil,
    Operator,
    Grouped,
    If,
    Function,
    For,
    Comment,
}

/// Routines that continue an expression after a left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfixHandler {
    Binary,
    Call,
}

fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    let handler = match kind {
        TokenKind::Ident => PrefixHandler::Identifier,
        TokenKind::Int => PrefixHandler::Integer,
        TokenKind::Float => PrefixHandler::Float,
        TokenKind::String => PrefixHandler::String,
        TokenKind::Comment => PrefixHandler::Comment,
        TokenKind::Keyword(KeywordId::True | KeywordId::False) => PrefixHandler::Boolean,
        TokenKind::Keyword(KeywordId::Nil) => PrefixHandler::Nil,
        TokenKind::Keyword(KeywordId::If) => PrefixHandler::If,
        TokenKind::Keyword(KeywordId::Fn) => PrefixHandler::Function,
        TokenKind::Keyword(KeywordId::For) => PrefixHandler::For,
        TokenKind::Operator(id) if operators::is_prefix(id) => PrefixHandler::Operator,
        TokenKind::Punctuation(PunctuationId::LParen) => PrefixHandler::Grouped,
        _ => return None,
    };
    Some(handler)
}

fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    match kind {
        TokenKind::Operator(id) if operators::infix_precedence(id).is_some() => Some(InfixHandler::Binary),
        TokenKind::Punctuation(PunctuationId::LParen) => Some(InfixHandler::Call),
        _ => None,
    }
}
