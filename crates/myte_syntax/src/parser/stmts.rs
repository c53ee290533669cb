/// Statement parsing.
///
/// `var`/`const`/`return` require a closing `;`; expression statements take an optional one.
impl<'a> Parser<'a> {
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Keyword(KeywordId::Var) => self.parse_binding_statement().map(Statement::Var),
            TokenKind::Keyword(KeywordId::Const) => self.parse_binding_statement().map(Statement::Const),
            TokenKind::Keyword(KeywordId::Return) => Some(Statement::Return(self.parse_return_statement())),
            // Empty statement
            TokenKind::Punctuation(PunctuationId::Semicolon) => None,
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `var name = value;`, `const name = value;` or `var name;`
    fn parse_binding_statement(&mut self) -> Option<BindingStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.synchronize();
            return None;
        }
        let name = Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        let value = if self.peek_is_operator(OperatorId::Assign) {
            self.next_token(); // `=`
            self.next_token();
            self.parse_expression(Precedence::Lowest)
        } else {
            Some(Expression::Nil(NilLiteral {
                token: Token::synthetic(
                    TokenKind::Keyword(KeywordId::Nil),
                    myte_core::lang::keywords::as_str(KeywordId::Nil),
                    &name.token,
                ),
            }))
        };

        self.expect_statement_end();
        Some(BindingStatement { token, name, value })
    }

    /// `return value;` or `return;`
    fn parse_return_statement(&mut self) -> ReturnStatement {
        let token = self.current.clone();

        let value = if self.peek_is_punct(PunctuationId::Semicolon)
            || self.peek_is_punct(PunctuationId::RBrace)
            || self.peek.is_eof()
        {
            None
        } else {
            self.next_token();
            self.parse_expression(Precedence::Lowest)
        };

        self.expect_statement_end();
        ReturnStatement { token, value }
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.next_token();
        }
        Some(ExpressionStatement { token, expression })
    }

    /// Parse statements after `{` up to the matching `}`.
    ///
    /// Reaching end of input first is reported; the statements read so far are kept.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is_punct(PunctuationId::RBrace) {
            if self.current.is_eof() {
                let diagnostic = Diagnostic::syntax("expected next token to be }, got EOF instead", &self.current)
                    .with_help(format!("block opened at line {}, column {}", token.line, token.column));
                self.report(diagnostic);
                break;
            }
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
