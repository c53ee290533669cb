/// Expression parsing.
///
/// Precedence climbing: a prefix routine produces the left-hand side, then infix routines fold in operators
/// whose precedence is higher than the caller's minimum. Right operands are parsed at the operator's own
/// precedence, so equal-precedence chains associate to the left.
impl<'a> Parser<'a> {
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.nesting_error();
            return None;
        }
        self.depth += 1;
        let expression = self.parse_expression_at_depth(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_expression_at_depth(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = prefix_handler(self.current.kind) else {
            self.no_prefix_error();
            return None;
        };
        let mut left = self.parse_prefix(prefix)?;

        while !self.peek_is_punct(PunctuationId::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = infix_handler(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = self.parse_infix(infix, left)?;
        }

        Some(left)
    }

    fn no_prefix_error(&mut self) {
        // The lexer already reported the bad character.
        if self.current.kind == TokenKind::Illegal {
            return;
        }
        let message = format!("no prefix parse function for {} found", self.current.kind);
        let diagnostic = Diagnostic::syntax(message, &self.current);
        self.report(diagnostic);
    }

    /// Report the overly deep expression once and skip the rest of its statement.
    fn nesting_error(&mut self) {
        let diagnostic = Diagnostic::syntax("expression nested too deeply", &self.current)
            .with_help(format!("expressions may nest at most {} levels", MAX_NESTING_DEPTH));
        self.report(diagnostic);
        self.synchronize();
    }

    fn parse_prefix(&mut self, handler: PrefixHandler) -> Option<Expression> {
        match handler {
            PrefixHandler::Identifier => Some(Expression::Identifier(self.parse_identifier())),
            PrefixHandler::Integer => self.parse_integer_literal(),
            PrefixHandler::Float => self.parse_float_literal(),
            PrefixHandler::String => Some(Expression::String(StringLiteral {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            })),
            PrefixHandler::Boolean => Some(Expression::Boolean(BooleanLiteral {
                token: self.current.clone(),
                value: self.current.kind.is_keyword(KeywordId::True),
            })),
            PrefixHandler::Nil => Some(Expression::Nil(NilLiteral {
                token: self.current.clone(),
            })),
            PrefixHandler::Operator => self.parse_prefix_expression(),
            PrefixHandler::Grouped => self.parse_grouped_expression(),
            PrefixHandler::If => self.parse_if_expression().map(Expression::If),
            PrefixHandler::Function => self.parse_function_literal(),
            PrefixHandler::For => self.parse_for_expression(),
            PrefixHandler::Comment => Some(Expression::Comment(CommentExpression {
                token: self.current.clone(),
            })),
        }
    }

    fn parse_infix(&mut self, handler: InfixHandler, left: Expression) -> Option<Expression> {
        match handler {
            InfixHandler::Binary => self.parse_infix_expression(left),
            InfixHandler::Call => self.parse_call_expression(left),
        }
    }

    // ===== Leaves =====

    fn parse_identifier(&self) -> Identifier {
        Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                let message = format!("could not parse {:?} as integer", self.current.literal);
                let diagnostic = Diagnostic::literal(message, &self.current)
                    .with_help(format!("integer literals must be between {} and {}", i64::MIN, i64::MAX));
                self.report(diagnostic);
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<f64>() {
            Ok(value) => Some(Expression::Float(FloatLiteral {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                let message = format!("could not parse {:?} as float", self.current.literal);
                let diagnostic = Diagnostic::literal(message, &self.current);
                self.report(diagnostic);
                None
            }
        }
    }

    // ===== Operators =====

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.operator_id()?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.operator_id()?;
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `( expr )`; the grouping itself leaves no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }
        Some(expression)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_list(PunctuationId::RParen, |p| p.parse_expression(Precedence::Lowest))?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    // ===== Compound expressions =====

    /// `if cond { ... }` with an optional `else { ... }` or `else if ...` chain.
    fn parse_if_expression(&mut self) -> Option<IfExpression> {
        let token = self.current.clone();

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is_keyword(KeywordId::Else) {
            self.next_token();
            Some(Box::new(self.parse_else_branch()?))
        } else {
            None
        };

        Some(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Entered on `else`: either a plain block, stored as an always-true `if`, or a chained `if`.
    fn parse_else_branch(&mut self) -> Option<IfExpression> {
        if self.peek_is_punct(PunctuationId::LBrace) {
            let token = self.current.clone();
            let condition = Expression::Boolean(BooleanLiteral {
                token: Token::synthetic(
                    TokenKind::Keyword(KeywordId::True),
                    myte_core::lang::keywords::as_str(KeywordId::True),
                    &token,
                ),
                value: true,
            });
            self.next_token();
            let consequence = self.parse_block_statement();

            return Some(IfExpression {
                token,
                condition: Box::new(condition),
                consequence,
                alternative: None,
            });
        }

        if !self.expect_peek(TokenKind::Keyword(KeywordId::If)) {
            return None;
        }
        self.parse_if_expression()
    }

    /// `fn(params) { body }`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen)) {
            return None;
        }
        let parameters = self.parse_list(PunctuationId::RParen, Self::parse_parameter)?;

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.current.kind == TokenKind::Ident {
            return Some(self.parse_identifier());
        }
        let message = format!("expected parameter name to be {}, got {} instead", TokenKind::Ident, self.current.kind);
        let diagnostic = Diagnostic::syntax(message, &self.current);
        self.report(diagnostic);
        None
    }

    /// `for cond { body }`
    fn parse_for_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::For(ForExpression {
            token,
            condition: Box::new(condition),
            body,
        }))
    }
}
