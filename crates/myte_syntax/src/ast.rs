//! Abstract Syntax Tree definitions for Myte
//!
//! Every node keeps the token that introduced it, so the exact source text and position of any node are always
//! available. The tree is built once by the parser and never mutated afterwards.
//!
//! ## Rendering
//!
//! Every node implements [`fmt::Display`] with a canonical, fully parenthesised form that tests compare against:
//!
//! ```text
//! -a * b            =>  ((-a) * b)
//! var x = 1 + 2;    =>  var x = (1 + 2);
//! add(1, 2 * 3)     =>  add(1, (2 * 3))
//! ```

use std::fmt;

use myte_core::lang::operators::OperatorId;

use crate::lexer::Token;

/// A program is a sequence of statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Var(BindingStatement),
    Const(BindingStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    /// The token that introduced this statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Var(s) | Statement::Const(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
            Statement::Block(s) => &s.token,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// `var name = value;` or `const name = value;`
///
/// `value` is a synthetic `nil` literal when the initializer is omitted, and `None` only when the initializer
/// failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

/// `return value;` or `return;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

/// A bare expression used as a statement; the trailing `;` is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

/// Statements between `{` and `}`, used as the body of `if`, `fn` and `for`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Nil(NilLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    For(ForExpression),
    Call(CallExpression),
    Comment(CommentExpression),
}

impl Expression {
    /// The token that introduced this expression (the operator token for infix and call nodes).
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Integer(e) => &e.token,
            Expression::Float(e) => &e.token,
            Expression::String(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Nil(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::For(e) => &e.token,
            Expression::Call(e) => &e.token,
            Expression::Comment(e) => &e.token,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

/// String literal; `value` is the raw text including both delimiting quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NilLiteral {
    pub token: Token,
}

/// `!right` or `-right`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: OperatorId,
    pub right: Box<Expression>,
}

/// `left <op> right`
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: OperatorId,
    pub right: Box<Expression>,
}

/// An `if` node; `else if` chains are a singly linked list through `alternative`.
///
/// A plain `else { ... }` is stored as a synthetic always-true `if` whose token is the `else` keyword, so every
/// link in the chain has the same shape. See [`IfExpression::is_else_branch`].
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<Box<IfExpression>>,
}

impl IfExpression {
    /// Return `true` for the synthetic node that represents a plain `else` block.
    pub fn is_else_branch(&self) -> bool {
        self.token.kind.is_keyword(myte_core::lang::keywords::KeywordId::Else)
    }

    /// Iterate over this node and every chained alternative, in source order.
    pub fn chain(&self) -> impl Iterator<Item = &IfExpression> {
        std::iter::successors(Some(self), |node| node.alternative.as_deref())
    }
}

/// `fn(a, b) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `for condition { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub body: BlockStatement,
}

/// `function(arguments...)`; the token is the opening `(`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// A `#` comment in expression position, carried through as a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentExpression {
    pub token: Token,
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Var(s) | Statement::Const(s) => write!(f, "{}", s),
            Statement::Return(s) => write!(f, "{}", s),
            Statement::Expression(s) => write!(f, "{}", s.expression),
            Statement::Block(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for BindingStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{}", e),
            Expression::Integer(e) => f.write_str(&e.token.literal),
            Expression::Float(e) => f.write_str(&e.token.literal),
            Expression::String(e) => f.write_str(&e.token.literal),
            Expression::Boolean(e) => f.write_str(&e.token.literal),
            Expression::Nil(e) => f.write_str(&e.token.literal),
            Expression::Prefix(e) => write!(f, "({}{})", e.token.literal, e.right),
            Expression::Infix(e) => write!(f, "({} {} {})", e.left, e.token.literal, e.right),
            Expression::If(e) => write!(f, "{}", e),
            Expression::Function(e) => write!(f, "{}", e),
            Expression::For(e) => write!(f, "{}", e),
            Expression::Call(e) => write!(f, "{}", e),
            Expression::Comment(e) => f.write_str(&e.token.literal),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_else_branch() {
            write!(f, "{} {}", self.token.literal, self.consequence)?;
        } else {
            write!(f, "{} {} {}", self.token.literal, self.condition, self.consequence)?;
        }
        match &self.alternative {
            Some(alternative) if alternative.is_else_branch() => write!(f, " {}", alternative),
            // `else if`: the chained node's own token is `if`
            Some(alternative) => write!(f, " else {}", alternative),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.value.as_str()).collect();
        write!(f, "{}({}){{{}}}", self.token.literal, params.join(","), self.body)
    }
}

impl fmt::Display for ForExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.token.literal, self.condition, self.body)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}
