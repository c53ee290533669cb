//! Token types for the Myte lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! Every other category is a payload-free variant; the exact source text always lives in [`Token::literal`].
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use myte_core::lang::keywords::{self, KeywordId};
use myte_core::lang::operators::{self, OperatorId};
use myte_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    Float,
    String,
    Comment,

    // ========== Special ==========
    Illegal,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident => f.write_str("IDENT"),
            TokenKind::Int => f.write_str("INT"),
            TokenKind::Float => f.write_str("FLOAT"),
            TokenKind::String => f.write_str("STRING"),
            TokenKind::Comment => f.write_str("COMMENT"),
            TokenKind::Illegal => f.write_str("ILLEGAL"),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}

/// A token with its kind, exact source text and position.
///
/// `line` counts the newlines consumed before the token, `column` is 1-based with tabs advancing 4 columns, and
/// `offset` is the byte offset of the first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
            offset,
        }
    }

    /// Construct a token that does not come from source text, positioned at `at`.
    ///
    /// Used for implied nodes such as the `nil` initializer of `var x;`.
    pub fn synthetic(kind: TokenKind, literal: impl Into<String>, at: &Token) -> Self {
        Self::new(kind, literal, at.line, at.column, at.offset)
    }
}

/// One-line dump form used by `myte lex` and the interactive token view, e.g. `0:5 IDENT "x"`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.column, self.kind, self.literal)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

/// Resolve identifier-shaped text to its token kind: a keyword if reserved, otherwise [`TokenKind::Ident`].
pub fn lookup_ident(name: &str) -> TokenKind {
    keyword_id(name).map_or(TokenKind::Ident, TokenKind::Keyword)
}
