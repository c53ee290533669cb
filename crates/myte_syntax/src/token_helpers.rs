//! Registry-id accessors on `Token` / `TokenKind`.
//!
//! Parser call sites ask "is this the `else` keyword" or "which operator is this" through these instead of
//! spelling out `TokenKind::Keyword(..)` patterns each time.

use crate::lexer::{Token, TokenKind};
use myte_core::lang::keywords::KeywordId;
use myte_core::lang::operators::OperatorId;
use myte_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// `var`, `const` or `return`: the keywords that can only begin a statement.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self.keyword_id(),
            Some(KeywordId::Var | KeywordId::Const | KeywordId::Return)
        )
    }
}

impl Token {
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
