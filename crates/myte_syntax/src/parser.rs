//! Parser for the Myte scripting language
//!
//! A Pratt (precedence-climbing) parser that pulls tokens from a [`Lexer`] on demand, keeping only the current
//! token and one token of lookahead. Every problem is recorded as a [`Diagnostic`] and parsing carries on with the
//! next statement, so a parse always yields a [`Program`].
//!
//! ## Examples
//!
//! ```rust
//! use myte_syntax::parser;
//!
//! let parsed = parser::parse("3 + 4 * 5 == 3 * 1 + 4 ** 5");
//! assert!(!parsed.has_errors());
//! assert_eq!(parsed.program.to_string(), "((3 + (4 * 5)) == ((3 * 1) + (4 ** 5)))");
//! ```

use crate::ast::*;
use crate::diagnostics::Diagnostic;
use crate::lexer::{Lexer, Token, TokenKind};
use myte_core::lang::keywords::KeywordId;
use myte_core::lang::operators::{self, OperatorId, Precedence};
use myte_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
