//! Myte language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via the registry tables in this module.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings, precedence and categories.
//!
//! ## Examples
//! ```rust
//! use myte_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
//! assert_eq!(keywords::as_str(KeywordId::Fn), "fn");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
