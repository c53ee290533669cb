//! Syntax frontend for the Myte language: tokenizer, syntax tree, parser, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI, the interactive loop, and any future
//! evaluator or pretty-printer that consumes the tree.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution, type checking, or evaluation.
//! - Malformed input never aborts a parse. Problems are collected as [`diagnostics::Diagnostic`] records next to a
//!   best-effort tree; the caller decides whether they are fatal.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `myte_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use myte_syntax::parser;
//!
//! let parsed = parser::parse("var answer = 6 * 7;");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.program.to_string(), "var answer = (6 * 7);");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
