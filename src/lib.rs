#![forbid(unsafe_code)]
//! Myte scripting language: tokenizer, Pratt parser and interactive loop
//!
//! The syntax frontend lives in the `myte_syntax` crate and is re-exported here; this crate adds the command-line
//! interface and the read/parse/print loop on top of it.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Malformed input** is never a panic: it is reported as a [`diagnostics::Diagnostic`].

pub mod cli;
pub mod repl;
pub mod version;

pub use myte_syntax::{ast, diagnostics, lexer, parser};

pub use parser::{Parsed, parse};
pub use repl::ReplConfig;
