//! Provide the canonical language vocabulary for the Myte scripting language.
//!
//! This crate is intentionally tiny and dependency-free. The tokenizer, parser and tooling look up
//! spellings and metadata here instead of scattering string comparisons across the codebase.
//!
//! ## Notes
//!
//! - This is a pure vocabulary crate: **no IO**, no global mutable state, no syntax-tree types.
//! - Tables are `const` data; lookups are linear scans over a few dozen entries.

pub mod lang;
