//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser needs: whether an operator
//! may start an expression (prefix) and, for binary operators, its binding [`Precedence`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Assignment and update operators (`=`, `+=`, `++`, ...) are tokenized but have no precedence: the expression
//!   parser stops in front of them.
//!
//! ## Examples
//! ```rust
//! use myte_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("**"), Some(OperatorId::StarStar));
//! assert_eq!(operators::infix_precedence(OperatorId::Plus), Some(Precedence::Sum));
//! assert!(Precedence::Product > Precedence::Sum);
//! ```

/// Binding strength of an operator, weakest first.
///
/// Each level binds strictly tighter than the previous one; [`Precedence::Lowest`] is used to start parsing any
/// top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `<=` `>` `>=`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/` `//`
    Product,
    /// `%`
    Modulo,
    /// `**`
    Power,
    /// `-x` `!x`
    Prefix,
    /// `callee(args)`
    Call,
}

/// Broad grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Logical,
    Assignment,
    Update,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    Bang,

    // Assignment
    Assign,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    // Update
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is `Some` only for operators with an infix (binary) meaning.
/// - `prefix` marks operators that may start an expression (`-x`, `!x`, `++x`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub precedence: Option<Precedence>,
    pub prefix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic, Some(Precedence::Sum), false),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic, Some(Precedence::Sum), true),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic, Some(Precedence::Product), false),
    op(OperatorId::StarStar, "**", OperatorCategory::Arithmetic, Some(Precedence::Power), false),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic, Some(Precedence::Product), false),
    op(OperatorId::SlashSlash, "//", OperatorCategory::Arithmetic, Some(Precedence::Product), false),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic, Some(Precedence::Modulo), false),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison, Some(Precedence::Equals), false),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison, Some(Precedence::Equals), false),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison, Some(Precedence::LessGreater), false),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison, Some(Precedence::LessGreater), false),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison, Some(Precedence::LessGreater), false),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison, Some(Precedence::LessGreater), false),
    // Logical
    op(OperatorId::Bang, "!", OperatorCategory::Logical, None, true),
    // Assignment
    op(OperatorId::Assign, "=", OperatorCategory::Assignment, None, false),
    op(OperatorId::PlusEq, "+=", OperatorCategory::Assignment, None, false),
    op(OperatorId::MinusEq, "-=", OperatorCategory::Assignment, None, false),
    op(OperatorId::StarEq, "*=", OperatorCategory::Assignment, None, false),
    op(OperatorId::SlashEq, "/=", OperatorCategory::Assignment, None, false),
    // Update
    op(OperatorId::PlusPlus, "++", OperatorCategory::Update, None, true),
    op(OperatorId::MinusMinus, "--", OperatorCategory::Update, None, true),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the category of an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return the binding precedence of an operator used in infix position, if it has one.
pub fn infix_precedence(id: OperatorId) -> Option<Precedence> {
    info_for(id).precedence
}

/// Return `true` if the operator may start an expression.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    category: OperatorCategory,
    precedence: Option<Precedence>,
    prefix: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence,
        prefix,
    }
}
