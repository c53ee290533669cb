//! Property-based tests for the Myte frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use myte::ast::{Expression, Statement};
use myte::lexer::{self, Lexer, TokenKind};
use myte::parser;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate identifiers that are not keywords
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,10}".prop_filter("must not be a keyword", |s| lexer::keyword_id(s).is_none())
}

/// Every binary operator spelling
fn binary_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "//", "%", "**"])
}

/// A fully parenthesised expression tree together with its expected rendering.
fn expression_strategy() -> impl Strategy<Value = (String, String)> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| (n.to_string(), n.to_string())),
        ident_strategy().prop_map(|s| (s.clone(), s)),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator_strategy(), inner.clone()).prop_map(|((ls, lr), op, (rs, rr))| {
                (format!("({} {} {})", ls, op, rs), format!("({} {} {})", lr, op, rr))
            }),
            (prop::sample::select(vec!["-", "!"]), inner).prop_map(|(op, (s, r))| {
                (format!("{}({})", op, s), format!("({}{})", op, r))
            }),
        ]
    })
}

// =============================================================================
// Tokenizer properties
// =============================================================================

proptest! {
    /// Property: tokenizing arbitrary text never panics and ends with exactly one Eof
    #[test]
    fn lexing_is_total(source in any::<String>()) {
        let (tokens, _) = lexer::lex(&source);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    /// Property: once exhausted, the tokenizer keeps returning the same Eof token
    #[test]
    fn end_of_input_is_idempotent(source in "[ -~\n\t]{0,40}", extra in 1usize..8) {
        let mut lexer = Lexer::new(&source);
        let eof = loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break token;
            }
        };
        for _ in 0..extra {
            prop_assert_eq!(&lexer.next_token(), &eof);
        }
    }

    /// Property: every non-Eof token's literal is the exact source text at its offset
    #[test]
    fn token_literals_are_source_slices(source in "[ -~\n\t]{0,60}") {
        let (tokens, _) = lexer::lex(&source);
        for token in tokens.iter().filter(|t| !t.is_eof()) {
            let end = token.offset + token.literal.len();
            prop_assert_eq!(&source[token.offset..end], token.literal.as_str());
        }
    }

    /// Property: identifiers survive lexing unchanged
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let source = format!("var {} = 1;", ident);
        let (tokens, diagnostics) = lexer::lex(&source);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(tokens[1].kind, TokenKind::Ident);
        prop_assert_eq!(&tokens[1].literal, &ident);
    }
}

// =============================================================================
// Parser properties
// =============================================================================

proptest! {
    /// Property: integer literal text re-parses to the stored value
    #[test]
    fn integer_literals_round_trip(value in 0i64..=i64::MAX) {
        let parsed = parser::parse(&value.to_string());
        prop_assert!(!parsed.has_errors());
        match &parsed.program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Integer(lit) => {
                    prop_assert_eq!(lit.value, value);
                    prop_assert_eq!(lit.token.literal.parse::<i64>().ok(), Some(value));
                }
                other => prop_assert!(false, "expected integer, got {:?}", other),
            },
            other => prop_assert!(false, "expected expression statement, got {:?}", other),
        }
    }

    /// Property: float literal text re-parses to the stored value
    #[test]
    fn float_literals_round_trip(whole in 0u32..100_000, frac in 0u32..100_000) {
        let text = format!("{}.{}", whole, frac);
        let parsed = parser::parse(&text);
        prop_assert!(!parsed.has_errors());
        prop_assert_eq!(parsed.program.to_string(), text.clone());
        if let Statement::Expression(stmt) = &parsed.program.statements[0] {
            if let Expression::Float(lit) = &stmt.expression {
                prop_assert_eq!(lit.value, text.parse::<f64>().unwrap());
            } else {
                prop_assert!(false, "expected float literal");
            }
        }
    }

    /// Property: parsing arbitrary text never panics, and rendering is stable
    #[test]
    fn parsing_is_total(source in "[ -~\n\t]{0,80}") {
        let first = parser::parse(&source);
        let second = parser::parse(&source);
        prop_assert_eq!(first.program.render(), second.program.render());
        prop_assert_eq!(first.diagnostics, second.diagnostics);
    }

    /// Property: explicitly parenthesised expressions render with the same grouping
    #[test]
    fn rendering_reproduces_full_parenthesisation((source, expected) in expression_strategy()) {
        let parsed = parser::parse(&source);
        prop_assert!(!parsed.has_errors(), "{:?}", parsed.diagnostics);
        prop_assert_eq!(parsed.program.render(), expected);
    }

    /// Property: rendered output is itself valid input that renders the same way
    #[test]
    fn rendering_is_a_fixed_point((source, _) in expression_strategy()) {
        let once = parser::parse(&source).program.render();
        let twice = parser::parse(&once).program.render();
        prop_assert_eq!(once, twice);
    }
}
