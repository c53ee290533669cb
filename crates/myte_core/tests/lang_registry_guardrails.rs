use std::collections::HashMap;

use myte_core::lang::keywords;
use myte_core::lang::operators::{self, Precedence};
use myte_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }

    assert_eq!(keywords::KEYWORDS.len(), 15);
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(keywords::from_str("fn"), Some(keywords::KeywordId::Fn));
    assert_eq!(keywords::from_str("Fn"), None);
    assert_eq!(keywords::from_str("RETURN"), None);
    assert_eq!(keywords::from_str("function"), None);
    assert_eq!(keywords::from_str(""), None);
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn no_spelling_is_shared_across_registries() {
    for op in operators::OPERATORS {
        assert!(punctuation::from_str(op.spelling).is_none(), "{} is both", op.spelling);
        assert!(keywords::from_str(op.spelling).is_none(), "{} is both", op.spelling);
    }
}

#[test]
fn precedence_ladder_is_strictly_ascending() {
    let ladder = [
        Precedence::Lowest,
        Precedence::Equals,
        Precedence::LessGreater,
        Precedence::Sum,
        Precedence::Product,
        Precedence::Modulo,
        Precedence::Power,
        Precedence::Prefix,
        Precedence::Call,
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1], "{:?} should bind weaker than {:?}", pair[0], pair[1]);
    }
}

#[test]
fn prefix_operators_are_negation_and_update() {
    use operators::OperatorId::*;

    let prefix: Vec<_> = operators::OPERATORS.iter().filter(|o| o.prefix).map(|o| o.id).collect();
    assert_eq!(prefix, vec![Minus, Bang, PlusPlus, MinusMinus]);
}

#[test]
fn registry_categories() {
    use keywords::{KeywordCategory, KeywordId};
    use operators::{OperatorCategory, OperatorId};
    use punctuation::{PunctuationCategory, PunctuationId};

    let keyword_cases = [
        (KeywordId::Var, KeywordCategory::Declaration),
        (KeywordId::Fn, KeywordCategory::Declaration),
        (KeywordId::Nil, KeywordCategory::Literal),
        (KeywordId::And, KeywordCategory::Operator),
        (KeywordId::Else, KeywordCategory::ControlFlow),
        (KeywordId::Import, KeywordCategory::Module),
    ];
    for (id, category) in keyword_cases {
        assert_eq!(keywords::category(id), category, "{:?}", id);
    }

    // Only arithmetic and comparison operators combine two operands.
    for info in operators::OPERATORS {
        let binary = matches!(
            operators::category(info.id),
            OperatorCategory::Arithmetic | OperatorCategory::Comparison
        );
        assert_eq!(info.precedence.is_some(), binary, "{:?}", info.id);
    }
    assert_eq!(operators::category(OperatorId::PlusPlus), OperatorCategory::Update);
    assert_eq!(operators::category(OperatorId::SlashEq), OperatorCategory::Assignment);
    assert_eq!(operators::category(OperatorId::Bang), OperatorCategory::Logical);

    for info in punctuation::PUNCTUATION {
        let expected = match info.id {
            PunctuationId::Comma | PunctuationId::Semicolon | PunctuationId::Colon => PunctuationCategory::Separator,
            _ => PunctuationCategory::Delimiter,
        };
        assert_eq!(punctuation::category(info.id), expected, "{:?}", info.id);
    }
}

#[test]
fn binary_operator_precedences() {
    use operators::OperatorId::*;

    let expected = [
        (EqEq, Precedence::Equals),
        (NotEq, Precedence::Equals),
        (Lt, Precedence::LessGreater),
        (LtEq, Precedence::LessGreater),
        (Gt, Precedence::LessGreater),
        (GtEq, Precedence::LessGreater),
        (Plus, Precedence::Sum),
        (Minus, Precedence::Sum),
        (Star, Precedence::Product),
        (Slash, Precedence::Product),
        (SlashSlash, Precedence::Product),
        (Percent, Precedence::Modulo),
        (StarStar, Precedence::Power),
    ];
    for (id, prec) in expected {
        assert_eq!(operators::infix_precedence(id), Some(prec), "{:?}", id);
    }

    for id in [Assign, PlusEq, MinusEq, StarEq, SlashEq, PlusPlus, MinusMinus, Bang] {
        assert_eq!(operators::infix_precedence(id), None, "{:?} has no infix meaning", id);
    }
}
