//! Snapshot tests for rendered trees, token dumps and diagnostics
//!
//! Snapshots are inline so a change in rendering shows up directly in review.

use std::fs;
use std::path::Path;

use myte::{lexer, parser};

/// One rendered statement per line.
fn render_lines(source: &str) -> String {
    let parsed = parser::parse(source);
    assert!(parsed.diagnostics.is_empty(), "{:#?}", parsed.diagnostics);
    parsed
        .program
        .statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid").join(name);
    fs::read_to_string(path).unwrap()
}

#[test]
fn bindings_fixture() {
    insta::assert_snapshot!(render_lines(&fixture("bindings.myte")), @r#"
    # Bindings and literals
    var five = 5;
    const ten = 10;
    var ratio = 2.5;
    var half = .5;
    var greeting = 'hello world';
    var quoted = "'Hello', she said.";
    var nothing = nil;
    var flag = ((!true) == false);
    var total = ((five + (ten * ratio)) - (7 // (2 % (3 ** 2))));
    "#);
}

#[test]
fn functions_fixture() {
    insta::assert_snapshot!(render_lines(&fixture("functions.myte")), @r#"
    const add = fn(x,y){(x + y)};
    const fib = fn(n){if (n < 2) return n;return (fib((n - 1)) + fib((n - 2)));};
    var result = add(five, ten);
    fib(10)
    fn(x){(x * x)}(4)
    "#);
}

#[test]
fn control_flow_fixture() {
    insta::assert_snapshot!(render_lines(&fixture("control_flow.myte")), @r#"
    var grade = fn(score){if (score >= 90) return "A"; else if (score >= 80) return "B"; else return "C";};
    for (i < 10) # keep goingstep(i, 1)
    if (a <= b) a else b
    "#);
}

#[test]
fn token_dump() {
    let (tokens, _) = lexer::lex("if (x >= 10) { return x ** 2; }");
    let dump = tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(dump, @r#"
    0:1 if "if"
    0:4 ( "("
    0:5 IDENT "x"
    0:7 >= ">="
    0:10 INT "10"
    0:12 ) ")"
    0:14 { "{"
    0:16 return "return"
    0:23 IDENT "x"
    0:25 ** "**"
    0:28 INT "2"
    0:29 ; ";"
    0:31 } "}"
    0:32 EOF ""
    "#);
}

#[test]
fn diagnostics_accumulate_in_source_order() {
    let parsed = parser::parse("var = 5;\nvar x 1;\nadd(1, 2\n");
    let report = parsed.diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(report, @r"
    expected next token to be IDENT, got = instead. Line: 0, column: 5
    expected next token to be ;, got INT instead. Line: 1, column: 7
    expected next token to be ), got EOF instead. Line: 3, column: 1
    ");
    insta::assert_snapshot!(parsed.program.to_string(), @"var x = nil;1");
}
