use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use myte::lexer::{self, TokenKind};
use myte_core::lang::{keywords, operators, punctuation};

/// Every registry spelling must lex to exactly one token carrying that registry id.
///
/// This keeps the tokenizer's hand-written dispatch in lockstep with `myte_core::lang`.
#[test]
fn lexer_agrees_with_registries() {
    for info in keywords::KEYWORDS {
        assert_eq!(single_token(info.canonical), TokenKind::Keyword(info.id), "{}", info.canonical);
    }
    for info in operators::OPERATORS {
        assert_eq!(single_token(info.spelling), TokenKind::Operator(info.id), "{}", info.spelling);
    }
    for info in punctuation::PUNCTUATION {
        assert_eq!(
            single_token(info.canonical),
            TokenKind::Punctuation(info.id),
            "{}",
            info.canonical
        );
    }
}

fn single_token(spelling: &str) -> TokenKind {
    let (tokens, diagnostics) = lexer::lex(spelling);
    assert!(diagnostics.is_empty(), "{spelling}: {diagnostics:?}");
    assert_eq!(tokens.len(), 2, "{spelling} should be one token plus EOF: {tokens:?}");
    assert_eq!(tokens[0].literal, spelling);
    tokens[0].kind
}

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "return"` or
/// `match name.as_str() { "fn" => ... }` in Rust source files where we expect callers to go through
/// `myte_core::lang` registries instead.
///
/// Notes:
/// - We allow occurrences in `crates/myte_core/src/lang/**` (registries themselves) and in tests/fixtures.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = keyword_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer myte_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn keyword_spellings() -> Vec<&'static str> {
    let set: BTreeSet<&'static str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/myte_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings.
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
