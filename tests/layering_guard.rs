//! Layering guardrails for the workspace crates.
//!
//! - `myte_core` holds vocabulary only and must stay dependency-free.
//! - `myte_syntax` is the reusable frontend and must not pull in CLI or logging-setup crates; only the binary
//!   decides how arguments are parsed and where logs go.

const CLI_ONLY_CRATES: &[&str] = &["clap", "tracing-subscriber", "serde_json"];

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/myte_core/Cargo.toml");
    assert_eq!(dependency_names(manifest), Vec::<String>::new());
}

#[test]
fn syntax_crate_does_not_depend_on_cli_crates() {
    let manifest = include_str!("../crates/myte_syntax/Cargo.toml");
    let names = dependency_names(manifest);

    assert!(names.iter().any(|n| n == "myte_core"), "syntax crate should build on myte_core");
    for forbidden in CLI_ONLY_CRATES {
        assert!(
            !names.iter().any(|n| n == forbidden),
            "`{forbidden}` must not appear in myte_syntax [dependencies]; it belongs to the root crate"
        );
    }
}

#[test]
fn core_crate_does_not_depend_on_syntax() {
    let manifest = include_str!("../crates/myte_core/Cargo.toml");
    assert!(!manifest.contains("myte_syntax"));
}
