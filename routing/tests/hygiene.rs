//! Hygiene checks for the routing crate, enforced at test time.
//!
//! Scans the routing crate's production sources for antipatterns. Route
//! recognition sits on the request path of the web application, so none of
//! these may appear; `_test.rs` files are exempt.

use std::fs;
use std::path::Path;

/// (needle, budget, label)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic"),
    ("unreachable!(", 0, "unreachable"),
    ("todo!(", 0, "todo"),
    ("unimplemented!(", 0, "unimplemented"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "dot ok"),
    ("#[allow(dead_code)]", 0, "allow dead_code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], needle: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(needle)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (needle, budget, label) in BUDGETS {
        let found = hits(&files, needle);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
            failures.push(format!("{label} budget exceeded: found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn regexes_are_only_built_by_the_pattern_compiler() {
    let files = source_files();
    let offenders: Vec<String> = hits(&files, "Regex::new(")
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !path.ends_with("pattern.rs"))
        .collect();
    assert!(offenders.is_empty(), "Regex::new outside pattern.rs: {offenders:?}");
}
