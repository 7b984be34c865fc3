//! Integration Test: Decision Core Purity
//!
//! **Policy**: The emotion decision path is a pure function of its input.
//! Strategies, state, facets and the managers MUST NOT perform I/O, read a
//! clock, draw random numbers, spawn work, or print.
//!
//! **Policy**: No global mutable state anywhere in `emotion-core`. Shared
//! access goes through an explicitly constructed `EmotionConnector`.
//!
//! **Policy**: Strategy rule tables do not log; the manager logs transitions.
//!
//! The configuration module is the one place in the core allowed to touch
//! the filesystem and environment, and is excluded from the I/O scan.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the core crate's sources
fn core_src() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../emotion/core/src")
}

/// A forbidden token and why it is forbidden
struct Rule {
    token: &'static str,
    reason: &'static str,
}

const IMPURE: &[Rule] = &[
    Rule { token: "std::fs", reason: "filesystem I/O" },
    Rule { token: "std::net", reason: "network I/O" },
    Rule { token: "std::process", reason: "process I/O" },
    Rule { token: "std::env", reason: "environment access" },
    Rule { token: "std::time", reason: "clock access" },
    Rule { token: "Instant::", reason: "clock access" },
    Rule { token: "SystemTime", reason: "clock access" },
    Rule { token: "rand::", reason: "randomness" },
    Rule { token: "std::thread", reason: "background work" },
    Rule { token: "tokio::spawn", reason: "background work" },
    Rule { token: "tokio::time", reason: "clock access" },
    Rule { token: "println!", reason: "stdout output" },
    Rule { token: "eprintln!", reason: "stderr output" },
];

const GLOBAL_STATE: &[Rule] = &[
    Rule { token: "static mut", reason: "global mutable state" },
    Rule { token: "lazy_static!", reason: "global state" },
    Rule { token: "OnceLock", reason: "global state" },
    Rule { token: "OnceCell", reason: "global state" },
    Rule { token: "thread_local!", reason: "thread-global state" },
    Rule { token: "Lazy<", reason: "global state" },
];

const LOGGING: &[Rule] = &[Rule { token: "tracing", reason: "logging inside a rule table" }];

#[test]
fn test_decision_path_has_no_side_effects() {
    let root = core_src();
    let violations = scan(&root, IMPURE, |path| !path.starts_with(root.join("config")));
    report("Impure code found in the emotion decision path", &violations);
}

#[test]
fn test_no_global_mutable_state() {
    let violations = scan(&core_src(), GLOBAL_STATE, |_| true);
    report("Global state found in emotion-core", &violations);
}

#[test]
fn test_strategies_do_not_log() {
    let violations = scan(&core_src().join("strategy"), LOGGING, |_| true);
    report("Logging found in a strategy rule table", &violations);
}

#[test]
fn test_scanner_sees_sources() {
    // Guards against the scans passing because the path moved
    let files = rust_files(&core_src());
    assert!(
        files.iter().any(|p| p.ends_with("strategy/default.rs")),
        "emotion-core sources not found under {}",
        core_src().display()
    );
}

fn report(title: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n{title}:");
    for violation in violations {
        eprintln!("  {violation}");
    }
    panic!("\nFound {} violation(s). Fix these before merging!", violations.len());
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

fn scan(dir: &Path, rules: &[Rule], include: impl Fn(&Path) -> bool) -> Vec<String> {
    let mut violations = Vec::new();
    for path in rust_files(dir) {
        if include(&path) {
            check_file(&path, rules, &mut violations);
        }
    }
    violations
}

fn check_file(path: &Path, rules: &[Rule], violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (idx, line) in content.lines().enumerate() {
        // Test modules sit at the end of each file
        if line.trim_start().starts_with("#[cfg(test)]") {
            break;
        }

        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        for rule in rules {
            if code_part.contains(rule.token) {
                violations.push(format!(
                    "{}:{} - {}: {}",
                    path.display(),
                    idx + 1,
                    rule.reason,
                    line.trim()
                ));
            }
        }
    }
}
