//! Runs every TOML scenario under tests/scenarios

use std::path::Path;

use hoopshot::testing::{SCENARIOS_DIR, TestResult, discover_tests, parser::parse_test_file, run_test};

#[test]
fn test_all_scenarios_pass() {
    let tests = discover_tests(Path::new(SCENARIOS_DIR), None);
    assert!(!tests.is_empty(), "no scenarios found in {}", SCENARIOS_DIR);

    let mut failures = Vec::new();
    for path in &tests {
        let result = match parse_test_file(path) {
            Ok(def) => run_test(&def),
            Err(message) => TestResult::Error { message },
        };
        match result {
            TestResult::Pass { .. } => {}
            TestResult::Fail { error } => failures.push(format!("{}: {}", path.display(), error)),
            TestResult::Error { message } => failures.push(format!("{}: {}", path.display(), message)),
        }
    }

    assert!(failures.is_empty(), "{} scenario(s) failed:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn test_filter_selects_category() {
    let scoring = discover_tests(Path::new(SCENARIOS_DIR), Some("scoring/"));
    assert!(!scoring.is_empty());
    assert!(scoring.iter().all(|p| p.to_string_lossy().contains("scoring")));
}
