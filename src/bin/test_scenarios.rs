//! Scenario test runner CLI
//!
//! Usage:
//!   cargo run --bin test-scenarios              # Run all tests
//!   cargo run --bin test-scenarios -- scoring/  # Run category
//!   cargo run --bin test-scenarios -- shooting/straight_release  # Run single test
//!   cargo run --bin test-scenarios -- --verbose # Show descriptions and full failures

use std::path::Path;

use hoopshot::testing::{SCENARIOS_DIR, TestResult, discover_tests, parser::parse_test_file, run_test};

#[derive(Default)]
struct Tally {
    passed: u32,
    failed: u32,
    errors: u32,
}

impl Tally {
    fn add(&mut self, result: &TestResult) {
        match result {
            TestResult::Pass { .. } => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
    }

    fn ok(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let filter = args.iter().find(|a| !a.starts_with('-')).cloned();

    println!("Scenario Tests");
    println!("==============\n");

    let scenarios_path = Path::new(SCENARIOS_DIR);
    if !scenarios_path.exists() {
        println!("No scenarios directory found at {}", SCENARIOS_DIR);
        std::process::exit(1);
    }

    let tests = discover_tests(scenarios_path, filter.as_deref());
    if tests.is_empty() {
        match filter {
            Some(f) => println!("No test files match '{}'.", f),
            None => println!("No test files found."),
        }
        std::process::exit(1);
    }

    let mut tally = Tally::default();
    let mut current_category = String::new();

    for test_path in &tests {
        let rel_path = test_path.strip_prefix(scenarios_path).unwrap_or(test_path);

        let category = rel_path
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        if category != current_category && !category.is_empty() {
            if !current_category.is_empty() {
                println!();
            }
            println!("{}/", category);
            current_category = category;
        }

        let test_name = rel_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let result = match parse_test_file(test_path) {
            Ok(def) => {
                if verbose {
                    if let Some(ref description) = def.description {
                        println!("  # {}", description);
                    }
                }
                run_test(&def)
            }
            Err(message) => TestResult::Error { message },
        };

        tally.add(&result);
        print_result(&test_name, &result, verbose);
    }

    println!("\n==============");
    println!(
        "Results: {} passed, {} failed, {} errors",
        tally.passed, tally.failed, tally.errors
    );

    if !tally.ok() {
        std::process::exit(1);
    }
}

fn print_result(name: &str, result: &TestResult, verbose: bool) {
    let dots = ".".repeat(40 - name.len().min(39));

    match result {
        TestResult::Pass { frames } => println!("  {} {} PASS ({} frames)", name, dots, frames),
        TestResult::Fail { error } => {
            println!("  {} {} FAIL", name, dots);
            if verbose {
                println!("    {}", error);
            } else {
                println!("    {}", error.message);
            }
        }
        TestResult::Error { message } => {
            println!("  {} {} ERROR", name, dots);
            println!("    {}", message);
        }
    }
}
