//! Scenario testing system for deterministic game testing
//!
//! Runs scripted pointer input from TOML files against a headless
//! [`Game`](crate::game::Game) and checks events and state.

pub mod assertions;
pub mod input;
pub mod parser;
pub mod runner;

pub use assertions::{AssertionError, GameSnapshot, check_counts, check_sequence, check_state};
pub use input::ScriptedInputs;
pub use parser::{
    ExpectedCount, ExpectedEvent, FrameInput, ScriptAction, StateAssertion, TestDefinition,
    TestExpectations, TestSetup,
};
pub use runner::{TestResult, discover_tests, run_test};

/// Default path for test scenarios
pub const SCENARIOS_DIR: &str = "tests/scenarios";
