//! Test execution engine
//!
//! Drives a headless [`Game`] at a fixed 60 fps: scripted actions for a frame
//! run first, then the frame tick, then any state checks for that frame.

use std::fs;
use std::path::{Path, PathBuf};

use crate::game::Game;
use crate::settings::InitSettings;
use crate::tuning::ShotTweaks;

use super::assertions::{
    AssertionError, CapturedEvent, GameSnapshot, check_counts, check_sequence, check_state,
};
use super::input::ScriptedInputs;
use super::parser::TestDefinition;

/// Simulated frame length
pub const TEST_FRAME_DT: f32 = 1.0 / 60.0;

/// Result of running a test
#[derive(Debug)]
pub enum TestResult {
    Pass { frames: u64 },
    Fail { error: AssertionError },
    Error { message: String },
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }
}

/// Build the game a test starts from
fn test_game(test: &TestDefinition) -> Game {
    let settings = InitSettings {
        aim_scheme: test.setup.aim,
        power_preset: test.setup.preset,
        ..Default::default()
    };
    let mut tweaks = ShotTweaks::default();
    if let Some(timeout) = test.setup.settle_timeout {
        tweaks.settle_timeout = timeout;
    }
    Game::new(&settings, &tweaks)
}

/// Run a single test and return the result
pub fn run_test(test: &TestDefinition) -> TestResult {
    let mut scripted = ScriptedInputs::from_inputs(&test.input);

    // Run long enough for every state assertion
    for state in &test.expect.state {
        scripted.set_max_frame(state.after_frame);
    }
    if let Some(frames) = test.setup.frames {
        scripted.set_max_frame(frames);
    }
    if scripted.max_frame == 0 {
        scripted.max_frame = 60; // Default 1 second
    }

    let mut states = test.expect.state.clone();
    states.sort_by_key(|s| s.after_frame);
    if let Some(late) = states.iter().find(|s| s.after_frame > scripted.max_frame) {
        return TestResult::Error {
            message: format!("State check at frame {} is never reached", late.after_frame),
        };
    }

    let mut game = test_game(test);
    let mut captured = Vec::new();
    let mut next_state = 0;

    for frame in 0..=scripted.max_frame {
        let now = frame as f64 * TEST_FRAME_DT as f64;
        scripted.apply(frame, now, &mut game);
        game.tick(TEST_FRAME_DT, now);

        captured.extend(
            game.events
                .drain()
                .iter()
                .map(|event| CapturedEvent::from_bus_event(frame, event)),
        );

        while next_state < states.len() && states[next_state].after_frame == frame {
            let snapshot = GameSnapshot::capture(&game);
            if let Err(mut error) = check_state(&states[next_state], &snapshot) {
                error.message = format!("After frame {}: {}", frame, error.message);
                return TestResult::Fail { error };
            }
            next_state += 1;
        }
    }

    if let Err(error) = check_sequence(&test.expect.sequence, &captured) {
        return TestResult::Fail { error };
    }
    if let Err(error) = check_counts(&test.expect.count, &captured) {
        return TestResult::Fail { error };
    }

    TestResult::Pass {
        frames: scripted.max_frame + 1,
    }
}

/// All `.toml` files under `base` whose relative path contains `filter`, sorted
pub fn discover_tests(base: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut tests = Vec::new();
    discover_tests_recursive(base, base, filter, &mut tests);
    tests.sort();
    tests
}

fn discover_tests_recursive(base: &Path, current: &Path, filter: Option<&str>, tests: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(current) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            discover_tests_recursive(base, &path, filter, tests);
        } else if path.extension().map(|e| e == "toml").unwrap_or(false) {
            if let Some(f) = filter {
                let rel = path.strip_prefix(base).unwrap_or(&path).to_string_lossy();
                if !rel.contains(f) {
                    continue;
                }
            }
            tests.push(path);
        }
    }
}
