//! TOML test file parsing

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::shooting::{AimScheme, PowerPreset};

/// Complete test definition from TOML file
#[derive(Debug, Deserialize)]
pub struct TestDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub setup: TestSetup,
    #[serde(default)]
    pub input: Vec<FrameInput>,
    pub expect: TestExpectations,
}

/// Test setup configuration
#[derive(Debug, Default, Deserialize)]
pub struct TestSetup {
    #[serde(default)]
    pub aim: AimScheme,
    #[serde(default)]
    pub preset: PowerPreset,
    /// Overrides the settle timeout (seconds, 0 disables)
    pub settle_timeout: Option<f32>,
    /// Run at least this many frames
    pub frames: Option<u64>,
}

/// Pointer or debug action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    Press,
    Move,
    Release,
    Leave,
    TestShot,
    Teleport,
}

/// One action at a specific frame
#[derive(Debug, Clone, Deserialize)]
pub struct FrameInput {
    pub frame: u64,
    pub action: ScriptAction,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// Expected test outcomes
#[derive(Debug, Default, Deserialize)]
pub struct TestExpectations {
    #[serde(default)]
    pub sequence: Vec<ExpectedEvent>,
    /// Exact number of times an event fires over the whole run
    #[serde(default)]
    pub count: Vec<ExpectedCount>,
    /// Multiple state assertions at different frames (uses [[expect.state]] TOML syntax)
    #[serde(default)]
    pub state: Vec<StateAssertion>,
}

/// Expected event in sequence
#[derive(Debug, Deserialize)]
pub struct ExpectedEvent {
    pub event: String,
    pub frame_min: Option<u64>,
    pub frame_max: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedCount {
    pub event: String,
    pub count: usize,
}

/// State assertion after simulation
#[derive(Debug, Clone, Deserialize)]
pub struct StateAssertion {
    pub after_frame: u64,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Parse a test file from path
pub fn parse_test_file(path: &Path) -> Result<TestDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let toml = r#"
name = "Test"
[setup]
aim = "angle"
preset = "soft"

[[input]]
frame = 0
action = "press"
x = 100.0
y = 200.0

[[input]]
frame = 30
action = "release"

[expect]
[[expect.sequence]]
event = "ShotRelease"
frame_max = 31
"#;
        let def: TestDefinition = toml::from_str(toml).unwrap();
        assert_eq!(def.name, "Test");
        assert_eq!(def.setup.aim, AimScheme::Angle);
        assert_eq!(def.setup.preset, PowerPreset::Soft);
        assert_eq!(def.input.len(), 2);
        assert_eq!(def.input[0].action, ScriptAction::Press);
        assert_eq!(def.input[1].x, 0.0);
        assert_eq!(def.expect.sequence[0].frame_max, Some(31));
    }

    #[test]
    fn test_setup_is_optional() {
        let toml = r#"
name = "Minimal"
[[input]]
frame = 5
action = "test_shot"
[expect]
"#;
        let def: TestDefinition = toml::from_str(toml).unwrap();
        assert_eq!(def.setup.aim, AimScheme::Direction);
        assert_eq!(def.input[0].action, ScriptAction::TestShot);
    }
}
