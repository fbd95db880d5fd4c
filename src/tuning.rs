//! Global gameplay tuning settings

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::world::CourtLayout;

// Serde default functions for optional fields
fn default_settle_timeout() -> f32 {
    SETTLE_TIMEOUT
}
fn default_backboard_restitution() -> f32 {
    BACKBOARD_RESTITUTION
}

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameplayTuning {
    pub gravity: f32,
    pub ball_restitution: f32,
    pub ball_friction: f32,
    pub court_restitution: f32,
    pub rim_restitution: f32,
    #[serde(default = "default_backboard_restitution")]
    pub backboard_restitution: f32,
    /// Seconds a still ball may sit before the attempt ends (0 disables)
    #[serde(default = "default_settle_timeout")]
    pub settle_timeout: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ball_restitution: BALL_RESTITUTION,
            ball_friction: BALL_FRICTION,
            court_restitution: COURT_RESTITUTION,
            rim_restitution: RIM_RESTITUTION,
            backboard_restitution: default_backboard_restitution(),
            settle_timeout: default_settle_timeout(),
        }
    }
}

impl GameplayTuning {
    pub fn apply_to(&self, tweaks: &mut ShotTweaks) {
        tweaks.gravity = self.gravity;
        tweaks.ball_restitution = self.ball_restitution;
        tweaks.ball_friction = self.ball_friction;
        tweaks.court_restitution = self.court_restitution;
        tweaks.rim_restitution = self.rim_restitution;
        tweaks.backboard_restitution = self.backboard_restitution;
        tweaks.settle_timeout = self.settle_timeout;
    }
}

/// Runtime gameplay values the game is built from
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ShotTweaks {
    pub gravity: f32,
    pub ball_restitution: f32,
    pub ball_friction: f32,
    pub court_restitution: f32,
    pub rim_restitution: f32,
    pub backboard_restitution: f32,
    pub settle_timeout: f32,
}

impl Default for ShotTweaks {
    fn default() -> Self {
        let defaults = GameplayTuning::default();
        Self {
            gravity: defaults.gravity,
            ball_restitution: defaults.ball_restitution,
            ball_friction: defaults.ball_friction,
            court_restitution: defaults.court_restitution,
            rim_restitution: defaults.rim_restitution,
            backboard_restitution: defaults.backboard_restitution,
            settle_timeout: defaults.settle_timeout,
        }
    }
}

impl ShotTweaks {
    pub const LABELS: [&'static str; 7] = [
        "Gravity",
        "Ball Restitution",
        "Ball Friction",
        "Court Restitution",
        "Rim Restitution",
        "Backboard Restitution",
        "Settle Timeout",
    ];

    pub fn get_value(&self, index: usize) -> f32 {
        match index {
            0 => self.gravity,
            1 => self.ball_restitution,
            2 => self.ball_friction,
            3 => self.court_restitution,
            4 => self.rim_restitution,
            5 => self.backboard_restitution,
            6 => self.settle_timeout,
            _ => 0.0,
        }
    }

    pub fn get_default_value(index: usize) -> f32 {
        match index {
            0 => GRAVITY,
            1 => BALL_RESTITUTION,
            2 => BALL_FRICTION,
            3 => COURT_RESTITUTION,
            4 => RIM_RESTITUTION,
            5 => BACKBOARD_RESTITUTION,
            6 => SETTLE_TIMEOUT,
            _ => 0.0,
        }
    }

    pub fn is_modified(&self, index: usize) -> bool {
        (self.get_value(index) - Self::get_default_value(index)).abs() > 0.001
    }

    /// Labels of values that differ from the built-in defaults
    pub fn modified_labels(&self) -> Vec<&'static str> {
        (0..Self::LABELS.len())
            .filter(|&i| self.is_modified(i))
            .map(|i| Self::LABELS[i])
            .collect()
    }

    /// Court layout with these values applied
    pub fn court_layout(&self) -> CourtLayout {
        let mut layout = CourtLayout {
            gravity: self.gravity,
            ..Default::default()
        };
        layout.ball_material.restitution = self.ball_restitution;
        layout.ball_material.friction = self.ball_friction;
        layout.court_material.restitution = self.court_restitution;
        layout.rim_material.restitution = self.rim_restitution;
        layout.backboard_material.restitution = self.backboard_restitution;
        layout
    }
}

pub fn load_gameplay_tuning_from_file(path: &str) -> Result<GameplayTuning, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/// Load the global tuning file into `tweaks`, falling back to defaults on error
pub fn apply_global_tuning(tweaks: &mut ShotTweaks) -> Result<(), String> {
    match load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE) {
        Ok(tuning) => {
            tuning.apply_to(tweaks);
            let modified = tweaks.modified_labels();
            if !modified.is_empty() {
                info!("Tuning overrides: {}", modified.join(", "));
            }
            Ok(())
        }
        Err(err) => {
            GameplayTuning::default().apply_to(tweaks);
            Err(err)
        }
    }
}

/// Tweaks loaded from the global tuning file (defaults + warning on error)
pub fn load_global_tweaks() -> ShotTweaks {
    let mut tweaks = ShotTweaks::default();
    if let Err(err) = apply_global_tuning(&mut tweaks) {
        warn!("{}", err);
    }
    tweaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unmodified() {
        let tweaks = ShotTweaks::default();
        assert!(tweaks.modified_labels().is_empty());
        assert_eq!(tweaks.gravity, GRAVITY);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{
            "gravity": 9.8,
            "ball_restitution": 0.5,
            "ball_friction": 0.4,
            "court_restitution": 0.7,
            "rim_restitution": 0.5
        }"#;
        let tuning: GameplayTuning = serde_json::from_str(json).unwrap();
        assert_eq!(tuning.settle_timeout, SETTLE_TIMEOUT);
        assert_eq!(tuning.backboard_restitution, BACKBOARD_RESTITUTION);

        let mut tweaks = ShotTweaks::default();
        tuning.apply_to(&mut tweaks);
        assert_eq!(
            tweaks.modified_labels(),
            vec!["Gravity", "Ball Restitution", "Ball Friction", "Court Restitution", "Rim Restitution"]
        );
    }

    #[test]
    fn test_layout_reflects_tweaks() {
        let tweaks = ShotTweaks {
            gravity: 10.0,
            rim_restitution: 0.1,
            ..Default::default()
        };
        let layout = tweaks.court_layout();
        assert_eq!(layout.gravity, 10.0);
        assert_eq!(layout.rim_material.restitution, 0.1);
        assert_eq!(layout.rim_material.friction, RIM_FRICTION);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_gameplay_tuning_from_file("config/does_not_exist.json").unwrap_err();
        assert!(err.starts_with("Failed to read config/does_not_exist.json"));
    }
}
