//! Settings for game initialization
//!
//! Loads startup preferences (aim scheme, power preset, window size) from an
//! init_settings.json file in the config directory. Command-line flags
//! override what the file says.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::shooting::{AimScheme, PowerPreset};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Startup settings
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    /// How drags map to aim ("direction" or "angle")
    pub aim_scheme: AimScheme,
    /// Power curve ("standard" or "soft")
    pub power_preset: PowerPreset,
    pub window_width: u32,
    pub window_height: u32,
    /// Draw the predicted arc while charging
    pub show_preview: bool,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            aim_scheme: AimScheme::Direction,
            power_preset: PowerPreset::Standard,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            show_preview: true,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", SETTINGS_FILE);
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Apply `--aim <scheme>` and `--preset <name>` flags
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), String> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--aim" => {
                    let value = iter.next().ok_or("--aim needs a value (direction|angle)")?;
                    self.aim_scheme =
                        AimScheme::parse(value).ok_or_else(|| format!("Unknown aim scheme: {}", value))?;
                }
                "--preset" => {
                    let value = iter.next().ok_or("--preset needs a value (standard|soft)")?;
                    self.power_preset =
                        PowerPreset::parse(value).ok_or_else(|| format!("Unknown power preset: {}", value))?;
                }
                "--no-preview" => self.show_preview = false,
                _ => {}
            }
        }
        Ok(())
    }
}
