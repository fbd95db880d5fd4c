//! Results of a batch run

use serde::{Deserialize, Serialize};

use crate::shooting::{AimScheme, PowerPreset};

/// Outcome of one simulated shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub scored: bool,
    pub power: f32,
    /// Frames from release until the attempt reset
    pub frames: u32,
}

/// Totals for one aim scheme / power preset pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboResult {
    pub aim_scheme: AimScheme,
    pub power_preset: PowerPreset,
    pub shots: u32,
    pub makes: u32,
    /// Shots that never reset within the frame cap
    pub stuck: u32,
    /// Make percentage (0-100, finalized)
    pub make_pct: f32,
    pub avg_power: f32,
    pub avg_frames: f32,
    #[serde(skip)]
    power_sum: f32,
    #[serde(skip)]
    frames_sum: u64,
}

impl ComboResult {
    pub fn new(aim_scheme: AimScheme, power_preset: PowerPreset) -> Self {
        Self {
            aim_scheme,
            power_preset,
            shots: 0,
            makes: 0,
            stuck: 0,
            make_pct: 0.0,
            avg_power: 0.0,
            avg_frames: 0.0,
            power_sum: 0.0,
            frames_sum: 0,
        }
    }

    pub fn record(&mut self, outcome: Option<ShotOutcome>) {
        self.shots += 1;
        let Some(outcome) = outcome else {
            self.stuck += 1;
            return;
        };
        if outcome.scored {
            self.makes += 1;
        }
        self.power_sum += outcome.power;
        self.frames_sum += outcome.frames as u64;
    }

    /// Calculate derived statistics
    pub fn finalize(&mut self) {
        if self.shots > 0 {
            self.make_pct = self.makes as f32 / self.shots as f32 * 100.0;
        }
        let finished = self.shots - self.stuck;
        if finished > 0 {
            self.avg_power = self.power_sum / finished as f32;
            self.avg_frames = self.frames_sum as f32 / finished as f32;
        }
    }
}

/// Whole batch, as printed or written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSummary {
    pub timestamp: String,
    pub seed: u64,
    pub results: Vec<ComboResult>,
}

impl SimSummary {
    pub fn format_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<10} {:<9} {:>6} {:>6} {:>7} {:>9} {:>8}\n",
            "Aim", "Preset", "Shots", "Makes", "Make%", "AvgPower", "Frames"
        ));
        out.push_str(&"-".repeat(61));
        out.push('\n');
        for r in &self.results {
            out.push_str(&format!(
                "{:<10} {:<9} {:>6} {:>6} {:>6.1}% {:>9.1} {:>8.0}\n",
                r.aim_scheme.name(),
                r.power_preset.name(),
                r.shots,
                r.makes,
                r.make_pct,
                r.avg_power,
                r.avg_frames
            ));
        }
        out
    }
}
