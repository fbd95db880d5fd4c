//! Session state - score, shots, and the shot phase machine
//!
//! `Idle -> Charging -> InFlight -> Idle`. Charging and in-play are both
//! derived from the single phase value, so they can never be true together.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Where the current attempt is
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ShotPhase {
    #[default]
    Idle,
    /// Pointer held since `started_at` (game clock seconds)
    Charging { started_at: f64 },
    InFlight,
}

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    OutOfBounds,
    Settled,
}

impl std::fmt::Display for ResetReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetReason::OutOfBounds => write!(f, "out_of_bounds"),
            ResetReason::Settled => write!(f, "settled"),
        }
    }
}

/// Score and per-attempt bookkeeping for the single session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub score: u32,
    pub shots_taken: u32,
    phase: ShotPhase,
    charge_power: f32, // Seconds of charge, [0, MAX_CHARGE_SECONDS]
    scored_this_attempt: bool,
    /// Seconds the ball has been below the settle speed this attempt
    resting_time: f32,
}

impl SessionState {
    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.phase, ShotPhase::Charging { .. })
    }

    pub fn is_ball_in_play(&self) -> bool {
        matches!(self.phase, ShotPhase::InFlight)
    }

    pub fn charge_started_at(&self) -> Option<f64> {
        match self.phase {
            ShotPhase::Charging { started_at } => Some(started_at),
            _ => None,
        }
    }

    pub fn charge_power(&self) -> f32 {
        self.charge_power
    }

    pub fn scored_this_attempt(&self) -> bool {
        self.scored_this_attempt
    }

    /// Idle -> Charging. Returns false (and changes nothing) from any other phase.
    pub fn begin_charge(&mut self, now: f64) -> bool {
        if self.phase != ShotPhase::Idle {
            return false;
        }
        self.phase = ShotPhase::Charging { started_at: now };
        self.charge_power = 0.0;
        true
    }

    /// Refresh the displayed charge while charging. Never decreases.
    pub fn set_charge(&mut self, charge: f32) {
        if self.is_charging() {
            self.charge_power = charge.clamp(self.charge_power, MAX_CHARGE_SECONDS);
        }
    }

    /// Charging -> InFlight. Counts the shot and keeps the final charge for display.
    pub fn commit_shot(&mut self, charge: f32) -> bool {
        if !self.is_charging() {
            return false;
        }
        self.launch(charge);
        true
    }

    /// Idle -> InFlight without charging (debug test shot)
    pub fn commit_test_shot(&mut self) -> bool {
        if self.phase != ShotPhase::Idle {
            return false;
        }
        self.launch(0.0);
        true
    }

    fn launch(&mut self, charge: f32) {
        self.phase = ShotPhase::InFlight;
        self.shots_taken += 1;
        self.charge_power = charge.clamp(0.0, MAX_CHARGE_SECONDS);
        self.scored_this_attempt = false;
        self.resting_time = 0.0;
    }

    /// Count a basket. At most once per attempt and only while in flight.
    pub fn record_score(&mut self) -> bool {
        if !self.is_ball_in_play() || self.scored_this_attempt {
            return false;
        }
        self.scored_this_attempt = true;
        self.score += 1;
        true
    }

    /// Track how long the ball has been nearly still.
    /// Returns true once it has rested for `timeout` seconds (0 disables).
    pub fn observe_rest(&mut self, speed: f32, dt: f32, timeout: f32) -> bool {
        if !self.is_ball_in_play() || timeout <= 0.0 {
            return false;
        }
        if speed < SETTLE_SPEED {
            self.resting_time += dt;
        } else {
            self.resting_time = 0.0;
        }
        self.resting_time >= timeout
    }

    /// End the attempt: back to Idle with a clean slate (score and shots kept)
    pub fn reset_attempt(&mut self) {
        self.phase = ShotPhase::Idle;
        self.charge_power = 0.0;
        self.scored_this_attempt = false;
        self.resting_time = 0.0;
    }
}

/// Axis-aligned play volume; leaving it ends the attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayBounds {
    pub min_y: f32,
    pub max_abs_x: f32,
    pub max_abs_z: f32,
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self {
            min_y: OUT_OF_BOUNDS_MIN_Y,
            max_abs_x: OUT_OF_BOUNDS_MAX_ABS_X,
            max_abs_z: OUT_OF_BOUNDS_MAX_ABS_Z,
        }
    }
}

impl PlayBounds {
    pub fn is_out(&self, position: Vec3) -> bool {
        position.y < self.min_y || position.x.abs() > self.max_abs_x || position.z.abs() > self.max_abs_z
    }
}
