//! Event type definitions

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::session::ResetReason;

/// Configuration snapshot logged at session start
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub aim_scheme: String,
    pub power_preset: String,
    pub gravity: f32,
    pub base_power: f32,
    pub charge_gain: f32,
    pub max_charge: f32,
    pub settle_timeout: f32,
}

/// All game events that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // RFC 3339
    },
    /// Configuration snapshot (logged after session start)
    Config(GameConfig),

    // === Shot Events ===
    /// Pointer pressed, charging began
    ChargeStart { pos: (f32, f32) },
    /// Shot launched
    ShotRelease {
        shot: u32,
        charge: f32,
        power: f32,
        yaw: f32,       // degrees
        elevation: f32, // degrees
    },
    /// Debug shot dropped through the rim
    TestShot { shot: u32 },

    // === Scoring Events ===
    /// Ball went through the hoop
    Scored { score: u32, shots: u32 },

    // === Attempt Events ===
    /// Ball returned to the start pose
    AttemptReset { reason: ResetReason, scored: bool },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::ChargeStart { .. } => "CS",
            GameEvent::ShotRelease { .. } => "SR",
            GameEvent::TestShot { .. } => "TS",
            GameEvent::Scored { .. } => "G",
            GameEvent::AttemptReset { .. } => "AR",
        }
    }

    /// Variant name (used by scenario expectations)
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SessionStart",
            GameEvent::Config(_) => "Config",
            GameEvent::ChargeStart { .. } => "ChargeStart",
            GameEvent::ShotRelease { .. } => "ShotRelease",
            GameEvent::TestShot { .. } => "TestShot",
            GameEvent::Scored { .. } => "Scored",
            GameEvent::AttemptReset { .. } => "AttemptReset",
        }
    }
}

/// Buffered Bevy message sent when a basket is made (drives the effects)
#[derive(Message, Debug, Clone, Copy)]
pub struct BasketScored {
    pub score: u32,
}
