//! Scripted input injection for tests

use bevy::prelude::*;
use std::collections::HashMap;

use super::parser::{FrameInput, ScriptAction};
use crate::game::Game;

/// Actions for a test, keyed by frame
#[derive(Debug, Default)]
pub struct ScriptedInputs {
    /// Map of frame -> actions in file order
    pub frames: HashMap<u64, Vec<FrameInput>>,
    /// Maximum frame to run
    pub max_frame: u64,
}

impl ScriptedInputs {
    /// Create from parsed frame inputs
    pub fn from_inputs(inputs: &[FrameInput]) -> Self {
        let mut frames: HashMap<u64, Vec<FrameInput>> = HashMap::new();
        let mut max_frame = 0u64;

        for fi in inputs {
            max_frame = max_frame.max(fi.frame);
            frames.entry(fi.frame).or_default().push(fi.clone());
        }

        Self { frames, max_frame }
    }

    /// Set max frame (for state assertions)
    pub fn set_max_frame(&mut self, frame: u64) {
        self.max_frame = self.max_frame.max(frame);
    }

    /// Apply every action scheduled for `frame` at game time `now`
    pub fn apply(&self, frame: u64, now: f64, game: &mut Game) {
        let Some(actions) = self.frames.get(&frame) else {
            return;
        };
        for input in actions {
            apply_action(input, now, game);
        }
    }
}

fn apply_action(input: &FrameInput, now: f64, game: &mut Game) {
    let pos = Vec2::new(input.x, input.y);
    match input.action {
        ScriptAction::Press => {
            game.on_press_start(pos, now);
        }
        ScriptAction::Move => {
            game.on_press_move(pos);
        }
        ScriptAction::Release => {
            game.on_press_end(now);
        }
        ScriptAction::Leave => {
            game.on_press_leave(now);
        }
        ScriptAction::TestShot => {
            game.test_shot();
        }
        ScriptAction::Teleport => game.teleport_ball(Vec3::new(input.x, input.y, input.z)),
    }
}
