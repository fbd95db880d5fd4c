//! Input module - pointer drag tracking and the capture_pointer system

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow, WindowResized};

use crate::game::Game;

/// An in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start: Vec2,
    delta: Vec2,
    started_at: f64,
}

/// A finished drag, handed to the shot release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    /// `start - current` in screen space (y down)
    pub delta: Vec2,
    /// Seconds (game clock) when the press began
    pub started_at: f64,
}

/// Turns press/move/release into a drag vector and a start time
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    drag: Option<Drag>,
}

impl PointerTracker {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current drag delta (zero when not dragging)
    pub fn delta(&self) -> Vec2 {
        self.drag.map(|d| d.delta).unwrap_or(Vec2::ZERO)
    }

    pub fn started_at(&self) -> Option<f64> {
        self.drag.map(|d| d.started_at)
    }

    /// Begin a drag. Ignored while a ball is in play or a drag is already active.
    pub fn press_start(&mut self, pos: Vec2, now: f64, ball_in_play: bool) -> bool {
        if ball_in_play || self.drag.is_some() {
            return false;
        }
        self.drag = Some(Drag {
            start: pos,
            delta: Vec2::ZERO,
            started_at: now,
        });
        true
    }

    /// Update the drag. Returns the new delta, or None if the move was ignored.
    pub fn press_move(&mut self, pos: Vec2, ball_in_play: bool) -> Option<Vec2> {
        if ball_in_play {
            return None;
        }
        let drag = self.drag.as_mut()?;
        drag.delta = drag.start - pos;
        Some(drag.delta)
    }

    /// Finish the drag (pointer released)
    pub fn press_end(&mut self) -> Option<DragSummary> {
        self.drag.take().map(|d| DragSummary {
            delta: d.delta,
            started_at: d.started_at,
        })
    }

    /// Pointer left the surface mid-drag: same as a release
    pub fn press_leave(&mut self) -> Option<DragSummary> {
        self.press_end()
    }

    /// Drop any drag without producing a shot
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

/// Runs in Update before the frame tick. Maps the left mouse button, cursor
/// motion, cursor leaving the window, and single-finger touch onto the game's
/// pointer operations. `T` fires the debug test shot.
pub fn capture_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut resized: MessageReader<WindowResized>,
    time: Res<Time>,
    mut game: ResMut<Game>,
) {
    let now = time.elapsed_secs_f64();

    // Projection is recomputed by the renderer, just note it
    for event in resized.read() {
        debug!("Window resized to {}x{}", event.width, event.height);
    }

    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    // Mouse
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            game.on_press_start(pos, now);
        }
    }
    if mouse.pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            game.on_press_move(pos);
        }
    }
    if mouse.just_released(MouseButton::Left) {
        game.on_press_end(now);
    }
    if cursor_left.read().last().is_some() {
        game.on_press_leave(now);
    }

    // Touch (first finger only)
    if let Some(touch) = touches.iter_just_pressed().next() {
        game.on_press_start(touch.position(), now);
    }
    if let Some(touch) = touches.iter().next() {
        game.on_press_move(touch.position());
    }
    if touches.iter_just_released().next().is_some() || touches.iter_just_canceled().next().is_some() {
        game.on_press_end(now);
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        game.test_shot();
    }
}
