//! Camera module - damped orbit camera around the hoop
//!
//! Right-drag orbits, the scroll wheel zooms. Left-drag belongs to shooting.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::constants::*;

/// Marker for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Spherical orbit around a fixed target, with damped follow
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    // Where input wants to be; yaw/pitch/distance ease toward these
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitState {
    /// Orbit that places the camera at `eye` looking at `target`
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset
            .length()
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .asin()
            .clamp(0.0, CAMERA_MAX_PITCH_DEG.to_radians());
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            yaw,
            pitch,
            distance,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Pointer drag in pixels
    pub fn orbit(&mut self, drag: Vec2) {
        self.goal_yaw -= drag.x * CAMERA_ORBIT_SPEED;
        self.goal_pitch = (self.goal_pitch + drag.y * CAMERA_ORBIT_SPEED)
            .clamp(0.0, CAMERA_MAX_PITCH_DEG.to_radians());
    }

    /// Positive scroll moves closer
    pub fn zoom(&mut self, scroll: f32) {
        self.goal_distance = (self.goal_distance - scroll * CAMERA_ZOOM_SPEED)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Ease toward the goal. `dt` scales the per-frame damping so speed is frame-rate independent.
    pub fn advance(&mut self, dt: f32) {
        let t = 1.0 - (1.0 - CAMERA_DAMPING).powf(dt * 60.0);
        self.yaw += (self.goal_yaw - self.yaw) * t;
        self.pitch += (self.goal_pitch - self.pitch) * t;
        self.distance += (self.goal_distance - self.distance) * t;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::from_eye(CAMERA_START, CAMERA_TARGET)
    }
}

/// Spawn the camera with linear distance fog matching the background
pub fn spawn_camera(mut commands: Commands) {
    let orbit = OrbitState::default();
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        orbit.transform(),
        orbit,
        DistanceFog {
            color: BACKGROUND_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
}

/// Right-drag orbits, wheel zooms
pub fn orbit_camera(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut OrbitState, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut orbit, mut transform)) = query.single_mut() else {
        return;
    };

    if mouse.pressed(MouseButton::Right) && motion.delta != Vec2::ZERO {
        orbit.orbit(motion.delta);
    }
    if scroll.delta.y != 0.0 {
        orbit.zoom(scroll.delta.y);
    }

    orbit.advance(time.delta_secs());
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_start_position() {
        let orbit = OrbitState::default();
        assert!(orbit.eye().distance(CAMERA_START) < 1e-4);
        assert!(orbit.yaw.abs() < 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitState::default();
        orbit.zoom(1000.0);
        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert!((orbit.distance - CAMERA_MIN_DISTANCE).abs() < 1e-3);

        orbit.zoom(-1000.0);
        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert!((orbit.distance - CAMERA_MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_never_goes_below_court() {
        let mut orbit = OrbitState::default();
        orbit.orbit(Vec2::new(0.0, -10_000.0));
        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert!(orbit.pitch.abs() < 1e-3);
        assert!(orbit.eye().y >= orbit.target.y - 1e-3);

        orbit.orbit(Vec2::new(0.0, 10_000.0));
        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert!(orbit.pitch <= CAMERA_MAX_PITCH_DEG.to_radians() + 1e-4);
    }

    #[test]
    fn test_damping_eases_in() {
        let mut orbit = OrbitState::default();
        let start_yaw = orbit.yaw;
        orbit.orbit(Vec2::new(-200.0, 0.0));
        orbit.advance(1.0 / 60.0);
        let step = orbit.yaw - start_yaw;
        // One frame covers the damping fraction of the 1 rad goal
        assert!((step - CAMERA_DAMPING).abs() < 1e-4);
    }
}
