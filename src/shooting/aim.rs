//! Aim strategies - turning a pointer drag into a launch direction
//!
//! Drag deltas are `start - current` in screen space (y grows downward), so
//! dragging right gives a negative `x` and dragging up gives a positive `y`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Where the shot is pointed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimDescriptor {
    /// Unit vector in world space
    Direction(Vec3),
    /// Radians. Positive yaw turns toward +X, elevation is above the horizon.
    Angles { yaw: f32, elevation: f32 },
}

impl AimDescriptor {
    /// Unit direction in world space (forward is -Z)
    pub fn direction(&self) -> Vec3 {
        match *self {
            AimDescriptor::Direction(dir) => dir.normalize_or(Vec3::NEG_Z),
            AimDescriptor::Angles { yaw, elevation } => direction_from_angles(yaw, elevation),
        }
    }

    /// Horizontal deflection in radians
    pub fn yaw(&self) -> f32 {
        match *self {
            AimDescriptor::Direction(dir) => dir.x.atan2(-dir.z),
            AimDescriptor::Angles { yaw, .. } => yaw,
        }
    }

    /// Angle above the horizon in radians
    pub fn elevation(&self) -> f32 {
        match *self {
            AimDescriptor::Direction(dir) => {
                let dir = dir.normalize_or(Vec3::NEG_Z);
                dir.y.clamp(-1.0, 1.0).asin()
            }
            AimDescriptor::Angles { elevation, .. } => elevation,
        }
    }
}

fn direction_from_angles(yaw: f32, elevation: f32) -> Vec3 {
    let horizontal = elevation.cos();
    Vec3::new(
        yaw.sin() * horizontal,
        elevation.sin(),
        -yaw.cos() * horizontal,
    )
}

/// A control scheme mapping drag input to an aim
pub trait AimStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Aim shown before any drag (and after every reset)
    fn initial_aim(&self) -> AimDescriptor;

    /// Aim for the given drag delta
    fn aim_from_drag(&self, drag: Vec2) -> AimDescriptor;

    /// Velocity-scale launch vector for an aim and power
    fn launch_vector(&self, aim: &AimDescriptor, power: f32) -> Vec3 {
        aim.direction() * power
    }
}

/// Drag nudges a direction vector that starts pointing straight at the hoop
#[derive(Debug, Clone, Copy)]
pub struct DirectionAim {
    pub sensitivity: f32,
    pub min_elevation: f32, // radians
    pub max_elevation: f32, // radians
}

impl Default for DirectionAim {
    fn default() -> Self {
        Self {
            sensitivity: DIRECTION_DRAG_SENSITIVITY,
            min_elevation: DIRECTION_MIN_ELEVATION_DEG.to_radians(),
            max_elevation: DIRECTION_MAX_ELEVATION_DEG.to_radians(),
        }
    }
}

impl AimStrategy for DirectionAim {
    fn name(&self) -> &'static str {
        "direction"
    }

    fn initial_aim(&self) -> AimDescriptor {
        AimDescriptor::Direction(Vec3::NEG_Z)
    }

    fn aim_from_drag(&self, drag: Vec2) -> AimDescriptor {
        let raw = Vec3::new(-drag.x * self.sensitivity, drag.y * self.sensitivity, -1.0);
        let raw = AimDescriptor::Direction(raw.normalize());

        // Clamp elevation, keep yaw
        let elevation = raw.elevation().clamp(self.min_elevation, self.max_elevation);
        AimDescriptor::Direction(direction_from_angles(raw.yaw(), elevation))
    }
}

/// Drag maps linearly onto yaw and elevation angles
#[derive(Debug, Clone, Copy)]
pub struct AngleAim {
    pub yaw_per_pixel: f32,
    pub pitch_per_pixel: f32,
    pub base_elevation: f32, // radians
    pub min_elevation: f32,
    pub max_elevation: f32,
}

impl Default for AngleAim {
    fn default() -> Self {
        Self {
            yaw_per_pixel: ANGLE_YAW_PER_PIXEL,
            pitch_per_pixel: ANGLE_PITCH_PER_PIXEL,
            base_elevation: ANGLE_BASE_ELEVATION_DEG.to_radians(),
            min_elevation: ANGLE_MIN_ELEVATION_DEG.to_radians(),
            max_elevation: ANGLE_MAX_ELEVATION_DEG.to_radians(),
        }
    }
}

impl AimStrategy for AngleAim {
    fn name(&self) -> &'static str {
        "angle"
    }

    fn initial_aim(&self) -> AimDescriptor {
        AimDescriptor::Angles {
            yaw: 0.0,
            elevation: self.base_elevation,
        }
    }

    fn aim_from_drag(&self, drag: Vec2) -> AimDescriptor {
        AimDescriptor::Angles {
            yaw: -drag.x * self.yaw_per_pixel,
            elevation: (self.base_elevation + drag.y * self.pitch_per_pixel)
                .clamp(self.min_elevation, self.max_elevation),
        }
    }
}

/// Which aim strategy to use (config / CLI selectable)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AimScheme {
    #[default]
    Direction,
    Angle,
}

impl AimScheme {
    pub fn build(self) -> Box<dyn AimStrategy> {
        match self {
            AimScheme::Direction => Box::new(DirectionAim::default()),
            AimScheme::Angle => Box::new(AngleAim::default()),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "direction" | "dir" => Some(AimScheme::Direction),
            "angle" | "angles" => Some(AimScheme::Angle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AimScheme::Direction => "direction",
            AimScheme::Angle => "angle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_aim_no_drag_points_at_hoop() {
        let aim = DirectionAim::default().aim_from_drag(Vec2::ZERO);
        assert!((aim.direction() - Vec3::NEG_Z).length() < 1e-5);
        assert!(aim.yaw().abs() < 1e-6);
    }

    #[test]
    fn test_direction_aim_drag_right_aims_right() {
        // Pointer moved right: start - current is negative in x
        let aim = DirectionAim::default().aim_from_drag(Vec2::new(-100.0, 0.0));
        let dir = aim.direction();
        assert!(dir.x > 0.0);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        // Same as normalizing (1, 0, -1)
        assert!((dir - Vec3::new(1.0, 0.0, -1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_direction_aim_clamps_elevation() {
        let strategy = DirectionAim::default();
        let steep = strategy.aim_from_drag(Vec2::new(0.0, 100_000.0));
        assert!((steep.elevation() - 80f32.to_radians()).abs() < 1e-4);

        let low = strategy.aim_from_drag(Vec2::new(0.0, -300.0));
        assert!(low.elevation().abs() < 1e-5);
    }

    #[test]
    fn test_angle_aim_mapping() {
        let strategy = AngleAim::default();
        let aim = strategy.aim_from_drag(Vec2::new(-50.0, 25.0));
        let AimDescriptor::Angles { yaw, elevation } = aim else {
            panic!("angle aim returns angles");
        };
        assert!((yaw - 0.2).abs() < 1e-6);
        assert!((elevation - (50f32.to_radians() + 0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_angle_aim_clamps_elevation() {
        let strategy = AngleAim::default();
        let high = strategy.aim_from_drag(Vec2::new(0.0, 10_000.0));
        let low = strategy.aim_from_drag(Vec2::new(0.0, -10_000.0));
        assert!((high.elevation() - 75f32.to_radians()).abs() < 1e-6);
        assert!((low.elevation() - 15f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_angles_direction_is_unit() {
        let aim = AimDescriptor::Angles {
            yaw: 0.3,
            elevation: 0.9,
        };
        let dir = aim.direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir.y - 0.9f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_launch_vector_scales_direction() {
        let strategy = DirectionAim::default();
        let launch = strategy.launch_vector(&strategy.initial_aim(), 25.0);
        assert!((launch - Vec3::new(0.0, 0.0, -25.0)).length() < 1e-4);
    }

    #[test]
    fn test_aim_is_continuous() {
        let strategy = AngleAim::default();
        let a = strategy.aim_from_drag(Vec2::new(10.0, 10.0)).direction();
        let b = strategy.aim_from_drag(Vec2::new(10.5, 10.0)).direction();
        assert!((a - b).length() < 0.01);
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!(AimScheme::parse("Angle"), Some(AimScheme::Angle));
        assert_eq!(AimScheme::parse("direction"), Some(AimScheme::Direction));
        assert_eq!(AimScheme::parse("sideways"), None);
        assert_eq!(AimScheme::Angle.build().name(), "angle");
    }
}
