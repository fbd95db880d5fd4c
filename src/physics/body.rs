//! Surface materials and poses, plus conversion between glam and rapier math

use bevy::math::{Quat, Vec3};
use rapier3d::math::{Real, Rotation, Vector};
use rapier3d::na::{self as nalgebra, Quaternion, vector};

/// Surface properties handed to rapier colliders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 0.3,
            restitution: 0.5,
        }
    }
}

/// Position + orientation of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

pub(crate) fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

pub(crate) fn from_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub(crate) fn to_rotation(q: Quat) -> Rotation<Real> {
    Rotation::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

pub(crate) fn from_rotation(r: &Rotation<Real>) -> Quat {
    let c = r.coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_conversion_keeps_orientation() {
        let q = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3);
        let back = from_rotation(&to_rotation(q));
        assert!(back.angle_between(q) < 1e-5);

        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(from_vector(&to_vector(v)), v);
    }
}
