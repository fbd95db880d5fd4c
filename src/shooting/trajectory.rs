//! Ballistic arc sampling for the shot preview

use bevy::math::Vec3;

use crate::constants::GROUND_LEVEL;

/// Sample the drag-free arc starting at `origin` with `velocity`.
/// Samples are `dt` apart starting at t = 0; the list stops before the first
/// sample below ground level and never exceeds `max_samples`.
pub fn preview_trajectory(
    origin: Vec3,
    velocity: Vec3,
    gravity: Vec3,
    dt: f32,
    max_samples: usize,
) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(max_samples);
    if dt <= 0.0 {
        return points;
    }

    for i in 0..max_samples {
        let t = i as f32 * dt;
        let point = origin + velocity * t + 0.5 * gravity * t * t;
        if point.y < GROUND_LEVEL {
            break;
        }
        points.push(point);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const G: Vec3 = Vec3::new(0.0, -GRAVITY, 0.0);

    #[test]
    fn test_first_sample_is_origin() {
        let points = preview_trajectory(BALL_START, Vec3::new(0.0, 5.0, -10.0), G, 0.05, 40);
        assert_eq!(points[0], BALL_START);
    }

    #[test]
    fn test_stops_at_ground() {
        // Straight forward from y = 1: hits the ground after ~0.365 s
        let points = preview_trajectory(BALL_START, Vec3::new(0.0, 0.0, -15.0), G, 0.05, 40);
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn test_respects_max_samples() {
        let points = preview_trajectory(BALL_START, Vec3::new(0.0, 40.0, 0.0), G, 0.05, 40);
        assert_eq!(points.len(), 40);
    }

    #[test]
    fn test_matches_kinematics() {
        let v = Vec3::new(1.0, 10.0, -10.0);
        let points = preview_trajectory(Vec3::ZERO, v, G, 0.1, 10);
        let t = 0.5;
        let expected = v * t + 0.5 * G * t * t;
        assert!((points[5] - expected).length() < 1e-4);
    }

    #[test]
    fn test_zero_dt_is_empty() {
        assert!(preview_trajectory(BALL_START, Vec3::Y, G, 0.0, 40).is_empty());
    }
}
