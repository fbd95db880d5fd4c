//! Shot planner - drag + charge to a launch vector and preview arc

use bevy::prelude::*;

use super::aim::{AimDescriptor, AimScheme, AimStrategy};
use super::charge::{PowerCurve, PowerPreset};
use super::trajectory::preview_trajectory;
use crate::constants::*;

/// Everything decided about a shot at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPlan {
    pub aim: AimDescriptor,
    pub charge: f32, // Seconds, already clamped
    pub power: f32,
    pub launch: Vec3,
}

pub struct ShotPlanner {
    strategy: Box<dyn AimStrategy>,
    curve: PowerCurve,
    origin: Vec3,
    gravity: Vec3,
    preview_dt: f32,
    preview_samples: usize,
}

impl ShotPlanner {
    pub fn new(strategy: Box<dyn AimStrategy>, curve: PowerCurve) -> Self {
        Self {
            strategy,
            curve,
            origin: BALL_START,
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            preview_dt: PREVIEW_SAMPLE_DT,
            preview_samples: PREVIEW_MAX_SAMPLES,
        }
    }

    pub fn from_config(scheme: AimScheme, preset: PowerPreset) -> Self {
        Self::new(scheme.build(), preset.curve())
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn curve(&self) -> &PowerCurve {
        &self.curve
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Plan for a drag delta and seconds held
    pub fn plan(&self, drag: Vec2, held: f32) -> ShotPlan {
        let aim = self.strategy.aim_from_drag(drag);
        self.plan_with_aim(aim, held)
    }

    /// Plan shown before any input (zero charge, initial aim)
    pub fn idle_plan(&self) -> ShotPlan {
        self.plan_with_aim(self.strategy.initial_aim(), 0.0)
    }

    fn plan_with_aim(&self, aim: AimDescriptor, held: f32) -> ShotPlan {
        let charge = self.curve.charge_for(held);
        let power = self.curve.power(charge);
        ShotPlan {
            aim,
            charge,
            power,
            launch: self.strategy.launch_vector(&aim, power),
        }
    }

    /// Predicted arc for a plan (mass 1, so the launch impulse is the initial velocity)
    pub fn preview(&self, plan: &ShotPlan) -> Vec<Vec3> {
        let velocity = plan.launch / BALL_MASS;
        preview_trajectory(
            self.origin,
            velocity,
            self.gravity,
            self.preview_dt,
            self.preview_samples,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_release_after_half_second() {
        let planner = ShotPlanner::from_config(AimScheme::Direction, PowerPreset::Standard);
        let plan = planner.plan(Vec2::ZERO, 0.5);
        assert!(plan.aim.yaw().abs() < 1e-6);
        assert!((plan.power - 25.0).abs() < 1e-5);
        assert!((plan.launch - Vec3::new(0.0, 0.0, -25.0)).length() < 1e-4);
    }

    #[test]
    fn test_idle_plan_has_no_charge() {
        let planner = ShotPlanner::from_config(AimScheme::Angle, PowerPreset::Soft);
        let plan = planner.idle_plan();
        assert_eq!(plan.charge, 0.0);
        assert_eq!(plan.power, 8.0);
        assert!(plan.launch.y > 0.0);
    }

    #[test]
    fn test_overcharge_is_capped() {
        let planner = ShotPlanner::from_config(AimScheme::Direction, PowerPreset::Standard);
        let plan = planner.plan(Vec2::new(0.0, 50.0), 10.0);
        assert_eq!(plan.charge, MAX_CHARGE_SECONDS);
        assert!((plan.power - 45.0).abs() < 1e-5);
        assert!((plan.launch.length() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_preview_starts_at_origin() {
        let planner = ShotPlanner::from_config(AimScheme::Angle, PowerPreset::Standard);
        let plan = planner.plan(Vec2::ZERO, 0.3);
        let preview = planner.preview(&plan);
        assert!(!preview.is_empty());
        assert_eq!(preview[0], BALL_START);
    }
}
