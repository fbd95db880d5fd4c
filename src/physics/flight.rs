//! Flight simulator - the ball's view of the physics world
//!
//! Wraps [`PhysicsWorld`] with the handful of operations the game needs:
//! launch, fixed-step advance, pose read-back, and reset.

use bevy::math::Vec3;

use super::body::Pose;
use super::world::{BodyHandle, PhysicsWorld, TriggerContact};
use crate::constants::*;

/// Slack used when comparing accumulated frame time against the fixed step
const STEP_EPSILON: f32 = 1e-5;

pub struct FlightSimulator {
    world: PhysicsWorld,
    ball: BodyHandle,
    score_trigger: BodyHandle,
    start: Vec3,
    ball_mass: f32,
    max_substeps: u32,
    /// Frame time not yet consumed by fixed steps
    accumulator: f32,
    trigger_contacts: Vec<TriggerContact>,
}

impl FlightSimulator {
    /// Wrap a world that already contains the ball and the score trigger.
    /// The ball is placed at `start` and taken out of the simulation.
    pub fn new(
        world: PhysicsWorld,
        ball: BodyHandle,
        score_trigger: BodyHandle,
        start: Vec3,
        ball_mass: f32,
    ) -> Self {
        let mut sim = Self {
            world,
            ball,
            score_trigger,
            start,
            ball_mass: ball_mass.max(f32::EPSILON),
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            trigger_contacts: Vec::new(),
        };
        sim.reset_to_start();
        sim
    }

    pub fn ball(&self) -> BodyHandle {
        self.ball
    }

    pub fn score_trigger(&self) -> BodyHandle {
        self.score_trigger
    }

    /// Teleport to `origin`, clear motion, then apply `impulse` at the center of mass
    pub fn launch(&mut self, origin: Vec3, impulse: Vec3) {
        self.world.set_enabled(self.ball, true);
        self.world.set_pose(self.ball, Pose::from_position(origin));
        self.world
            .set_velocity(self.ball, impulse / self.ball_mass, Vec3::ZERO);
    }

    /// Advance by one rendered frame using fixed steps.
    /// Runs at most `MAX_SUBSTEPS` steps; backlog beyond that is dropped.
    /// Returns the number of steps taken.
    pub fn step(&mut self, frame_dt: f32) -> u32 {
        let fixed_dt = self.world.fixed_dt();
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator + STEP_EPSILON >= fixed_dt && steps < self.max_substeps {
            let contacts = self.world.step();
            self.trigger_contacts.extend(contacts);
            self.accumulator -= fixed_dt;
            steps += 1;
        }

        if self.accumulator + STEP_EPSILON >= fixed_dt {
            // Too far behind: don't try to catch up next frame
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);
        steps
    }

    /// Sensor entries produced by the steps since the last call
    pub fn drain_trigger_contacts(&mut self) -> Vec<TriggerContact> {
        std::mem::take(&mut self.trigger_contacts)
    }

    pub fn current_pose(&self) -> Pose {
        self.world.read_pose(self.ball)
    }

    pub fn velocity(&self) -> Vec3 {
        self.world.velocity(self.ball)
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.world.angular_velocity(self.ball)
    }

    /// True while the ball sits at its start pose, outside the simulation
    pub fn is_resting(&self) -> bool {
        !self.world.is_enabled(self.ball)
    }

    /// Back to the start pose, motionless and out of the simulation
    pub fn reset_to_start(&mut self) {
        self.world
            .set_pose(self.ball, Pose::from_position(self.start));
        self.world.set_velocity(self.ball, Vec3::ZERO, Vec3::ZERO);
        self.world.set_enabled(self.ball, false);
        self.trigger_contacts.clear();
    }

    /// Move the ball without touching its velocity (debugging and scenarios)
    pub fn teleport(&mut self, position: Vec3) {
        let rotation = self.current_pose().rotation;
        self.world.set_pose(self.ball, Pose { position, rotation });
    }

    #[cfg(test)]
    fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{CourtLayout, build_flight_simulator};

    fn sim() -> FlightSimulator {
        build_flight_simulator(&CourtLayout::default())
    }

    #[test]
    fn test_starts_at_rest_at_start_pose() {
        let mut sim = sim();
        assert!(sim.is_resting());
        assert_eq!(sim.current_pose().position, BALL_START);
        sim.step(FIXED_TIMESTEP);
        assert_eq!(sim.current_pose().position, BALL_START);
    }

    #[test]
    fn test_launch_sets_initial_velocity() {
        let mut sim = sim();
        sim.launch(BALL_START, Vec3::new(0.0, 10.0, -15.0));
        assert!(!sim.is_resting());
        assert!(sim.velocity().distance(Vec3::new(0.0, 10.0, -15.0)) < 1e-4);
        assert_eq!(sim.current_pose().position, BALL_START);
        sim.step(FIXED_TIMESTEP);
        assert!(sim.current_pose().position.z < 0.0);
    }

    #[test]
    fn test_launch_clears_previous_spin() {
        let mut sim = sim();
        let ball = sim.ball();
        sim.world_mut()
            .set_velocity(ball, Vec3::X, Vec3::new(3.0, 0.0, 0.0));
        sim.launch(BALL_START, Vec3::Y);
        assert_eq!(sim.angular_velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_reset_zeroes_motion() {
        let mut sim = sim();
        sim.launch(BALL_START, Vec3::new(2.0, 8.0, -5.0));
        for _ in 0..20 {
            sim.step(FIXED_TIMESTEP);
        }
        sim.reset_to_start();
        assert_eq!(sim.current_pose().position, BALL_START);
        assert_eq!(sim.velocity(), Vec3::ZERO);
        assert_eq!(sim.angular_velocity(), Vec3::ZERO);
        assert!(sim.is_resting());
    }

    #[test]
    fn test_drop_through_rim_hits_trigger() {
        let mut sim = sim();
        sim.launch(TEST_SHOT_ORIGIN, TEST_SHOT_IMPULSE);
        let mut hits = 0;
        for _ in 0..60 {
            sim.step(FIXED_TIMESTEP);
            hits += sim
                .drain_trigger_contacts()
                .iter()
                .filter(|c| c.trigger == sim.score_trigger() && c.other == sim.ball())
                .count();
        }
        assert!(hits >= 1);
    }

    #[test]
    fn test_full_power_shot_bounces_off_backboard() {
        let mut sim = sim();
        let target = Vec3::new(0.3, 2.6, BACKBOARD_CENTER.z + BACKBOARD_HALF_EXTENTS.z);
        let impulse = (target - BALL_START).normalize() * 45.0;
        sim.launch(BALL_START, impulse);

        let back_face = BACKBOARD_CENTER.z - BACKBOARD_HALF_EXTENTS.z;
        for frame in 0..60 {
            sim.step(FIXED_TIMESTEP);
            let z = sim.current_pose().position.z;
            assert!(z > back_face, "ball behind the backboard at frame {}: z = {}", frame, z);
        }
        assert!(sim.velocity().z > 0.0, "ball should rebound toward the court");
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut sim = sim();
        sim.launch(BALL_START, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(sim.step(1.0), MAX_SUBSTEPS);
        assert_eq!(sim.step(FIXED_TIMESTEP), 1);
    }
}
