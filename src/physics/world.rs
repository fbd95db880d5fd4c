//! Physics world - the rapier pipeline and the bodies it steps
//!
//! Fixed bodies carry the court, backboard, and rim; a sensor body is the
//! score trigger; the ball is the only dynamic body and runs with CCD so
//! fast shots cannot pass through the thin backboard.

use std::f32::consts::TAU;
use std::sync::Mutex;

use bevy::math::Vec3;
use rapier3d::math::{Real, Vector};
use rapier3d::na::{self as nalgebra, vector};
use rapier3d::prelude::*;

use super::body::{Material, Pose, from_rotation, from_vector, to_rotation, to_vector};
use crate::constants::*;

pub type BodyHandle = RigidBodyHandle;

/// A body entering a sensor during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerContact {
    pub trigger: BodyHandle,
    pub other: BodyHandle,
}

/// Sensor collisions reported by rapier while the pipeline steps
#[derive(Default)]
struct SensorEvents {
    started: Mutex<Vec<(ColliderHandle, ColliderHandle)>>,
}

impl SensorEvents {
    fn take(&self) -> Vec<(ColliderHandle, ColliderHandle)> {
        match self.started.lock() {
            Ok(mut started) => std::mem::take(&mut *started),
            Err(_) => Vec::new(),
        }
    }
}

impl EventHandler for SensorEvents {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        let CollisionEvent::Started(a, b, flags) = event else {
            return;
        };
        if !flags.contains(CollisionEventFlags::SENSOR) {
            return;
        }
        if let Ok(mut started) = self.started.lock() {
            started.push((a, b));
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Rapier sets and pipeline advanced together one fixed step at a time
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    events: SensorEvents,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3) -> Self {
        let params = IntegrationParameters {
            dt: FIXED_TIMESTEP,
            ..IntegrationParameters::default()
        };
        Self {
            gravity: to_vector(gravity),
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            events: SensorEvents::default(),
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.params.dt
    }

    // ========================================================================
    // Body creation
    // ========================================================================

    /// Immovable box
    pub fn add_fixed_cuboid(&mut self, center: Vec3, half_extents: Vec3, material: Material) -> BodyHandle {
        let body = RigidBodyBuilder::fixed().translation(to_vector(center)).build();
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.insert(body, vec![collider])
    }

    /// Horizontal ring (a hoop) approximated by `segments` spheres along its tube
    pub fn add_fixed_ring(
        &mut self,
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
        segments: usize,
        material: Material,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::fixed().translation(to_vector(center)).build();
        let colliders = (0..segments.max(3))
            .map(|i| {
                let angle = TAU * i as f32 / segments.max(3) as f32;
                let (sin, cos) = angle.sin_cos();
                ColliderBuilder::ball(minor_radius)
                    .translation(vector![cos * major_radius, 0.0, sin * major_radius])
                    .friction(material.friction)
                    .restitution(material.restitution)
                    .build()
            })
            .collect();
        self.insert(body, colliders)
    }

    /// Non-solid sphere that reports bodies entering it
    pub fn add_sensor_sphere(&mut self, center: Vec3, radius: f32) -> BodyHandle {
        let body = RigidBodyBuilder::fixed().translation(to_vector(center)).build();
        let collider = ColliderBuilder::ball(radius)
            .sensor(true)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.insert(body, vec![collider])
    }

    /// Dynamic ball with continuous collision detection
    pub fn add_dynamic_sphere(&mut self, position: Vec3, radius: f32, mass: f32, material: Material) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(position))
            .linear_damping(LINEAR_DAMPING)
            .angular_damping(ANGULAR_DAMPING)
            .ccd_enabled(true)
            .build();
        let collider = ColliderBuilder::ball(radius)
            .mass(mass)
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.insert(body, vec![collider])
    }

    fn insert(&mut self, body: RigidBody, colliders: Vec<Collider>) -> BodyHandle {
        let handle = self.bodies.insert(body);
        for collider in colliders {
            self.colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }
        handle
    }

    // ========================================================================
    // Body state
    // ========================================================================

    pub fn read_pose(&self, handle: BodyHandle) -> Pose {
        self.bodies
            .get(handle)
            .map(|rb| Pose {
                position: from_vector(rb.translation()),
                rotation: from_rotation(rb.rotation()),
            })
            .unwrap_or_default()
    }

    pub fn velocity(&self, handle: BodyHandle) -> Vec3 {
        self.bodies
            .get(handle)
            .map(|rb| from_vector(rb.linvel()))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn angular_velocity(&self, handle: BodyHandle) -> Vec3 {
        self.bodies
            .get(handle)
            .map(|rb| from_vector(rb.angvel()))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn set_pose(&mut self, handle: BodyHandle, pose: Pose) {
        if let Some(rb) = self.bodies.get_mut(handle) {
            rb.set_translation(to_vector(pose.position), true);
            rb.set_rotation(to_rotation(pose.rotation), true);
        }
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3, angular_velocity: Vec3) {
        if let Some(rb) = self.bodies.get_mut(handle) {
            rb.set_linvel(to_vector(velocity), true);
            rb.set_angvel(to_vector(angular_velocity), true);
        }
    }

    /// Disabled bodies are neither simulated nor collided
    pub fn set_enabled(&mut self, handle: BodyHandle, enabled: bool) {
        if let Some(rb) = self.bodies.get_mut(handle) {
            rb.set_enabled(enabled);
        }
    }

    pub fn is_enabled(&self, handle: BodyHandle) -> bool {
        self.bodies.get(handle).is_some_and(|rb| rb.is_enabled())
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// One fixed step. Returns the sensor entries it produced, in report order.
    pub fn step(&mut self) -> Vec<TriggerContact> {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &self.events,
        );

        self.events
            .take()
            .into_iter()
            .filter_map(|(a, b)| self.trigger_contact(a, b))
            .collect()
    }

    /// Order a sensor pair as (sensor body, other body)
    fn trigger_contact(&self, a: ColliderHandle, b: ColliderHandle) -> Option<TriggerContact> {
        let (sensor, other) = if self.colliders.get(a)?.is_sensor() {
            (a, b)
        } else {
            (b, a)
        };
        Some(TriggerContact {
            trigger: self.colliders.get(sensor)?.parent()?,
            other: self.colliders.get(other)?.parent()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_floor() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -GRAVITY, 0.0));
        world.add_fixed_cuboid(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(5.0, 0.5, 5.0),
            Material::default(),
        );
        world
    }

    #[test]
    fn test_ball_falls_and_lands_on_floor() {
        let mut world = world_with_floor();
        let ball = world.add_dynamic_sphere(Vec3::new(0.0, 2.0, 0.0), 0.2, 1.0, Material::default());
        for _ in 0..300 {
            world.step();
        }
        let y = world.read_pose(ball).position.y;
        assert!(y > 0.1 && y < 0.3, "ball should rest on the floor, y = {}", y);
    }

    #[test]
    fn test_sensor_reports_entry_without_blocking() {
        let mut world = world_with_floor();
        let sensor = world.add_sensor_sphere(Vec3::new(0.0, 1.0, 0.0), 0.3);
        let ball = world.add_dynamic_sphere(Vec3::new(0.0, 2.0, 0.0), 0.2, 1.0, Material::default());

        let mut contacts = Vec::new();
        for _ in 0..60 {
            contacts.extend(world.step());
        }
        assert!(contacts.contains(&TriggerContact {
            trigger: sensor,
            other: ball
        }));
        // Passed through the sensor down to the floor
        assert!(world.read_pose(ball).position.y < 0.5);
    }

    #[test]
    fn test_disabled_body_stays_put() {
        let mut world = world_with_floor();
        let ball = world.add_dynamic_sphere(Vec3::new(0.0, 2.0, 0.0), 0.2, 1.0, Material::default());
        world.set_enabled(ball, false);
        for _ in 0..30 {
            world.step();
        }
        assert_eq!(world.read_pose(ball).position, Vec3::new(0.0, 2.0, 0.0));
        assert!(!world.is_enabled(ball));
    }

    #[test]
    fn test_ring_stops_ball_on_its_tube() {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -GRAVITY, 0.0));
        world.add_fixed_ring(Vec3::ZERO, 0.4, 0.05, RIM_SEGMENTS, Material::default());
        let ball = world.add_dynamic_sphere(Vec3::new(0.4, 1.0, 0.0), 0.2, 1.0, Material::default());
        for _ in 0..25 {
            world.step();
        }
        // Landed on the tube instead of dropping through
        assert!(world.read_pose(ball).position.y > 0.0);
    }
}
