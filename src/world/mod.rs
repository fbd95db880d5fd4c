//! World module - court layout, physics bodies, and the 3D scene
//!
//! [`CourtLayout`] is the single description of the court. The physics world
//! and the rendered scene are both built from it.

use bevy::prelude::*;

use crate::constants::*;
use crate::physics::{BodyHandle, FlightSimulator, Material, PhysicsWorld};
use crate::tuning::ShotTweaks;

/// Ball mesh mirrored from the physics pose
#[derive(Component)]
pub struct BallMesh;

/// Point light hanging at the rim (flashes on a basket)
#[derive(Component)]
pub struct RimLight;

#[derive(Component)]
pub struct Court;

#[derive(Component)]
pub struct Backboard;

#[derive(Component)]
pub struct Rim;

#[derive(Component)]
pub struct Net;

/// Geometry and materials of the court and basket
#[derive(Debug, Clone, PartialEq)]
pub struct CourtLayout {
    pub gravity: f32,
    pub court_half_extents: Vec3,
    pub court_material: Material,
    pub rim_center: Vec3,
    pub rim_radius: f32,
    pub rim_tube_radius: f32,
    pub rim_material: Material,
    pub backboard_center: Vec3,
    pub backboard_half_extents: Vec3,
    pub backboard_material: Material,
    pub trigger_center: Vec3,
    pub trigger_radius: f32,
    pub ball_start: Vec3,
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub ball_material: Material,
}

impl Default for CourtLayout {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            court_half_extents: Vec3::new(COURT_HALF_WIDTH, COURT_THICKNESS / 2.0, COURT_HALF_LENGTH),
            court_material: Material {
                friction: COURT_FRICTION,
                restitution: COURT_RESTITUTION,
            },
            rim_center: RIM_CENTER,
            rim_radius: RIM_RADIUS,
            rim_tube_radius: RIM_TUBE_RADIUS,
            rim_material: Material {
                friction: RIM_FRICTION,
                restitution: RIM_RESTITUTION,
            },
            backboard_center: BACKBOARD_CENTER,
            backboard_half_extents: BACKBOARD_HALF_EXTENTS,
            backboard_material: Material {
                friction: BACKBOARD_FRICTION,
                restitution: BACKBOARD_RESTITUTION,
            },
            trigger_center: SCORE_TRIGGER_CENTER,
            trigger_radius: SCORE_TRIGGER_RADIUS,
            ball_start: BALL_START,
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            ball_material: Material {
                friction: BALL_FRICTION,
                restitution: BALL_RESTITUTION,
            },
        }
    }
}

impl CourtLayout {
    pub fn gravity_vector(&self) -> Vec3 {
        Vec3::new(0.0, -self.gravity, 0.0)
    }

    /// Court slab center (top surface sits at ground level)
    pub fn court_center(&self) -> Vec3 {
        Vec3::new(0.0, GROUND_LEVEL - self.court_half_extents.y, 0.0)
    }
}

/// Handles of the bodies created for a court
#[derive(Debug, Clone, Copy)]
pub struct CourtBodies {
    pub court: BodyHandle,
    pub backboard: BodyHandle,
    pub rim: BodyHandle,
    pub score_trigger: BodyHandle,
    pub ball: BodyHandle,
}

/// Create the physics world for a layout
pub fn build_physics_world(layout: &CourtLayout) -> (PhysicsWorld, CourtBodies) {
    let mut world = PhysicsWorld::new(layout.gravity_vector());

    let court = world.add_fixed_cuboid(
        layout.court_center(),
        layout.court_half_extents,
        layout.court_material,
    );
    let backboard = world.add_fixed_cuboid(
        layout.backboard_center,
        layout.backboard_half_extents,
        layout.backboard_material,
    );
    let rim = world.add_fixed_ring(
        layout.rim_center,
        layout.rim_radius,
        layout.rim_tube_radius,
        RIM_SEGMENTS,
        layout.rim_material,
    );
    let score_trigger = world.add_sensor_sphere(layout.trigger_center, layout.trigger_radius);
    let ball = world.add_dynamic_sphere(
        layout.ball_start,
        layout.ball_radius,
        layout.ball_mass,
        layout.ball_material,
    );

    (
        world,
        CourtBodies {
            court,
            backboard,
            rim,
            score_trigger,
            ball,
        },
    )
}

/// Physics world wrapped for the ball, resting at its start pose
pub fn build_flight_simulator(layout: &CourtLayout) -> FlightSimulator {
    let (world, bodies) = build_physics_world(layout);
    FlightSimulator::new(
        world,
        bodies.ball,
        bodies.score_trigger,
        layout.ball_start,
        layout.ball_mass,
    )
}

// ============================================================================
// Scene spawning
// ============================================================================

/// Spawn court, basket, lights, and the ball mesh
pub fn spawn_court_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &CourtLayout,
) {
    // Court slab
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(layout.court_half_extents * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: COURT_COLOR,
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        })),
        Transform::from_translation(layout.court_center()),
        Court,
    ));

    // Center line
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 0.002, 0.03))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: COURT_LINE_COLOR,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_LEVEL + 0.01, 0.0),
    ));

    // Backboard
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(layout.backboard_half_extents * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BACKBOARD_COLOR,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_translation(layout.backboard_center),
        Backboard,
    ));

    // Rim (Bevy's torus already lies in the XZ plane)
    commands.spawn((
        Mesh3d(meshes.add(Torus {
            minor_radius: layout.rim_tube_radius,
            major_radius: layout.rim_radius,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: RIM_COLOR,
            ..default()
        })),
        Transform::from_translation(layout.rim_center),
        Rim,
    ));

    // Net: open cone hanging under the rim
    commands.spawn((
        Mesh3d(meshes.add(ConicalFrustum {
            radius_top: layout.rim_radius,
            radius_bottom: NET_BOTTOM_RADIUS,
            height: NET_HEIGHT,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: NET_COLOR,
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            ..default()
        })),
        Transform::from_translation(NET_CENTER),
        Net,
    ));

    // Lights
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.25, 0.25, 0.25),
        brightness: 200.0,
        affects_lightmapped_meshes: true,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            color: RIM_COLOR,
            intensity: RIM_LIGHT_INTENSITY,
            range: RIM_LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(layout.rim_center),
        RimLight,
    ));

    // Ball
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(layout.ball_radius).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BALL_COLOR,
            perceptual_roughness: 0.3,
            metallic: 0.7,
            ..default()
        })),
        Transform::from_translation(layout.ball_start),
        BallMesh,
    ));
}

/// Startup system: build the scene from the tuned layout
pub fn setup_court(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tweaks: Res<ShotTweaks>,
) {
    spawn_court_scene(&mut commands, &mut meshes, &mut materials, &tweaks.court_layout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_top_is_ground_level() {
        let layout = CourtLayout::default();
        let top = layout.court_center().y + layout.court_half_extents.y;
        assert!((top - GROUND_LEVEL).abs() < 1e-6);
    }

    #[test]
    fn test_trigger_sits_under_rim() {
        let layout = CourtLayout::default();
        assert!(layout.trigger_center.y < layout.rim_center.y);
        assert_eq!(layout.trigger_center.x, layout.rim_center.x);
        assert_eq!(layout.trigger_center.z, layout.rim_center.z);
    }

    #[test]
    fn test_backboard_clear_of_rim() {
        let layout = CourtLayout::default();
        let board_front = layout.backboard_center.z + layout.backboard_half_extents.z;
        let rim_back = layout.rim_center.z - layout.rim_radius - layout.rim_tube_radius;
        assert!(board_front < rim_back + 0.1);
    }

    #[test]
    fn test_world_places_bodies_from_layout() {
        let layout = CourtLayout::default();
        let (world, bodies) = build_physics_world(&layout);
        assert_eq!(world.read_pose(bodies.ball).position, layout.ball_start);
        assert_eq!(world.read_pose(bodies.rim).position, layout.rim_center);
        assert_eq!(world.read_pose(bodies.score_trigger).position, layout.trigger_center);
        assert_ne!(bodies.ball, bodies.score_trigger);
        assert_ne!(bodies.court, bodies.backboard);
    }
}
