//! Tunable constants for hoopshot
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// SCENE COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.102, 0.102, 0.180); // Deep navy
pub const COURT_COLOR: Color = Color::srgb(0.165, 0.165, 0.290);
pub const COURT_LINE_COLOR: Color = Color::WHITE;
pub const BACKBOARD_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);
pub const RIM_COLOR: Color = Color::srgb(1.0, 0.271, 0.0); // Orange-red
pub const NET_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);
pub const BALL_COLOR: Color = Color::srgb(1.0, 0.420, 0.208);
pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 25.0;

// =============================================================================
// TEXT/UI COLORS
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.95, 0.95);
pub const TEXT_ACCENT: Color = Color::srgb(1.0, 0.6, 0.2);
pub const PREVIEW_DOT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);
pub const TRAIL_COLOR: Color = Color::srgb(1.0, 0.55, 0.25);

// =============================================================================
// COURT GEOMETRY (meters, court top surface at y = 0)
// =============================================================================

pub const COURT_HALF_WIDTH: f32 = 4.0; // X extent
pub const COURT_HALF_LENGTH: f32 = 7.5; // Z extent
pub const COURT_THICKNESS: f32 = 0.1;
pub const GROUND_LEVEL: f32 = 0.0;

// =============================================================================
// BASKET GEOMETRY
// =============================================================================

pub const RIM_CENTER: Vec3 = Vec3::new(0.0, 2.0, -5.0);
pub const RIM_RADIUS: f32 = 0.4; // Ring radius (center of tube)
pub const RIM_TUBE_RADIUS: f32 = 0.05;
pub const RIM_SEGMENTS: usize = 32; // Spheres along the rim tube collider
pub const BACKBOARD_CENTER: Vec3 = Vec3::new(0.0, 2.5, -5.5); // Directly behind the rim
pub const BACKBOARD_HALF_EXTENTS: Vec3 = Vec3::new(0.75, 0.5, 0.05);
pub const NET_CENTER: Vec3 = Vec3::new(0.0, 1.75, -5.0);
pub const NET_HEIGHT: f32 = 0.5;
pub const NET_BOTTOM_RADIUS: f32 = 0.3;
pub const SCORE_TRIGGER_CENTER: Vec3 = Vec3::new(0.0, 1.75, -5.0); // Inside the net
pub const SCORE_TRIGGER_RADIUS: f32 = 0.3;

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 0.2;
pub const BALL_MASS: f32 = 1.0;
pub const BALL_START: Vec3 = Vec3::new(0.0, 1.0, 0.0); // Canonical start pose
pub const BALL_FRICTION: f32 = 0.5;
pub const BALL_RESTITUTION: f32 = 0.7;

// =============================================================================
// SURFACE MATERIALS (combined with the ball material on contact)
// =============================================================================

pub const COURT_FRICTION: f32 = 0.6;
pub const COURT_RESTITUTION: f32 = 0.8;
pub const RIM_FRICTION: f32 = 0.3;
pub const RIM_RESTITUTION: f32 = 0.6;
pub const BACKBOARD_FRICTION: f32 = 0.3;
pub const BACKBOARD_RESTITUTION: f32 = 0.8;

// =============================================================================
// PHYSICS
// =============================================================================

pub const GRAVITY: f32 = 15.0; // Downward acceleration (m/s²)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const MAX_SUBSTEPS: u32 = 3; // Max fixed steps per rendered frame
pub const LINEAR_DAMPING: f32 = 0.01; // Rapier damping coefficient (per second)
pub const ANGULAR_DAMPING: f32 = 0.5; // Stands in for rolling resistance

// =============================================================================
// SHOOTING
// =============================================================================

pub const MAX_CHARGE_SECONDS: f32 = 1.5; // Charging longer gives no extra power
pub const STANDARD_BASE_POWER: f32 = 15.0;
pub const STANDARD_CHARGE_GAIN: f32 = 20.0;
pub const SOFT_BASE_POWER: f32 = 8.0;
pub const SOFT_CHARGE_GAIN: f32 = 12.0;

// Direction aiming: drag pixels → direction components
pub const DIRECTION_DRAG_SENSITIVITY: f32 = 0.01;
pub const DIRECTION_MIN_ELEVATION_DEG: f32 = 0.0;
pub const DIRECTION_MAX_ELEVATION_DEG: f32 = 80.0;

// Angle aiming: drag pixels → radians
pub const ANGLE_YAW_PER_PIXEL: f32 = 0.004;
pub const ANGLE_PITCH_PER_PIXEL: f32 = 0.004;
pub const ANGLE_BASE_ELEVATION_DEG: f32 = 50.0;
pub const ANGLE_MIN_ELEVATION_DEG: f32 = 15.0;
pub const ANGLE_MAX_ELEVATION_DEG: f32 = 75.0;

// Debug test shot: drops the ball straight down the rim axis. The rim here is an
// open ring, so an off-axis drop with a backward push would clip the tube.
pub const TEST_SHOT_ORIGIN: Vec3 = Vec3::new(0.0, 3.0, -5.0);
pub const TEST_SHOT_IMPULSE: Vec3 = Vec3::new(0.0, -1.0, 0.0);

// =============================================================================
// PLAY VOLUME
// =============================================================================

pub const OUT_OF_BOUNDS_MIN_Y: f32 = -2.0;
pub const OUT_OF_BOUNDS_MAX_ABS_X: f32 = 6.0;
pub const OUT_OF_BOUNDS_MAX_ABS_Z: f32 = 8.0;
pub const SETTLE_SPEED: f32 = 0.05; // Ball slower than this counts as resting
pub const SETTLE_TIMEOUT: f32 = 2.0; // Seconds at rest before the attempt ends

// =============================================================================
// TRAJECTORY PREVIEW
// =============================================================================

pub const PREVIEW_SAMPLE_DT: f32 = 0.05;
pub const PREVIEW_MAX_SAMPLES: usize = 40;
pub const PREVIEW_DOT_RADIUS: f32 = 0.03;

// =============================================================================
// TRAIL
// =============================================================================

pub const TRAIL_MAX_LEN: usize = 40;
pub const TRAIL_PARTICLE_DECAY: f32 = 0.04; // Life lost per frame (life starts at 1.0)

// =============================================================================
// AIM INDICATOR
// =============================================================================

pub const AIM_INDICATOR_BASE_LENGTH: f32 = 1.0;
pub const AIM_INDICATOR_CHARGE_LENGTH: f32 = 2.0; // Extra length per second of charge
pub const AIM_INDICATOR_MAX_HUE: f32 = 108.0; // Green at zero charge, red at full

// =============================================================================
// EFFECTS
// =============================================================================

pub const CONFETTI_COUNT: usize = 150;
pub const CONFETTI_SPREAD_DEG: f32 = 70.0;
pub const CONFETTI_MIN_SPEED: f32 = 3.0;
pub const CONFETTI_MAX_SPEED: f32 = 6.0;
pub const CONFETTI_LIFETIME: f32 = 1.6;
pub const CONFETTI_GRAVITY: f32 = 6.0;
pub const CONFETTI_SIZE: f32 = 0.04;
pub const CONFETTI_COLORS: [Color; 5] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(0.0, 0.0, 1.0),
    Color::srgb(1.0, 1.0, 0.0),
    Color::srgb(1.0, 0.0, 1.0),
];
pub const RIM_LIGHT_INTENSITY: f32 = 200_000.0; // Lumens at rest
pub const RIM_LIGHT_RANGE: f32 = 10.0;
pub const RIM_FLASH_MULTIPLIER: f32 = 5.0;
pub const RIM_FLASH_DURATION: f32 = 0.3;

// =============================================================================
// CAMERA
// =============================================================================

pub const CAMERA_START: Vec3 = Vec3::new(0.0, 3.0, 8.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, -1.0);
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 15.0;
pub const CAMERA_MAX_PITCH_DEG: f32 = 89.0; // Never orbit below the court
pub const CAMERA_ORBIT_SPEED: f32 = 0.005; // Radians per pixel of drag
pub const CAMERA_ZOOM_SPEED: f32 = 0.5;
pub const CAMERA_DAMPING: f32 = 0.05; // Fraction of remaining motion applied per frame at 60 fps

// =============================================================================
// WINDOW
// =============================================================================

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
