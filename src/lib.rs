//! Hoopshot - a drag-to-shoot 3D basketball game built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.
//! The gameplay core ([`Game`]) is plain data, so the scenario runner and the batch
//! simulator drive it without a window.

// Core modules
pub mod constants;
pub mod events;
pub mod settings;
pub mod simulation;
pub mod testing;
pub mod tuning;

// Game logic modules
pub mod game;
pub mod input;
pub mod physics;
pub mod scoring;
pub mod session;
pub mod shooting;
pub mod world;

// Presentation modules
pub mod camera;
pub mod effects;
pub mod ui;

// Re-export commonly used types for convenience
pub use camera::{MainCamera, OrbitState};
pub use constants::*;
pub use effects::{Confetti, RimFlash};
pub use events::{BasketScored, BusEvent, EventBus, GameConfig, GameEvent};
pub use game::{AimIndicator, FrameReport, Game, TrailHistory};
pub use input::PointerTracker;
pub use physics::{FlightSimulator, PhysicsWorld, Pose};
pub use scoring::ScoringMonitor;
pub use session::{PlayBounds, ResetReason, SessionState, ShotPhase};
pub use settings::InitSettings;
pub use shooting::{AimScheme, AimStrategy, PowerCurve, PowerPreset, ShotPlan, ShotPlanner};
pub use tuning::{GameplayTuning, ShotTweaks};
pub use world::{BallMesh, CourtLayout, RimLight};
