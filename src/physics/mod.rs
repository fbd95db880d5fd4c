//! Rigid-body physics for the ball
//!
//! Rapier does the integration, contact solving, and continuous collision
//! detection. [`PhysicsWorld`] owns the rapier sets; [`FlightSimulator`] is
//! the ball's view of it.

mod body;
mod flight;
mod world;

pub use body::{Material, Pose};
pub use flight::FlightSimulator;
pub use world::{BodyHandle, PhysicsWorld, TriggerContact};
