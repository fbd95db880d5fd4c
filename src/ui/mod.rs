//! UI module - HUD text, score flash, and gizmo overlays

mod animations;
mod hud;
mod overlay;

pub use animations::*;
pub use hud::*;
pub use overlay::*;
