//! Shooting module - aim strategies, power charging, and arc preview

mod aim;
mod charge;
mod planner;
mod trajectory;

pub use aim::*;
pub use charge::*;
pub use planner::*;
pub use trajectory::*;
