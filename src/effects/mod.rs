//! Effects module - celebration effects driven by BasketScored messages

mod confetti;
mod rim_flash;

pub use confetti::*;
pub use rim_flash::*;
