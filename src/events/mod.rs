//! Game events
//!
//! The core emits [`GameEvent`]s onto an [`EventBus`]; a Bevy system drains
//! the bus each frame, logs the events in a compact text format, and turns
//! baskets into [`BasketScored`] messages.

mod bus;
mod format;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus};
pub use format::serialize_event;
pub use logger::{dispatch_game_events, session_start_event};
pub use types::{BasketScored, GameConfig, GameEvent};
