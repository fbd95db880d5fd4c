//! Event logging and dispatch
//!
//! Drains the game's event bus once per frame, writes each event to the log
//! in the compact text format, and forwards baskets as [`BasketScored`].

use bevy::prelude::*;
use uuid::Uuid;

use super::format::serialize_event;
use super::types::{BasketScored, GameEvent};
use crate::game::Game;

/// Fresh SessionStart event: new v4 session id and the current wall-clock time
pub fn session_start_event() -> GameEvent {
    GameEvent::SessionStart {
        session_id: Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Log every pending event and fan scores out to the effect systems
pub fn dispatch_game_events(mut game: ResMut<Game>, mut scored: MessageWriter<BasketScored>) {
    for bus_event in game.events.drain() {
        let line = serialize_event(bus_event.time_ms, &bus_event.event);
        match &bus_event.event {
            GameEvent::ChargeStart { .. } => debug!("{}", line),
            GameEvent::Scored { score, .. } => {
                info!("{}", line);
                scored.write(BasketScored { score: *score });
            }
            _ => info!("{}", line),
        }
    }
}
